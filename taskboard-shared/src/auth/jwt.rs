/// JWT token generation and validation module
///
/// Tokens are signed using HS256 (HMAC-SHA256) and carry the username as the
/// subject claim. Every token expires 24 hours after issuance; there is no
/// server-side session state, each request is authenticated independently.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC with SHA-256)
/// - **Expiration**: 24 hours
/// - **Validation**: Signature, expiration, and issuer checks
/// - **Secret Management**: Secrets should be at least 32 bytes (256 bits)
///
/// # Example
///
/// ```
/// use taskboard_shared::auth::jwt::{generate_token, extract_username};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "your-secret-key-at-least-32-bytes";
/// let token = generate_token("alice", secret)?;
///
/// let username = extract_username(&token, secret)?;
/// assert_eq!(username, "alice");
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issuer embedded into every token
const ISSUER: &str = "taskboard";

/// Token lifetime
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Failed to validate token
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Invalid issuer
    #[error("Invalid issuer: expected {ISSUER}")]
    InvalidIssuer,
}

/// JWT claims structure
///
/// # Claims
///
/// - `sub`: Subject (username)
/// - `iss`: Issuer (always "taskboard")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - username
    pub sub: String,

    /// Issuer - always "taskboard"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a username with the default 24-hour expiry
    pub fn new(username: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: username.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        }
    }

    /// Creates claims with a custom expiration, used by expiry tests
    pub fn with_expiration(username: &str, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: username.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a JWT token string
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Generates a signed token for a username
///
/// The token carries the username as subject, the issue time, and a
/// 24-hour expiry.
///
/// # Example
///
/// ```
/// use taskboard_shared::auth::jwt::generate_token;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = generate_token("alice", "secret-key-at-least-32-bytes-long")?;
/// assert!(!token.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn generate_token(username: &str, secret: &str) -> Result<String, JwtError> {
    tracing::debug!(username, "Generating JWT token");
    create_token(&Claims::new(username), secret)
}

/// Parses and verifies a token, returning its claims
///
/// Verifies:
/// - Signature is valid
/// - Token hasn't expired
/// - Issuer is "taskboard"
///
/// # Errors
///
/// Returns `JwtError::Expired` for expired tokens, `JwtError::InvalidIssuer`
/// for a wrong issuer, and `JwtError::ValidationError` for malformed tokens
/// or bad signatures.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

/// Extracts the username (subject) from a verified token
///
/// # Errors
///
/// Fails if the token is malformed, expired, or the signature does not
/// verify.
///
/// # Example
///
/// ```
/// use taskboard_shared::auth::jwt::{generate_token, extract_username};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "secret-key-at-least-32-bytes-long";
/// let token = generate_token("alice", secret)?;
/// assert_eq!(extract_username(&token, secret)?, "alice");
/// # Ok(())
/// # }
/// ```
pub fn extract_username(token: &str, secret: &str) -> Result<String, JwtError> {
    let claims = validate_token(token, secret)?;
    tracing::debug!(username = %claims.sub, "Extracted username from JWT");
    Ok(claims.sub)
}

/// Checks a token against an expected username
///
/// Returns true iff extraction succeeds and the recovered subject equals
/// `expected_username`. Never errors: any validation failure is `false`.
pub fn is_token_valid(token: &str, expected_username: &str, secret: &str) -> bool {
    match extract_username(token, secret) {
        Ok(username) => {
            let valid = username == expected_username;
            tracing::debug!(username = expected_username, valid, "Token validation");
            valid
        }
        Err(e) => {
            tracing::warn!(username = expected_username, error = %e, "Token validation failed");
            false
        }
    }
}
