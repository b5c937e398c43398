/// Authentication utilities
///
/// This module provides the authentication primitives for TaskBoard:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: JWT token generation and validation
/// - [`middleware`]: Bearer-token extraction and the request identity value
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with random per-hash salts
/// - **JWT Tokens**: HS256 signing with a 24-hour expiry
/// - **Constant-time Comparison**: Password verification is constant-time
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::auth::password::{hash_password, verify_password};
/// use taskboard_shared::auth::jwt;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let token = jwt::generate_token("alice", "secret-key-at-least-32-bytes-long")?;
/// let username = jwt::extract_username(&token, "secret-key-at-least-32-bytes-long")?;
/// assert_eq!(username, "alice");
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
