/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/auth/register` - Register a new user
/// - `POST /api/auth/login` - Login and get a bearer token

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::{
    app::AppState,
    dto::{validate_request, LoginRequest, LoginResponse, RegisterRequest},
    error::{ApiError, ApiResult},
};
use taskboard_shared::auth::jwt;

/// Registers a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/register
/// Content-Type: application/json
///
/// {"username": "alice", "email": "a@x.com", "password": "pw123456"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: blank/invalid fields
/// - `409 Conflict`: username already taken
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<&'static str> {
    validate_request(&req)?;

    info!(username = %req.username, email = %req.email, "Регистрация нового пользователя");

    state
        .users()
        .register(&req.username, &req.email, &req.password)
        .await?;

    info!(username = %req.username, "Пользователь успешно зарегистрирован");
    Ok("User registered")
}

/// Authenticates a user and returns a signed token
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/login
/// Content-Type: application/json
///
/// {"username": "alice", "password": "pw123456"}
/// ```
///
/// # Response
///
/// ```json
/// {"token": "eyJ..."}
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: invalid credentials (no token issued)
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    info!(username = %req.username, "Попытка входа пользователя");

    let user = state
        .users()
        .validate_credentials(&req.username, &req.password)
        .await?
        .ok_or_else(|| {
            warn!(username = %req.username, "Неудачная попытка входа");
            ApiError::Unauthorized("Неверное имя пользователя или пароль".to_string())
        })?;

    let token = jwt::generate_token(&user.username, state.jwt_secret())?;

    info!(username = %user.username, "Пользователь успешно вошёл");
    Ok(Json(LoginResponse { token }))
}
