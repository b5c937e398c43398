/// User endpoints
///
/// # Endpoints
///
/// - `GET /api/users/me` - The authenticated caller's own record
/// - `GET /api/users` - All users (password excluded)

use axum::{extract::State, Extension, Json};
use tracing::info;

use crate::{app::AppState, dto::UserDto, error::ApiResult};
use taskboard_shared::auth::middleware::CurrentUser;

/// Returns the authenticated caller as a DTO
pub async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<Json<UserDto>> {
    info!(user_id = current.id, "Получение информации о пользователе");
    let user = state.users().get_user_by_id(current.id).await?;
    Ok(Json(user))
}

/// Lists all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users().get_all().await?;
    Ok(Json(users))
}
