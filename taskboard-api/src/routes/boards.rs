/// Board endpoints
///
/// # Endpoints
///
/// - `POST /api/boards` - Create a board owned by the caller
/// - `GET /api/boards` - The caller's own boards
/// - `GET /api/boards/{id}` - Board by id
/// - `PUT /api/boards/{id}` - Replace the title
/// - `DELETE /api/boards/{id}` - Delete (cascades to columns and tasks)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use crate::{
    app::AppState,
    dto::{validate_request, BoardDto, BoardRequest},
    error::ApiResult,
};
use taskboard_shared::auth::middleware::CurrentUser;

/// Creates a new board owned by the authenticated caller
pub async fn create_board(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<BoardRequest>,
) -> ApiResult<Json<BoardDto>> {
    validate_request(&req)?;

    info!(username = %current.username, title = %req.title, "Создание доски");
    let board = state.boards().create_board(&req, &current.username).await?;
    info!(board_id = board.id, "Доска создана");

    Ok(Json(board))
}

/// Lists the caller's own boards
pub async fn get_boards(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<BoardDto>>> {
    info!(username = %current.username, "Получение досок пользователя");
    let boards = state.boards().get_boards_for_user(&current.username).await?;
    Ok(Json(boards))
}

/// Returns a board by id
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BoardDto>> {
    info!(board_id = id, "Получение доски");
    let board = state.boards().get_board_by_id(id).await?;
    Ok(Json(board))
}

/// Replaces the title of a board
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<BoardRequest>,
) -> ApiResult<Json<BoardDto>> {
    validate_request(&req)?;

    info!(board_id = id, title = %req.title, "Обновление доски");
    let board = state.boards().update_board(id, &req).await?;
    Ok(Json(board))
}

/// Deletes a board
pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    info!(board_id = id, "Удаление доски");
    state.boards().delete_board(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
