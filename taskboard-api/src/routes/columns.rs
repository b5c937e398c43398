/// Column endpoints
///
/// # Endpoints
///
/// - `POST /api/columns` - Create a column on a board
/// - `GET /api/columns/board/{boardId}` - Columns of a board in display order
/// - `GET /api/columns/{id}` - Column by id
/// - `PUT /api/columns/{id}` - Update name and position
/// - `DELETE /api/columns/{id}` - Delete (cascades to tasks)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    app::AppState,
    dto::{validate_request, BoardColumnDto, CreateColumnRequest, UpdateColumnRequest},
    error::ApiResult,
};

/// Creates a column on a board
pub async fn create_column(
    State(state): State<AppState>,
    Json(req): Json<CreateColumnRequest>,
) -> ApiResult<Json<BoardColumnDto>> {
    validate_request(&req)?;

    info!(board_id = req.board_id, name = %req.name, "Создание колонки");
    let column = state.columns().create_column(&req).await?;
    info!(column_id = column.id, "Колонка создана");

    Ok(Json(column))
}

/// Lists the columns of a board ordered by position
pub async fn get_columns_by_board(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> ApiResult<Json<Vec<BoardColumnDto>>> {
    info!(board_id, "Получение колонок доски");
    let columns = state.columns().get_columns_by_board(board_id).await?;
    Ok(Json(columns))
}

/// Returns a column by id
pub async fn get_column(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BoardColumnDto>> {
    info!(column_id = id, "Получение колонки");
    let column = state.columns().get_column_by_id(id).await?;
    Ok(Json(column))
}

/// Updates the name and position of a column
pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateColumnRequest>,
) -> ApiResult<Json<BoardColumnDto>> {
    validate_request(&req)?;

    info!(column_id = id, name = %req.name, "Обновление колонки");
    let column = state.columns().update_column(id, &req).await?;
    Ok(Json(column))
}

/// Deletes a column
pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    info!(column_id = id, "Удаление колонки");
    state.columns().delete_column(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
