/// Task endpoints
///
/// # Endpoints
///
/// - `POST /api/tasks` - Create a task in a column
/// - `GET /api/tasks/column/{columnId}` - Tasks of a column in display order
/// - `GET /api/tasks/{id}` - Task by id
/// - `PUT /api/tasks/{id}` - Update title, description, assignee and position
/// - `DELETE /api/tasks/{id}` - Delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    app::AppState,
    dto::{validate_request, CreateTaskRequest, TaskDto, UpdateTaskRequest},
    error::ApiResult,
};

/// Creates a task in a column
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<TaskDto>> {
    validate_request(&req)?;

    info!(column_id = req.column_id, title = %req.title, "Создание задачи");
    let task = state.tasks().create_task(&req).await?;
    info!(task_id = task.id, "Задача создана");

    Ok(Json(task))
}

/// Lists the tasks of a column ordered by position
pub async fn get_tasks_by_column(
    State(state): State<AppState>,
    Path(column_id): Path<i64>,
) -> ApiResult<Json<Vec<TaskDto>>> {
    info!(column_id, "Получение задач колонки");
    let tasks = state.tasks().get_tasks_by_column(column_id).await?;
    Ok(Json(tasks))
}

/// Returns a task by id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskDto>> {
    info!(task_id = id, "Получение задачи");
    let task = state.tasks().get_task_by_id(id).await?;
    Ok(Json(task))
}

/// Updates a task
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskDto>> {
    validate_request(&req)?;

    info!(task_id = id, title = %req.title, "Обновление задачи");
    let task = state.tasks().update_task(id, &req).await?;
    Ok(Json(task))
}

/// Deletes a task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    info!(task_id = id, "Удаление задачи");
    state.tasks().delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
