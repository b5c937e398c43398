/// Task service
///
/// CRUD for tasks with positional ordering and an optional assignee. The
/// default position on create equals the current task count in the column
/// (append to end). An assignee id that resolves to no user is a NotFound,
/// on both create and update.

use sqlx::PgPool;
use tracing::info;

use super::{ColumnService, ServiceError, ServiceResult, UserService};
use crate::{
    dto::{CreateTaskRequest, TaskDto, UpdateTaskRequest},
    mappers,
};
use taskboard_shared::models::{task::Task, user::User};

/// Service for task CRUD
#[derive(Clone)]
pub struct TaskService {
    db: PgPool,
    columns: ColumnService,
    users: UserService,
}

impl TaskService {
    pub fn new(db: PgPool) -> Self {
        Self {
            columns: ColumnService::new(db.clone()),
            users: UserService::new(db.clone()),
            db,
        }
    }

    /// Creates a task under a column
    ///
    /// # Errors
    ///
    /// `ServiceError::NotFound` when the parent column is absent, or when an
    /// assignee id is given but no such user exists.
    pub async fn create_task(&self, request: &CreateTaskRequest) -> ServiceResult<TaskDto> {
        let column = self.columns.find_by_id(request.column_id).await?;
        let assignee = self.resolve_assignee(request.assignee_id).await?;

        let position = match request.position {
            Some(position) => position,
            None => Task::count_by_column(&self.db, column.id).await? as i32,
        };

        let task = Task::create(
            &self.db,
            mappers::new_task(request, &column, assignee.as_ref(), position),
        )
        .await?;

        info!(task_id = task.id, column_id = column.id, "Создана задача");
        Ok(mappers::task_to_dto(&task))
    }

    /// Lists a column's tasks ordered ascending by position
    pub async fn get_tasks_by_column(&self, column_id: i64) -> ServiceResult<Vec<TaskDto>> {
        let column = self.columns.find_by_id(column_id).await?;
        let tasks = Task::list_by_column(&self.db, column.id).await?;

        info!(count = tasks.len(), column_id, "Получены задачи колонки");
        Ok(tasks.iter().map(mappers::task_to_dto).collect())
    }

    /// Returns the task entity for internal use
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Task> {
        Task::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Задача с id={} не найдена", id)))
    }

    /// Returns the task as a DTO for display on the client
    pub async fn get_task_by_id(&self, id: i64) -> ServiceResult<TaskDto> {
        let task = self.find_by_id(id).await?;
        info!(task_id = id, "Получена задача");
        Ok(mappers::task_to_dto(&task))
    }

    /// Overwrites title/description/assignee; position only when supplied
    pub async fn update_task(&self, id: i64, request: &UpdateTaskRequest) -> ServiceResult<TaskDto> {
        let existing = self.find_by_id(id).await?;
        let assignee = self.resolve_assignee(request.assignee_id).await?;

        let merged = mappers::merge_task(&existing, request, assignee.as_ref());

        let saved = Task::update(
            &self.db,
            id,
            &merged.title,
            merged.description.as_deref(),
            merged.position,
            merged.assignee_id,
        )
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Задача с id={} не найдена", id)))?;

        info!(task_id = id, "Обновлена задача");
        Ok(mappers::task_to_dto(&saved))
    }

    /// Deletes a task by id
    pub async fn delete_task(&self, id: i64) -> ServiceResult<()> {
        let deleted = Task::delete(&self.db, id).await?;
        if !deleted {
            return Err(ServiceError::NotFound(format!(
                "Задача с id={} не найдена",
                id
            )));
        }

        info!(task_id = id, "Задача удалена");
        Ok(())
    }

    /// Resolves an optional assignee id to a user record
    async fn resolve_assignee(&self, assignee_id: Option<i64>) -> ServiceResult<Option<User>> {
        match assignee_id {
            Some(id) => Ok(Some(self.users.find_by_id(id).await?)),
            None => Ok(None),
        }
    }
}
