/// Task model and database operations
///
/// A task is a unit of work within a column, optionally assigned to a user.
/// Position is optional on tasks; when auto-assigned it equals the count of
/// sibling tasks at creation time (append to end, no re-indexing on delete).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE task (
///     id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     description TEXT,
///     position INT,
///     column_id BIGINT NOT NULL REFERENCES board_column (id) ON DELETE CASCADE,
///     assignee_id BIGINT REFERENCES app_user (id) ON DELETE SET NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id
    pub id: i64,

    /// Task title, never blank after validation
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Zero-based ordering key among the column's tasks
    pub position: Option<i32>,

    /// Id of the owning column
    pub column_id: i64,

    /// Id of the assigned user, if any
    pub assignee_id: Option<i64>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Position within the column
    pub position: Option<i32>,

    /// Id of the owning column
    pub column_id: i64,

    /// Optional assignee id
    pub assignee_id: Option<i64>,
}

impl Task {
    /// Creates a new task
    pub async fn create(pool: &PgPool, data: NewTask) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO task (title, description, position, column_id, assignee_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, position, column_id, assignee_id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.position)
        .bind(data.column_id)
        .bind(data.assignee_id)
        .fetch_one(pool)
        .await
    }

    /// Finds a task by id, `None` if absent
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, position, column_id, assignee_id
            FROM task
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a column's tasks ordered ascending by position
    ///
    /// Tasks without a position sort last; id breaks ties.
    pub async fn list_by_column(pool: &PgPool, column_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, position, column_id, assignee_id
            FROM task
            WHERE column_id = $1
            ORDER BY position NULLS LAST, id
            "#,
        )
        .bind(column_id)
        .fetch_all(pool)
        .await
    }

    /// Counts the tasks of a column
    ///
    /// Used for the append-to-end default position at creation time.
    pub async fn count_by_column(pool: &PgPool, column_id: i64) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM task WHERE column_id = $1")
            .bind(column_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Overwrites title, description, position, and assignee of a task
    ///
    /// Returns the updated task, `None` if no task has that id.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        title: &str,
        description: Option<&str>,
        position: Option<i32>,
        assignee_id: Option<i64>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE task
            SET title = $2, description = $3, position = $4, assignee_id = $5
            WHERE id = $1
            RETURNING id, title, description, position, column_id, assignee_id
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(position)
        .bind(assignee_id)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a task by id
    ///
    /// Returns true if the task existed.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
