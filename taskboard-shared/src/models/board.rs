/// Board model and database operations
///
/// A board is the top-level container, owned by exactly one user and holding
/// ordered columns. Deleting a board cascades to its columns and their tasks.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE board (
///     id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     owner_id BIGINT NOT NULL REFERENCES app_user (id) ON DELETE CASCADE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Board record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Board {
    /// Unique board id
    pub id: i64,

    /// Board title, never blank after validation
    pub title: String,

    /// Id of the owning user
    pub owner_id: i64,
}

/// Input for creating a new board
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// Board title
    pub title: String,

    /// Id of the owning user
    pub owner_id: i64,
}

impl Board {
    /// Creates a new board
    pub async fn create(pool: &PgPool, data: NewBoard) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO board (title, owner_id)
            VALUES ($1, $2)
            RETURNING id, title, owner_id
            "#,
        )
        .bind(data.title)
        .bind(data.owner_id)
        .fetch_one(pool)
        .await
    }

    /// Finds a board by id, `None` if absent
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            r#"
            SELECT id, title, owner_id
            FROM board
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists all boards owned by a user, ordered by id
    pub async fn list_by_owner(pool: &PgPool, owner_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            r#"
            SELECT id, title, owner_id
            FROM board
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Replaces the title of an existing board
    ///
    /// Returns the updated board, `None` if no board has that id.
    pub async fn update_title(
        pool: &PgPool,
        id: i64,
        title: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Board>(
            r#"
            UPDATE board
            SET title = $2
            WHERE id = $1
            RETURNING id, title, owner_id
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a board by id
    ///
    /// Returns true if the board existed. Contained columns and their tasks
    /// are removed by the cascade.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM board WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
