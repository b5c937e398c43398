/// Board column model and database operations
///
/// Columns are ordered containers of tasks within a board. Ordering uses a
/// zero-based integer position; uniqueness of positions within a board is by
/// convention only and not enforced, so stale or duplicate positions are
/// possible after deletions.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE board_column (
///     id BIGSERIAL PRIMARY KEY,
///     name TEXT NOT NULL,
///     position INT NOT NULL,
///     board_id BIGINT NOT NULL REFERENCES board (id) ON DELETE CASCADE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Board column record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BoardColumn {
    /// Unique column id
    pub id: i64,

    /// Column name, never blank after validation
    pub name: String,

    /// Zero-based ordering key among the board's columns
    pub position: i32,

    /// Id of the owning board
    pub board_id: i64,
}

/// Input for creating a new column
#[derive(Debug, Clone)]
pub struct NewBoardColumn {
    /// Column name
    pub name: String,

    /// Position within the board
    pub position: i32,

    /// Id of the owning board
    pub board_id: i64,
}

impl BoardColumn {
    /// Creates a new column
    pub async fn create(pool: &PgPool, data: NewBoardColumn) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, BoardColumn>(
            r#"
            INSERT INTO board_column (name, position, board_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, position, board_id
            "#,
        )
        .bind(data.name)
        .bind(data.position)
        .bind(data.board_id)
        .fetch_one(pool)
        .await
    }

    /// Finds a column by id, `None` if absent
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, BoardColumn>(
            r#"
            SELECT id, name, position, board_id
            FROM board_column
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a board's columns ordered ascending by position
    ///
    /// Id breaks ties so the order stays deterministic when positions
    /// collide.
    pub async fn list_by_board(pool: &PgPool, board_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, BoardColumn>(
            r#"
            SELECT id, name, position, board_id
            FROM board_column
            WHERE board_id = $1
            ORDER BY position, id
            "#,
        )
        .bind(board_id)
        .fetch_all(pool)
        .await
    }

    /// Counts the columns of a board
    ///
    /// Used for the append-to-end default position at creation time.
    pub async fn count_by_board(pool: &PgPool, board_id: i64) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM board_column WHERE board_id = $1")
                .bind(board_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Overwrites name and position of an existing column
    ///
    /// Returns the updated column, `None` if no column has that id.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: &str,
        position: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, BoardColumn>(
            r#"
            UPDATE board_column
            SET name = $2, position = $3
            WHERE id = $1
            RETURNING id, name, position, board_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(position)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a column by id
    ///
    /// Returns true if the column existed. Contained tasks are removed by the
    /// cascade.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM board_column WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
