/// Database models for TaskBoard
///
/// This module contains the persisted entities and their CRUD queries.
/// Relations are plain foreign-key ids; related entities are fetched
/// explicitly by id, never as embedded object graphs.
///
/// # Models
///
/// - `user`: User accounts (unique username, hashed password)
/// - `board`: Top-level containers owned by one user
/// - `board_column`: Ordered columns within a board
/// - `task`: Units of work within a column, optionally assigned to a user
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{NewUser, User};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     NewUser {
///         username: "alice".to_string(),
///         email: "a@x.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod board;
pub mod board_column;
pub mod task;
pub mod user;
