/// Business services
///
/// Each resource gets a service that validates relations, applies the few
/// business rules this system has (default position assignment, ownership
/// lookup, duplicate-username rejection), and delegates persistence to the
/// models in `taskboard-shared`.
///
/// Services are cheap to construct: they hold a cloned pool handle and build
/// their collaborator services from it.
///
/// # Modules
///
/// - `user`: registration, credential validation, lookups
/// - `board`: board CRUD scoped to an owning user
/// - `column`: column CRUD with positional ordering
/// - `task`: task CRUD with positional ordering and optional assignee

pub mod board;
pub mod column;
pub mod task;
pub mod user;

pub use board::BoardService;
pub use column::ColumnService;
pub use task::TaskService;
pub use user::UserService;

use taskboard_shared::auth::password::PasswordError;

/// Error type shared by all services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Entity id or relation absent (maps to 404)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique value (maps to 409)
    #[error("{0}")]
    Conflict(String),

    /// Business-rule validation failure (maps to 400)
    #[error("{0}")]
    Validation(String),

    /// Store failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing/verification failure
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Service result type alias
pub type ServiceResult<T> = Result<T, ServiceError>;
