/// User service
///
/// Registration, credential validation, and user lookups. A failed login is
/// a defined negative result (`Ok(None)`), never an error: the caller
/// decides how to surface it.

use sqlx::PgPool;
use tracing::info;

use super::{ServiceError, ServiceResult};
use crate::{dto::UserDto, mappers};
use taskboard_shared::auth::password;
use taskboard_shared::models::user::{NewUser, User};

/// Service for user registration and lookup
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Registers a new user
    ///
    /// Hashes the raw password and persists the account.
    ///
    /// # Errors
    ///
    /// `ServiceError::Conflict` when the username is already taken.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        raw_password: &str,
    ) -> ServiceResult<User> {
        if User::find_by_username(&self.db, username).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Имя пользователя уже занято".to_string(),
            ));
        }

        let password_hash = password::hash_password(raw_password)?;
        let user = User::create(
            &self.db,
            NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            },
        )
        .await?;

        info!(user_id = user.id, username, "Зарегистрирован пользователь");
        Ok(user)
    }

    /// Validates credentials, returning the user on a match
    ///
    /// `Ok(None)` when the username is unknown or the password does not
    /// verify; this distinguishes a failed login from a system error.
    pub async fn validate_credentials(
        &self,
        username: &str,
        raw_password: &str,
    ) -> ServiceResult<Option<User>> {
        let Some(user) = User::find_by_username(&self.db, username).await? else {
            return Ok(None);
        };

        if password::verify_password(raw_password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Returns the user entity for a username
    ///
    /// Used internally by board and auth flows; callers translate the
    /// NotFound to 404 or 401 depending on context.
    pub async fn load_by_username(&self, username: &str) -> ServiceResult<User> {
        User::find_by_username(&self.db, username)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Пользователь '{}' не найден", username))
            })
    }

    /// Returns the user entity for an id
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<User> {
        User::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Пользователь с id={} не найден", id)))
    }

    /// Returns the user as a DTO for display on the client
    pub async fn get_user_by_id(&self, id: i64) -> ServiceResult<UserDto> {
        let user = self.find_by_id(id).await?;
        info!(user_id = user.id, "Получен пользователь");
        Ok(mappers::user_to_dto(&user))
    }

    /// Returns all users as DTOs (password excluded)
    pub async fn get_all(&self) -> ServiceResult<Vec<UserDto>> {
        let users = User::list(&self.db).await?;
        Ok(users.iter().map(mappers::user_to_dto).collect())
    }
}
