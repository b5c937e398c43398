/// Transport types for the HTTP surface
///
/// DTOs are ephemeral, per-request projections of persisted entities; they
/// never carry the password hash. Requests are validated with `validator`
/// before any service logic runs. Wire format is camelCase JSON.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::ApiError;

/// User projection: id, username, email — password excluded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Board projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub id: i64,
    pub title: String,
    pub owner_id: i64,
}

/// Board column projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnDto {
    pub id: i64,
    pub name: String,
    pub position: i32,
    pub board_id: i64,
}

/// Task projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub position: Option<i32>,
    pub column_id: i64,
    pub assignee_id: Option<i64>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(custom(function = not_blank))]
    pub username: String,

    #[validate(email(message = "Некорректный email"))]
    pub email: String,

    #[validate(length(min = 8, message = "Пароль должен содержать не менее 8 символов"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Create/update request for a board
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BoardRequest {
    #[validate(custom(function = not_blank))]
    pub title: String,
}

/// Create request for a column
///
/// Position is optional; when omitted the column is appended to the end of
/// the board.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnRequest {
    #[validate(custom(function = not_blank))]
    pub name: String,

    pub board_id: i64,

    pub position: Option<i32>,
}

/// Update request for a column
///
/// A `null` position keeps the existing position.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumnRequest {
    #[validate(custom(function = not_blank))]
    pub name: String,

    pub position: Option<i32>,
}

/// Create request for a task
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[validate(custom(function = not_blank))]
    pub title: String,

    pub description: Option<String>,

    pub column_id: i64,

    pub assignee_id: Option<i64>,

    pub position: Option<i32>,
}

/// Update request for a task
///
/// Title, description, and assignee overwrite unconditionally; a `null`
/// position keeps the existing position.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[validate(custom(function = not_blank))]
    pub title: String,

    pub description: Option<String>,

    pub assignee_id: Option<i64>,

    pub position: Option<i32>,
}

/// Rejects blank (empty or whitespace-only) required fields
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("не может быть пустым".into());
        return Err(err);
    }
    Ok(())
}

/// Runs request validation, aggregating field errors into a 400 message
///
/// Produces messages like `Ошибка валидации: title: не может быть пустым`,
/// one `field: message` pair per failing constraint.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "некорректное значение".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        ApiError::BadRequest(format!("Ошибка валидации: {}", errors.join("; ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_rejected() {
        let req = BoardRequest {
            title: "   ".to_string(),
        };

        let err = validate_request(&req).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Ошибка валидации"), "got: {}", msg);
        assert!(msg.contains("не может быть пустым"), "got: {}", msg);
    }

    #[test]
    fn test_valid_board_request() {
        let req = BoardRequest {
            title: "Sprint 1".to_string(),
        };
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(validate_request(&ok).is_ok());

        let bad_email = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(validate_request(&bad_email).is_err());

        let short_password = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        };
        assert!(validate_request(&short_password).is_err());
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = BoardColumnDto {
            id: 1,
            name: "To Do".to_string(),
            position: 0,
            board_id: 2,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["boardId"], 2);
        assert!(json.get("board_id").is_none());
    }

    #[test]
    fn test_create_column_request_optional_position() {
        let req: CreateColumnRequest =
            serde_json::from_str(r#"{"name":"To Do","boardId":1}"#).unwrap();
        assert_eq!(req.board_id, 1);
        assert!(req.position.is_none());
    }
}
