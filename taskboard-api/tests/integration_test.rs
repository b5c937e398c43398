/// Integration tests for the Taskboard API
///
/// These tests verify the full system works end-to-end against a real
/// PostgreSQL instance named by `TEST_DATABASE_URL`:
/// - Registration, login and the authenticated user endpoint
/// - Board/column/task CRUD with positional ordering
/// - Validation and authorization failures
///
/// When `TEST_DATABASE_URL` is unset every test skips.

mod common;

use axum::http::StatusCode;
use common::{unique_username, TestContext};
use serde_json::json;

macro_rules! require_ctx {
    () => {
        match TestContext::new().await.unwrap() {
            Some(ctx) => ctx,
            None => {
                eprintln!("TEST_DATABASE_URL not set, skipping");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_register_login_me() {
    let ctx = require_ctx!();
    let username = unique_username("alice");

    let (status, body) = ctx
        .post_json(
            "/api/auth/register",
            None,
            json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "pw123456",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("User registered"));

    let (status, body) = ctx
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": username, "password": "pw123456" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = ctx.get("/api/users/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], json!(username));
    assert_eq!(body["email"], json!(format!("{username}@example.com")));
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let ctx = require_ctx!();
    let username = unique_username("dup");

    let payload = json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "pw123456",
    });

    let (status, _) = ctx.post_json("/api/auth/register", None, payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = ctx.post_json("/api/auth/register", None, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], json!(409));
    assert_eq!(body["message"], json!("Имя пользователя уже занято"));

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_login_with_wrong_password_rejected() {
    let ctx = require_ctx!();
    let username = unique_username("badpw");
    let _token = ctx.register_and_login(&username, "pw123456").await;

    let (status, body) = ctx
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": username, "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Неверное имя пользователя или пароль"));

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let ctx = require_ctx!();

    let (status, _) = ctx.get("/api/boards", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = ctx.get("/api/users/me", Some("not-a-real-token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_board_crud() {
    let ctx = require_ctx!();
    let username = unique_username("boards");
    let token = ctx.register_and_login(&username, "pw123456").await;

    let (status, board) = ctx
        .post_json("/api/boards", Some(&token), json!({ "title": "Проект" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["title"], json!("Проект"));
    let board_id = board["id"].as_i64().unwrap();

    let (status, boards) = ctx.get("/api/boards", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(boards.as_array().unwrap().len(), 1);

    let (status, updated) = ctx
        .request_json(
            "PUT",
            &format!("/api/boards/{board_id}"),
            Some(&token),
            Some(json!({ "title": "Переименовано" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], json!("Переименовано"));
    assert_eq!(updated["id"], json!(board_id));

    let (status, _) = ctx
        .request_json("DELETE", &format!("/api/boards/{board_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = ctx
        .get(&format!("/api/boards/{board_id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_blank_board_title_rejected() {
    let ctx = require_ctx!();
    let username = unique_username("blank");
    let token = ctx.register_and_login(&username, "pw123456").await;

    let (status, body) = ctx
        .post_json("/api/boards", Some(&token), json!({ "title": "   " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(
        message.contains("не может быть пустым"),
        "unexpected message: {message}"
    );

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_column_positions_assigned_in_order() {
    let ctx = require_ctx!();
    let username = unique_username("cols");
    let token = ctx.register_and_login(&username, "pw123456").await;

    let (_, board) = ctx
        .post_json("/api/boards", Some(&token), json!({ "title": "Доска" }))
        .await;
    let board_id = board["id"].as_i64().unwrap();

    let (status, first) = ctx
        .post_json(
            "/api/columns",
            Some(&token),
            json!({ "name": "Todo", "boardId": board_id }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["position"], json!(0));

    let (_, second) = ctx
        .post_json(
            "/api/columns",
            Some(&token),
            json!({ "name": "Done", "boardId": board_id }),
        )
        .await;
    assert_eq!(second["position"], json!(1));

    // Explicit position wins over the default
    let (_, third) = ctx
        .post_json(
            "/api/columns",
            Some(&token),
            json!({ "name": "Doing", "boardId": board_id, "position": 1 }),
        )
        .await;
    assert_eq!(third["position"], json!(1));

    let (status, columns) = ctx
        .get(&format!("/api/columns/board/{board_id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let positions: Vec<i64> = columns
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["position"].as_i64().unwrap())
        .collect();
    assert_eq!(positions, vec![0, 1, 1]);

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_column_on_missing_board_rejected() {
    let ctx = require_ctx!();
    let username = unique_username("nocol");
    let token = ctx.register_and_login(&username, "pw123456").await;

    let (status, _) = ctx
        .post_json(
            "/api/columns",
            Some(&token),
            json!({ "name": "Todo", "boardId": 999_999_999 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_task_lifecycle() {
    let ctx = require_ctx!();
    let username = unique_username("tasks");
    let token = ctx.register_and_login(&username, "pw123456").await;

    let (_, board) = ctx
        .post_json("/api/boards", Some(&token), json!({ "title": "Доска" }))
        .await;
    let board_id = board["id"].as_i64().unwrap();

    let (_, column) = ctx
        .post_json(
            "/api/columns",
            Some(&token),
            json!({ "name": "Todo", "boardId": board_id }),
        )
        .await;
    let column_id = column["id"].as_i64().unwrap();

    let (_, me) = ctx.get("/api/users/me", Some(&token)).await;
    let user_id = me["id"].as_i64().unwrap();

    let (status, task) = ctx
        .post_json(
            "/api/tasks",
            Some(&token),
            json!({
                "title": "Первая задача",
                "description": "описание",
                "columnId": column_id,
                "assigneeId": user_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["position"], json!(0));
    assert_eq!(task["assigneeId"], json!(user_id));
    let task_id = task["id"].as_i64().unwrap();

    // Update without position keeps the stored position
    let (status, updated) = ctx
        .request_json(
            "PUT",
            &format!("/api/tasks/{task_id}"),
            Some(&token),
            Some(json!({ "title": "Переименована", "assigneeId": null })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], json!("Переименована"));
    assert_eq!(updated["position"], json!(0));
    assert_eq!(updated["assigneeId"], json!(null));

    let (status, tasks) = ctx
        .get(&format!("/api/tasks/column/{column_id}"), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    let (status, _) = ctx
        .request_json("DELETE", &format!("/api/tasks/{task_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = ctx
        .request_json("DELETE", &format!("/api/tasks/{task_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_task_with_missing_assignee_rejected() {
    let ctx = require_ctx!();
    let username = unique_username("badassign");
    let token = ctx.register_and_login(&username, "pw123456").await;

    let (_, board) = ctx
        .post_json("/api/boards", Some(&token), json!({ "title": "Доска" }))
        .await;
    let (_, column) = ctx
        .post_json(
            "/api/columns",
            Some(&token),
            json!({ "name": "Todo", "boardId": board["id"] }),
        )
        .await;

    let (status, _) = ctx
        .post_json(
            "/api/tasks",
            Some(&token),
            json!({
                "title": "Задача",
                "columnId": column["id"],
                "assigneeId": 999_999_999,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    ctx.cleanup_user(&username).await.unwrap();
}

#[tokio::test]
async fn test_health_is_public() {
    let ctx = require_ctx!();

    let (status, body) = ctx.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["database"], json!("connected"));
}
