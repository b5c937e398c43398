/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (gated on `TEST_DATABASE_URL`)
/// - Router construction with a fixed JWT secret
/// - Registration/login helpers
/// - Request helpers returning status and parsed JSON

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use tower::Service as _;

const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test context containing the database pool and the router under test
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context against `TEST_DATABASE_URL`
    ///
    /// Returns `None` when the variable is unset so tests can skip instead
    /// of failing on machines without a database.
    pub async fn new() -> anyhow::Result<Option<Self>> {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            return Ok(None);
        };

        let db = PgPool::connect(&url).await?;
        taskboard_shared::db::migrations::run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(Some(TestContext { db, app }))
    }

    /// Registers a user through the API and returns a bearer token for them
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let (status, _) = self
            .post_json(
                "/api/auth/register",
                None,
                serde_json::json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": password,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "registration failed for {username}");

        let (status, body) = self
            .post_json(
                "/api/auth/login",
                None,
                serde_json::json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed for {username}");

        body["token"]
            .as_str()
            .expect("login response must carry a token")
            .to_string()
    }

    /// Sends a JSON request and returns status plus parsed body
    ///
    /// Non-JSON bodies (plain-text responses, empty 204 bodies) come back
    /// as a JSON string value.
    pub async fn request_json(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()));

        (status, json)
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request_json("POST", uri, token, Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request_json("GET", uri, token, None).await
    }

    /// Removes a test user; boards, columns and tasks cascade
    pub async fn cleanup_user(&self, username: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM app_user WHERE username = $1")
            .bind(username)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

/// Produces a username unique across test runs
pub fn unique_username(prefix: &str) -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    format!("{prefix}_{}_{nanos}", std::process::id())
}
