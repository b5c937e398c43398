/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    services::{BoardService, ColumnService, TaskService, UserService},
};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskboard_shared::{
    auth::{
        jwt,
        middleware::{bearer_token, CurrentUser},
    },
    models::user::User,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }

    /// User service bound to the shared pool
    pub fn users(&self) -> UserService {
        UserService::new(self.db.clone())
    }

    /// Board service bound to the shared pool
    pub fn boards(&self) -> BoardService {
        BoardService::new(self.db.clone())
    }

    /// Column service bound to the shared pool
    pub fn columns(&self) -> ColumnService {
        ColumnService::new(self.db.clone())
    }

    /// Task service bound to the shared pool
    pub fn tasks(&self) -> TaskService {
        TaskService::new(self.db.clone())
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// The router is organized as follows:
/// ```text
/// /
/// ├── /health                        # Health check (public)
/// └── /api/
///     ├── /auth/                     # Authentication (public)
///     │   ├── POST /register
///     │   └── POST /login
///     ├── /users/                    # Users (authenticated)
///     │   ├── GET /me
///     │   └── GET /
///     ├── /boards/                   # Boards (authenticated)
///     ├── /columns/                  # Columns (authenticated)
///     └── /tasks/                    # Tasks (authenticated)
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (per-route basis)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    let user_routes = Router::new()
        .route("/me", get(routes::users::me))
        .route("/", get(routes::users::list_users));

    let board_routes = Router::new()
        .route("/", post(routes::boards::create_board))
        .route("/", get(routes::boards::get_boards))
        .route("/:id", get(routes::boards::get_board))
        .route("/:id", put(routes::boards::update_board))
        .route("/:id", axum::routing::delete(routes::boards::delete_board));

    let column_routes = Router::new()
        .route("/", post(routes::columns::create_column))
        .route("/board/:board_id", get(routes::columns::get_columns_by_board))
        .route("/:id", get(routes::columns::get_column))
        .route("/:id", put(routes::columns::update_column))
        .route("/:id", axum::routing::delete(routes::columns::delete_column));

    let task_routes = Router::new()
        .route("/", post(routes::tasks::create_task))
        .route("/column/:column_id", get(routes::tasks::get_tasks_by_column))
        .route("/:id", get(routes::tasks::get_task))
        .route("/:id", put(routes::tasks::update_task))
        .route("/:id", axum::routing::delete(routes::tasks::delete_task));

    // Everything under /api except /api/auth requires a valid bearer token
    let protected_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/boards", board_routes)
        .nest("/columns", column_routes)
        .nest("/tasks", task_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Extracts and validates the bearer token from the Authorization header,
/// resolves the account it names, then injects [`CurrentUser`] into request
/// extensions.
async fn jwt_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    let token = bearer_token(req.headers())?;

    let username = jwt::extract_username(token, state.jwt_secret())?;

    // The token subject must still name an existing account
    let user = User::find_by_username(&state.db, &username)
        .await?
        .ok_or_else(|| {
            crate::error::ApiError::Unauthorized("Недействительный токен".to_string())
        })?;

    if !jwt::is_token_valid(token, &user.username, state.jwt_secret()) {
        return Err(crate::error::ApiError::Unauthorized(
            "Недействительный токен".to_string(),
        ));
    }

    let current = CurrentUser::new(user.id, user.username);
    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}
