/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login)
/// - `users`: Current-user and user-listing endpoints
/// - `boards`: Board CRUD
/// - `columns`: Column CRUD with positional ordering
/// - `tasks`: Task CRUD with positional ordering

pub mod auth;
pub mod boards;
pub mod columns;
pub mod health;
pub mod tasks;
pub mod users;
