//! # TaskBoard Shared Library
//!
//! This crate contains shared types, utilities, and data access logic used by
//! the TaskBoard API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and CRUD queries
//! - `auth`: Password hashing, JWT issuance/validation, request identity
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the TaskBoard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
