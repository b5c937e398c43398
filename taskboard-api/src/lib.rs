//! # TaskBoard API Server Library
//!
//! This library provides the core functionality for the TaskBoard API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `dto`: Transport types and validated requests
//! - `mappers`: Entity-to-DTO conversions
//! - `services`: Business rules per resource
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod mappers;
pub mod routes;
pub mod services;
