//! Shared types, errors, and configuration for Tokenflow.
//!
//! This crate provides common types used across all other crates:
//! - Application configuration management
//! - Application-wide error taxonomy
//! - JWT session token service
//! - Request/response payloads for the HTTP API
//! - Fiat formatting helpers

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;
pub mod wallet;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtError, JwtService};
