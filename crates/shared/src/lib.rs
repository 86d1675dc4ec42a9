//! Shared configuration, types and errors for Cloudinfo.
//!
//! This crate provides common types used across all other crates:
//! - The cloud provider label surfaced in responses
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::CloudProvider;
