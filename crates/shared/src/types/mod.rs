//! Common types used across the application.

pub mod cloud;

pub use cloud::{CloudProvider, UNKNOWN_CLOUD};
