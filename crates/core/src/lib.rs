//! Core logic for Cloudinfo.
//!
//! This crate has ZERO web dependencies. It captures the process metadata the
//! service reports and builds the response payloads from it.
//!
//! # Modules
//!
//! - `process` - Start instant, host identifier and timestamps
//! - `report` - Welcome, health and application info payloads

pub mod process;
pub mod report;
