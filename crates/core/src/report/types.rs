//! Report data types.

use cloudinfo_shared::CloudProvider;
use serde::{Deserialize, Serialize};

use crate::process::{ProcessInfo, now_iso};

/// Application name reported by the info endpoint.
pub const APPLICATION_NAME: &str = "Multi-Cloud CI/CD Demo";

/// Application version reported by the info endpoint.
pub const APPLICATION_VERSION: &str = "1.0.0";

/// Status reported by a live process.
pub const HEALTHY: &str = "healthy";

/// Welcome message payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Welcome {
    /// Greeting naming the cloud provider.
    pub message: String,
    /// Cloud provider label.
    pub cloud: CloudProvider,
    /// ISO-8601 UTC time the payload was built.
    pub timestamp: String,
    /// Host identifier.
    pub hostname: String,
}

impl Welcome {
    /// Builds the welcome payload at the given timestamp.
    #[must_use]
    pub fn new(cloud: &CloudProvider, process: &ProcessInfo, timestamp: String) -> Self {
        Self {
            message: format!("Hello from {cloud} Multi-Cloud Application!"),
            cloud: cloud.clone(),
            timestamp,
            hostname: process.hostname().to_string(),
        }
    }

    /// Builds the welcome payload stamped with the current time.
    #[must_use]
    pub fn now(cloud: &CloudProvider, process: &ProcessInfo) -> Self {
        Self::new(cloud, process, now_iso())
    }
}

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Always [`HEALTHY`] for a running process.
    pub status: String,
    /// ISO-8601 UTC time the payload was built.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: f64,
    /// Host identifier.
    pub hostname: String,
    /// Cloud provider label.
    pub cloud: CloudProvider,
}

impl HealthReport {
    /// Builds the health payload at the given timestamp.
    #[must_use]
    pub fn new(cloud: &CloudProvider, process: &ProcessInfo, timestamp: String) -> Self {
        Self {
            status: HEALTHY.to_string(),
            timestamp,
            uptime: process.uptime_secs(),
            hostname: process.hostname().to_string(),
            cloud: cloud.clone(),
        }
    }

    /// Builds the health payload stamped with the current time.
    #[must_use]
    pub fn now(cloud: &CloudProvider, process: &ProcessInfo) -> Self {
        Self::new(cloud, process, now_iso())
    }
}

/// Static application info payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Application name.
    pub application: String,
    /// Application version.
    pub version: String,
    /// Cloud provider label.
    pub cloud: CloudProvider,
}

impl AppInfo {
    /// Builds the info payload.
    #[must_use]
    pub fn new(cloud: &CloudProvider) -> Self {
        Self {
            application: APPLICATION_NAME.to_string(),
            version: APPLICATION_VERSION.to_string(),
            cloud: cloud.clone(),
        }
    }
}
