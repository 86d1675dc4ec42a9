//! Response payloads for the informational endpoints.

pub mod types;


pub use types::{APPLICATION_NAME, APPLICATION_VERSION, AppInfo, HEALTHY, HealthReport, Welcome};
