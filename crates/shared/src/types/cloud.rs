//! Cloud provider label.
//!
//! The label identifies the deployment environment and is echoed verbatim in
//! every response that carries a `cloud` field.

use serde::{Deserialize, Serialize};

/// Label used when no cloud provider is configured.
pub const UNKNOWN_CLOUD: &str = "Unknown";

/// Configured cloud provider label.
///
/// An empty label is normalized to [`UNKNOWN_CLOUD`], so an unset and an
/// explicitly empty `CLOUD_PROVIDER` behave the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CloudProvider(String);

impl CloudProvider {
    /// Creates a label, falling back to [`UNKNOWN_CLOUD`] when empty.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.is_empty() {
            Self::unknown()
        } else {
            Self(label)
        }
    }

    /// Returns the placeholder label.
    #[must_use]
    pub fn unknown() -> Self {
        Self(UNKNOWN_CLOUD.to_string())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no provider was configured.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_CLOUD
    }
}

impl Default for CloudProvider {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<String> for CloudProvider {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<CloudProvider> for String {
    fn from(provider: CloudProvider) -> Self {
        provider.0
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
