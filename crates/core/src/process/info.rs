//! Start instant and host identifier of the running process.

use std::time::{Duration, Instant};

use tracing::warn;

/// Host identifier reported when the host name cannot be resolved.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Read-only metadata about the running process.
///
/// Captured once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    started_at: Instant,
    hostname: String,
}

impl ProcessInfo {
    /// Captures the current instant and resolves the host name.
    #[must_use]
    pub fn capture() -> Self {
        Self::new(Instant::now(), resolve_hostname())
    }

    /// Creates process metadata from explicit values.
    #[must_use]
    pub fn new(started_at: Instant, hostname: impl Into<String>) -> Self {
        Self {
            started_at,
            hostname: hostname.into(),
        }
    }

    /// Returns the host identifier.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the time elapsed since the process started.
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Returns the uptime in fractional seconds.
    #[must_use]
    pub fn uptime_secs(&self) -> f64 {
        self.uptime().as_secs_f64()
    }
}

/// Resolves the machine host name.
///
/// Falls back to [`UNKNOWN_HOSTNAME`] if the name cannot be read or is not
/// valid UTF-8.
#[must_use]
pub fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => match name.into_string() {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => UNKNOWN_HOSTNAME.to_string(),
            Err(raw) => {
                warn!(hostname = ?raw, "Host name is not valid UTF-8");
                UNKNOWN_HOSTNAME.to_string()
            }
        },
        Err(e) => {
            warn!(error = %e, "Failed to resolve host name");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_resolves_hostname() {
        let info = ProcessInfo::capture();
        assert!(!info.hostname().is_empty());
    }

    #[test]
    fn test_explicit_hostname() {
        let info = ProcessInfo::new(Instant::now(), "web-1");
        assert_eq!(info.hostname(), "web-1");
    }

    #[test]
    fn test_uptime_counts_from_start() {
        let started_at = Instant::now()
            .checked_sub(Duration::from_secs(5))
            .expect("clock is past five seconds");
        let info = ProcessInfo::new(started_at, "web-1");
        assert!(info.uptime() >= Duration::from_secs(5));
        assert!(info.uptime_secs() >= 5.0);
    }

    #[test]
    fn test_uptime_is_non_decreasing() {
        let info = ProcessInfo::capture();
        let first = info.uptime_secs();
        std::thread::sleep(Duration::from_millis(5));
        let second = info.uptime_secs();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_resolve_hostname_never_empty() {
        assert!(!resolve_hostname().is_empty());
    }
}
