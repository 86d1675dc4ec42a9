//! Wall-clock timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders an instant as ISO-8601 UTC with millisecond precision.
///
/// The output has the form `2024-01-15T10:30:00.000Z`.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the current wall-clock time as an ISO-8601 UTC string.
#[must_use]
pub fn now_iso() -> String {
    iso_timestamp(Utc::now())
}
