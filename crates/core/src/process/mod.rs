//! Process metadata captured at startup.

pub mod clock;
pub mod info;

pub use clock::{iso_timestamp, now_iso};
pub use info::{ProcessInfo, UNKNOWN_HOSTNAME, resolve_hostname};
