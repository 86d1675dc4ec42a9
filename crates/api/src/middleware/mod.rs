//! Request/response middleware applied to every route.

pub mod security_headers;

pub use security_headers::{SECURITY_HEADERS, security_headers};
