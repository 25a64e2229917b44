//! In-memory photo registry.
//!
//! The registry is the only holder of photo records; nothing survives a restart.

mod store;

pub use store::*;

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
