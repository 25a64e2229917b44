//! Data models for the photo registry.
//!
//! Field names match the JSON bodies exchanged over HTTP.

mod photo;
mod service;

pub use photo::*;
pub use service::*;
