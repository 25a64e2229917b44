//! Error handling module for the photo registry.
//!
//! Provides the error taxonomy with mapping to HTTP status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Validation issue kinds as constants to avoid stringly-typed errors.
pub mod codes {
    pub const MISSING: &str = "missing";
    pub const STRING_TYPE: &str = "string_type";
    pub const LIST_TYPE: &str = "list_type";
    pub const INT_PARSING: &str = "int_parsing";
    pub const JSON_INVALID: &str = "json_invalid";
    pub const MODEL_ATTRIBUTES_TYPE: &str = "model_attributes_type";
}

/// One segment of the path to an offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for LocSegment {
    fn from(key: &str) -> Self {
        LocSegment::Key(key.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        LocSegment::Index(index)
    }
}

/// A single validation failure: where it happened and what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<LocSegment>,
    pub msg: String,
}

impl ValidationIssue {
    pub fn new(kind: &str, loc: Vec<LocSegment>, msg: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            loc,
            msg: msg.into(),
        }
    }

    pub fn missing(loc: Vec<LocSegment>) -> Self {
        Self::new(codes::MISSING, loc, "Field required")
    }

    pub fn string_type(loc: Vec<LocSegment>) -> Self {
        Self::new(codes::STRING_TYPE, loc, "Input should be a valid string")
    }

    pub fn list_type(loc: Vec<LocSegment>) -> Self {
        Self::new(codes::LIST_TYPE, loc, "Input should be a valid list")
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// No photo carries the requested id, kept as the caller wrote it
    NotFound(String),
    /// Missing or malformed input
    Validation(Vec<ValidationIssue>),
}

impl AppError {
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound(id.to_string())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(id) => format!("Photo with id {} not found", id),
            AppError::Validation(issues) => issues
                .iter()
                .map(|issue| format!("{}: {}", render_loc(&issue.loc), issue.msg))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

fn render_loc(loc: &[LocSegment]) -> String {
    loc.iter()
        .map(|segment| match segment {
            LocSegment::Key(key) => key.clone(),
            LocSegment::Index(index) => index.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

/// Error body for lookups of unknown ids.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub detail: String,
}

/// Error body listing every validation issue.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub detail: Vec<ValidationIssue>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::NotFound(_) => {
                let body = NotFoundResponse {
                    detail: self.message(),
                };
                tracing::debug!("{}", body.detail);
                (status, Json(body)).into_response()
            }
            AppError::Validation(issues) => {
                tracing::debug!(count = issues.len(), "Rejected invalid request");
                (status, Json(ValidationResponse { detail: issues })).into_response()
            }
        }
    }
}
