//! REST API module.
//!
//! Contains the photo routes, their handlers, and the request extractors that
//! validate input at the boundary.

mod extract;
mod photos;

pub use extract::*;
pub use photos::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// Response wrapper that reports creation with 201 instead of 200.
#[derive(Debug)]
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<T, AppError>;
