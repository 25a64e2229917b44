//! Extractors that turn path segments and bodies into validated values.
//!
//! Any rejection becomes an `AppError::Validation` so every malformed request
//! gets the same 422 body shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
    Json,
};
use serde_json::Value;

use crate::errors::{codes, AppError, ValidationIssue};
use crate::models::PhotoInput;

/// Integer photo id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PhotoId(pub i64);

impl<S> FromRequestParts<S> for PhotoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .unwrap_or_default();

        parse_photo_id(&raw).map(PhotoId)
    }
}

/// Parse a path id. Well-formed integers outside the `i64` range cannot name
/// a stored photo, so they are reported as not found rather than malformed.
fn parse_photo_id(raw: &str) -> Result<i64, AppError> {
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(id);
    }

    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::not_found(raw.trim_start_matches('+')));
    }

    Err(AppError::Validation(vec![ValidationIssue::new(
        codes::INT_PARSING,
        vec!["path".into(), "photo_id".into()],
        "Input should be a valid integer, unable to parse string as an integer",
    )]))
}

/// JSON body validated into a [`PhotoInput`].
///
/// A body sent without any `Content-Type` is still parsed as JSON; an explicit
/// non-JSON content type is rejected.
#[derive(Debug, Clone)]
pub struct PhotoBody(pub PhotoInput);

impl<S> FromRequest<S> for PhotoBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if req.headers().contains_key(header::CONTENT_TYPE) {
            Json::<Value>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| json_invalid(rejection.body_text()))?
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| json_invalid(rejection.body_text()))?;
            serde_json::from_slice::<Value>(&bytes)
                .map_err(|e| json_invalid(format!("JSON decode error: {}", e)))?
        };

        PhotoInput::from_json(&body).map(PhotoBody)
    }
}

fn json_invalid(msg: String) -> AppError {
    AppError::Validation(vec![ValidationIssue::new(
        codes::JSON_INVALID,
        vec!["body".into()],
        msg,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photo_id_in_range() {
        assert_eq!(parse_photo_id("42").unwrap(), 42);
        assert_eq!(parse_photo_id("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_photo_id_overflow_is_not_found() {
        let err = parse_photo_id("99999999999999999999").unwrap_err();
        assert_eq!(err.message(), "Photo with id 99999999999999999999 not found");
    }

    #[test]
    fn test_parse_photo_id_rejects_non_integers() {
        for raw in ["abc", "", "1.5", "-", "12a"] {
            assert!(matches!(parse_photo_id(raw), Err(AppError::Validation(_))));
        }
    }
}
