//! Photo API endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use super::{ApiResult, Created, PhotoBody, PhotoId};
use crate::errors::AppError;
use crate::models::{DeleteResponse, Photo};
use crate::AppState;

/// GET /photos - List all photos, optionally filtered by tag.
///
/// When `tag` is repeated the last value wins.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Photo>> {
    let tag = params
        .iter()
        .rev()
        .find(|(key, _)| key == "tag")
        .map(|(_, value)| value.as_str())
        // An empty tag means no filter.
        .filter(|t| !t.is_empty());
    Json(state.registry.list_photos(tag).await)
}

/// GET /photos/{id} - Get a single photo.
pub async fn get_photo(
    State(state): State<AppState>,
    PhotoId(id): PhotoId,
) -> ApiResult<Json<Photo>> {
    state
        .registry
        .get_photo(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(id))
}

/// POST /photos - Create a new photo.
pub async fn create_photo(
    State(state): State<AppState>,
    PhotoBody(input): PhotoBody,
) -> Created<Photo> {
    Created(state.registry.create_photo(input).await)
}

/// PUT /photos/{id} - Replace a photo's metadata.
pub async fn replace_photo(
    State(state): State<AppState>,
    PhotoId(id): PhotoId,
    PhotoBody(input): PhotoBody,
) -> ApiResult<Json<Photo>> {
    let photo = state.registry.replace_photo(id, input).await?;
    Ok(Json(photo))
}

/// DELETE /photos/{id} - Delete a photo.
pub async fn delete_photo(
    State(state): State<AppState>,
    PhotoId(id): PhotoId,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = state.registry.delete_photo(id).await?;
    Ok(Json(DeleteResponse::new(removed)))
}
