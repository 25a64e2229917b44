//! Photo collection and id counter behind a single lock.
//!
//! Every write holds the write guard across lookup and mutation, so each
//! operation is atomic from the caller's point of view.

use tokio::sync::RwLock;

use super::utc_timestamp;
use crate::errors::AppError;
use crate::models::{Photo, PhotoInput};

struct Inner {
    /// Records in insertion order.
    photos: Vec<Photo>,
    /// Next id to hand out. Starts at 1 and never goes down.
    next_id: i64,
}

impl Inner {
    fn position(&self, id: i64) -> Option<usize> {
        self.photos.iter().position(|p| p.id == id)
    }
}

/// Registry for all photo operations.
pub struct PhotoRegistry {
    inner: RwLock<Inner>,
}

impl Default for PhotoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                photos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// List photos in insertion order, optionally keeping only those carrying `tag`.
    pub async fn list_photos(&self, tag: Option<&str>) -> Vec<Photo> {
        let inner = self.inner.read().await;
        match tag {
            Some(tag) => inner
                .photos
                .iter()
                .filter(|p| p.has_tag(tag))
                .cloned()
                .collect(),
            None => inner.photos.clone(),
        }
    }

    /// Get a photo by ID.
    pub async fn get_photo(&self, id: i64) -> Option<Photo> {
        let inner = self.inner.read().await;
        inner.photos.iter().find(|p| p.id == id).cloned()
    }

    /// Create a new photo, consuming the next id.
    pub async fn create_photo(&self, input: PhotoInput) -> Photo {
        let mut inner = self.inner.write().await;

        let photo = Photo {
            id: inner.next_id,
            title: input.title,
            description: input.description,
            url: input.url,
            tags: input.tags,
            created_at: utc_timestamp(),
        };
        inner.next_id += 1;
        inner.photos.push(photo.clone());

        tracing::info!(id = photo.id, "Created photo");
        photo
    }

    /// Overwrite every caller-supplied field of a photo, keeping its id,
    /// `created_at` and position.
    pub async fn replace_photo(&self, id: i64, input: PhotoInput) -> Result<Photo, AppError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .position(id)
            .ok_or_else(|| AppError::not_found(id))?;

        let existing = &mut inner.photos[index];
        existing.title = input.title;
        existing.description = input.description;
        existing.url = input.url;
        existing.tags = input.tags;

        tracing::info!(id, "Replaced photo");
        Ok(existing.clone())
    }

    /// Delete a photo, returning the removed record.
    pub async fn delete_photo(&self, id: i64) -> Result<Photo, AppError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .position(id)
            .ok_or_else(|| AppError::not_found(id))?;

        let removed = inner.photos.remove(index);
        tracing::info!(id, "Deleted photo");
        Ok(removed)
    }

    /// Number of photos currently stored.
    pub async fn count(&self) -> usize {
        self.inner.read().await.photos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, tags: &[&str]) -> PhotoInput {
        PhotoInput {
            title: title.to_string(),
            description: None,
            url: format!("https://example.com/{}.jpg", title),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let registry = PhotoRegistry::new();

        let ids: Vec<i64> = [
            registry.create_photo(input("a", &[])).await.id,
            registry.create_photo(input("b", &[])).await.id,
            registry.create_photo(input("c", &[])).await.id,
        ]
        .to_vec();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_ids_never_reused_after_delete() {
        let registry = PhotoRegistry::new();
        registry.create_photo(input("a", &[])).await;
        let second = registry.create_photo(input("b", &[])).await;

        registry.delete_photo(second.id).await.unwrap();
        let third = registry.create_photo(input("c", &[])).await;

        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let registry = PhotoRegistry::new();
        let created = registry.create_photo(input("a", &["x"])).await;

        assert_eq!(registry.get_photo(created.id).await, Some(created));
        assert_eq!(registry.get_photo(42).await, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_tag_in_insertion_order() {
        let registry = PhotoRegistry::new();
        registry.create_photo(input("one", &["nature", "beach"])).await;
        registry.create_photo(input("two", &["mountain"])).await;
        registry.create_photo(input("three", &["nature", "landscape"])).await;

        assert_eq!(registry.list_photos(None).await.len(), 3);

        let nature: Vec<i64> = registry
            .list_photos(Some("nature"))
            .await
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(nature, vec![1, 3]);

        assert!(registry.list_photos(Some("city")).await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_preserves_id_created_at_and_position() {
        let registry = PhotoRegistry::new();
        registry.create_photo(input("first", &[])).await;
        let original = registry.create_photo(input("second", &["old"])).await;
        registry.create_photo(input("third", &[])).await;

        let replacement = PhotoInput {
            title: "Updated".to_string(),
            description: Some("New description".to_string()),
            url: "https://example.com/updated.jpg".to_string(),
            tags: vec!["updated".to_string()],
        };
        let updated = registry
            .replace_photo(original.id, replacement)
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.description.as_deref(), Some("New description"));
        assert_eq!(updated.tags, vec!["updated"]);

        let order: Vec<i64> = registry.list_photos(None).await.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_replace_missing_leaves_state_untouched() {
        let registry = PhotoRegistry::new();
        let created = registry.create_photo(input("a", &[])).await;

        let err = registry.replace_photo(999, input("b", &[])).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref id) if id == "999"));

        assert_eq!(registry.list_photos(None).await, vec![created]);
        assert_eq!(registry.create_photo(input("c", &[])).await.id, 2);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let registry = PhotoRegistry::new();
        registry.create_photo(input("a", &[])).await;
        let middle = registry.create_photo(input("b", &[])).await;
        registry.create_photo(input("c", &[])).await;

        let removed = registry.delete_photo(middle.id).await.unwrap();
        assert_eq!(removed, middle);
        assert_eq!(registry.count().await, 2);

        let remaining: Vec<i64> = registry.list_photos(None).await.iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![1, 3]);

        assert!(matches!(
            registry.delete_photo(middle.id).await,
            Err(AppError::NotFound(ref id)) if id == "2"
        ));
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let registry = std::sync::Arc::new(PhotoRegistry::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry
                        .create_photo(input(&format!("p{}", i), &[]))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    }
}
