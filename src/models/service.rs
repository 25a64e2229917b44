//! Response bodies for the service-level endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Photo;

/// Body returned after a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_photo: Photo,
}

impl DeleteResponse {
    pub fn new(deleted_photo: Photo) -> Self {
        Self {
            message: format!("Photo {} deleted successfully", deleted_photo.id),
            deleted_photo,
        }
    }
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub photos_count: usize,
}

/// Static description of the service and its routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /", "API information"),
    ("GET /health", "Health check"),
    ("GET /photos", "List all photos"),
    ("GET /photos/{photo_id}", "Get a specific photo"),
    ("POST /photos", "Create a new photo"),
    ("PUT /photos/{photo_id}", "Update a photo"),
    ("DELETE /photos/{photo_id}", "Delete a photo"),
];

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            message: "Welcome to Personal Photo Blog API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: ENDPOINTS
                .iter()
                .map(|(route, what)| (route.to_string(), what.to_string()))
                .collect(),
        }
    }
}
