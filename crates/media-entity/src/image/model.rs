//! Image entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::folder::ROOT_FOLDER;

/// An image as reported by the backend's `GET /images` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Backend image identifier.
    pub id: i64,
    /// File name.
    #[serde(default)]
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: i64,
    /// MIME type (e.g. `image/png`).
    #[serde(default)]
    pub content_type: String,
    /// Name of the owning folder. `None` means the synthetic root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
    /// Public URL of the asset.
    #[serde(default)]
    pub url: String,
    /// Any further fields the backend sends, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageRecord {
    /// Create an image record with only an id and folder tag.
    pub fn new(id: i64, folder_name: Option<&str>) -> Self {
        Self {
            id,
            name: String::new(),
            size: 0,
            content_type: String::new(),
            folder_name: folder_name.map(str::to_string),
            url: String::new(),
            extra: Map::new(),
        }
    }

    /// The folder this image belongs to, `"root"` when untagged or empty.
    /// Any other tag is used exactly as given.
    pub fn folder(&self) -> &str {
        match self.folder_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => ROOT_FOLDER,
        }
    }

    /// Whether the image lives directly in the synthetic root.
    pub fn is_in_root(&self) -> bool {
        self.folder() == ROOT_FOLDER
    }
}

/// Sort images by ascending id.
///
/// This is the one ordering step applied to the flat list before a tree is
/// built; the tree keeps per-folder input order.
pub fn sort_images_by_id(images: &mut [ImageRecord]) {
    images.sort_by_key(|img| img.id);
}
