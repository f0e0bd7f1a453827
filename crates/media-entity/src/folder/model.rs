//! Folder entity model.

use serde::{Deserialize, Serialize};

use super::ROOT_FOLDER;

/// A folder as reported by the backend's `GET /folders` endpoint.
///
/// Names are unique across the whole hierarchy; the numeric id is only used
/// for parent links and for addressing delete requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    /// Backend folder identifier.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder id (`None` for direct children of the root).
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl FolderRecord {
    /// Create a new folder record.
    pub fn new(id: i64, name: impl Into<String>, parent_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }

    /// Check if this record names the synthetic root.
    pub fn is_root_alias(&self) -> bool {
        self.name == ROOT_FOLDER
    }
}
