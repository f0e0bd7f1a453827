//! Media manager configuration.

use serde::{Deserialize, Serialize};

/// Capacity settings for the image/media manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Number of images at which a folder is shown as "Full".
    #[serde(default = "default_max_images")]
    pub max_images_per_folder: usize,
    /// Whether the synthetic root folder is subject to the same limit.
    #[serde(default)]
    pub root_has_capacity_limit: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            max_images_per_folder: default_max_images(),
            root_has_capacity_limit: false,
        }
    }
}

fn default_max_images() -> usize {
    10
}
