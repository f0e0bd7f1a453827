//! Media tree service used by the media manager screens.

use std::borrow::Cow;
use std::collections::HashMap;

use media_core::AppResult;
use media_core::config::media::MediaConfig;
use media_entity::folder::{FolderRecord, MediaPath, TreeBuild, TreeNode};
use media_entity::image::ImageRecord;

use super::capacity::{CapacityPolicy, FolderCapacity};
use super::index::FolderIndex;
use super::locate::locate;
use super::path::PathResolver;
use super::tree::build_tree_with_report;

/// Builds and reads media trees. Holds configuration only, no tree state.
#[derive(Debug, Clone, Default)]
pub struct TreeService {
    /// Capacity limits.
    policy: CapacityPolicy,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(policy: CapacityPolicy) -> Self {
        Self { policy }
    }

    /// Creates a tree service from the media configuration section.
    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(CapacityPolicy::from(config))
    }

    /// The capacity policy in effect.
    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Builds the tree for a snapshot.
    pub fn build(&self, images: &[ImageRecord], folders: &[FolderRecord]) -> TreeNode {
        self.build_with_report(images, folders).tree
    }

    /// Builds the tree and its diagnostics for a snapshot.
    pub fn build_with_report(&self, images: &[ImageRecord], folders: &[FolderRecord]) -> TreeBuild {
        build_tree_with_report(images, folders)
    }

    /// Node at `path`, empty if missing.
    pub fn locate<'t>(&self, tree: &'t TreeNode, path: &MediaPath) -> Cow<'t, TreeNode> {
        locate(tree, path)
    }

    /// Full path of a folder.
    pub fn resolve_path(&self, folders: &[FolderRecord], folder_name: &str) -> MediaPath {
        let index = FolderIndex::new(folders);
        PathResolver::new(&index).resolve(folder_name)
    }

    /// Breadcrumb paths from the root down to a folder.
    pub fn breadcrumbs(&self, folders: &[FolderRecord], folder_name: &str) -> Vec<MediaPath> {
        let index = FolderIndex::new(folders);
        PathResolver::new(&index).breadcrumbs(folder_name)
    }

    /// `name -> id` map for addressing folder deletes.
    pub fn folder_ids(&self, folders: &[FolderRecord]) -> HashMap<String, i64> {
        FolderIndex::new(folders).name_to_id()
    }

    /// Whether the folder at `path` shows the "Full" badge.
    pub fn is_full(&self, tree: &TreeNode, path: &MediaPath) -> bool {
        self.policy.is_full(tree, path)
    }

    /// Checks an upload of `incoming` images into `path`.
    pub fn validate_target(
        &self,
        tree: &TreeNode,
        path: &MediaPath,
        incoming: usize,
    ) -> AppResult<()> {
        self.policy.validate_target(tree, path, incoming)
    }

    /// Checks a move of existing images into `path`.
    pub fn validate_move(
        &self,
        tree: &TreeNode,
        path: &MediaPath,
        image_ids: &[i64],
    ) -> AppResult<()> {
        self.policy.validate_move(tree, path, image_ids)
    }

    /// Occupancy of every folder in the tree.
    pub fn capacity_summary(&self, tree: &TreeNode) -> Vec<FolderCapacity> {
        self.policy.summary(tree)
    }
}
