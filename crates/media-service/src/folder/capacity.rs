//! Per-folder image capacity: "Full" badges and move/upload target checks.

use std::collections::HashSet;

use serde::Serialize;

use media_core::config::media::MediaConfig;
use media_core::{AppError, AppResult};
use media_entity::folder::{MediaPath, TreeNode};

use super::locate::{locate, try_locate};

/// Occupancy of one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCapacity {
    /// Folder path.
    pub path: MediaPath,
    /// Images stored directly in the folder.
    pub occupancy: usize,
    /// Maximum images allowed, `None` when unlimited.
    pub limit: Option<usize>,
    /// Whether the folder has reached its limit.
    pub full: bool,
}

/// How many images a folder may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    /// Limit applied to every non-root folder.
    pub max_images_per_folder: usize,
    /// Whether the synthetic root is limited too.
    pub root_has_limit: bool,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::from(&MediaConfig::default())
    }
}

impl From<&MediaConfig> for CapacityPolicy {
    fn from(config: &MediaConfig) -> Self {
        Self {
            max_images_per_folder: config.max_images_per_folder,
            root_has_limit: config.root_has_capacity_limit,
        }
    }
}

impl CapacityPolicy {
    /// Limit for the folder at `path`.
    pub fn limit_for(&self, path: &MediaPath) -> Option<usize> {
        if path.is_root() && !self.root_has_limit {
            None
        } else {
            Some(self.max_images_per_folder)
        }
    }

    /// Images directly in the folder at `path` (0 if it does not exist).
    pub fn occupancy(&self, tree: &TreeNode, path: &MediaPath) -> usize {
        locate(tree, path).item_count()
    }

    /// Whether the folder at `path` is at or over its limit.
    pub fn is_full(&self, tree: &TreeNode, path: &MediaPath) -> bool {
        self.limit_for(path)
            .is_some_and(|limit| self.occupancy(tree, path) >= limit)
    }

    /// Free slots in the folder, `None` when unlimited.
    pub fn remaining(&self, tree: &TreeNode, path: &MediaPath) -> Option<usize> {
        self.limit_for(path)
            .map(|limit| limit.saturating_sub(self.occupancy(tree, path)))
    }

    /// Checks that `incoming` new images fit into the folder at `path`.
    pub fn validate_target(
        &self,
        tree: &TreeNode,
        path: &MediaPath,
        incoming: usize,
    ) -> AppResult<()> {
        let node = try_locate(tree, path)
            .ok_or_else(|| AppError::not_found(format!("Folder '{path}' does not exist")))?;
        self.check_fits(path, node.item_count(), incoming)
    }

    /// Checks a move of the given images into `path`.
    ///
    /// Images already stored in the target are not counted twice, and
    /// repeated ids count once.
    pub fn validate_move(
        &self,
        tree: &TreeNode,
        path: &MediaPath,
        image_ids: &[i64],
    ) -> AppResult<()> {
        if image_ids.is_empty() {
            return Err(AppError::validation("No images selected"));
        }
        let node = try_locate(tree, path)
            .ok_or_else(|| AppError::not_found(format!("Folder '{path}' does not exist")))?;

        let distinct: HashSet<i64> = image_ids.iter().copied().collect();
        let incoming = distinct.iter().filter(|id| !node.contains_item(**id)).count();
        if incoming == 0 {
            return Ok(());
        }
        self.check_fits(path, node.item_count(), incoming)
    }

    fn check_fits(&self, path: &MediaPath, occupancy: usize, incoming: usize) -> AppResult<()> {
        if incoming == 0 {
            return Err(AppError::validation("No images selected"));
        }
        let Some(limit) = self.limit_for(path) else {
            return Ok(());
        };
        if incoming > limit {
            return Err(AppError::validation(format!(
                "Cannot place {incoming} images in one folder, the limit is {limit}"
            )));
        }
        if occupancy + incoming > limit {
            return Err(AppError::conflict(format!(
                "Folder '{path}' has room for {} more image(s), {incoming} requested",
                limit.saturating_sub(occupancy)
            )));
        }
        Ok(())
    }

    /// Occupancy of every folder, depth-first from the root in name order.
    pub fn summary(&self, tree: &TreeNode) -> Vec<FolderCapacity> {
        let mut out = Vec::new();
        if let Some(root) = tree.root() {
            self.collect(root, MediaPath::root(), &mut out);
        }
        out
    }

    fn collect(&self, node: &TreeNode, path: MediaPath, out: &mut Vec<FolderCapacity>) {
        let limit = self.limit_for(&path);
        let occupancy = node.item_count();
        out.push(FolderCapacity {
            path: path.clone(),
            occupancy,
            limit,
            full: limit.is_some_and(|l| occupancy >= l),
        });
        for (name, child) in &node.children {
            self.collect(child, path.join(name.as_str()), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_core::error::ErrorKind;
    use media_entity::image::ImageRecord;

    fn tree_with(count: usize) -> TreeNode {
        let mut tree = TreeNode::wrapper();
        let posters = tree.root_mut().child_entry("Posters");
        for id in 0..count {
            posters.items.push(ImageRecord::new(id as i64, Some("Posters")));
        }
        for id in 100..115 {
            tree.root_mut().items.push(ImageRecord::new(id, None));
        }
        tree
    }

    fn policy() -> CapacityPolicy {
        CapacityPolicy {
            max_images_per_folder: 10,
            root_has_limit: false,
        }
    }

    #[test]
    fn test_full_at_limit() {
        let posters = MediaPath::parse("Posters");
        assert!(!policy().is_full(&tree_with(9), &posters));
        assert!(policy().is_full(&tree_with(10), &posters));
        assert_eq!(policy().remaining(&tree_with(7), &posters), Some(3));
    }

    #[test]
    fn test_root_is_exempt_by_default() {
        let tree = tree_with(0);
        assert!(!policy().is_full(&tree, &MediaPath::root()));
        assert_eq!(policy().remaining(&tree, &MediaPath::root()), None);

        let strict = CapacityPolicy {
            root_has_limit: true,
            ..policy()
        };
        assert!(strict.is_full(&tree, &MediaPath::root()));
    }

    #[test]
    fn test_validate_target() {
        let tree = tree_with(8);
        let posters = MediaPath::parse("Posters");

        assert!(policy().validate_target(&tree, &posters, 2).is_ok());
        let err = policy().validate_target(&tree, &posters, 3).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        let err = policy().validate_target(&tree, &posters, 11).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = policy().validate_target(&tree, &MediaPath::parse("Gone"), 1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        let err = policy().validate_target(&tree, &posters, 0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_validate_move_ignores_images_already_there() {
        let tree = tree_with(10);
        let posters = MediaPath::parse("Posters");

        assert!(policy().validate_move(&tree, &posters, &[1, 2, 2]).is_ok());
        let err = policy().validate_move(&tree, &posters, &[1, 500]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        let err = policy().validate_move(&tree, &posters, &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_summary_order() {
        let mut tree = tree_with(10);
        tree.root_mut().child_entry("Banners");
        let summary = policy().summary(&tree);
        let paths: Vec<String> = summary.iter().map(|c| c.path.to_string()).collect();

        assert_eq!(paths, vec!["root", "root/Banners", "root/Posters"]);
        assert!(summary[2].full);
        assert_eq!(summary[0].limit, None);
        assert_eq!(summary[0].occupancy, 15);
    }
}
