//! Diagnostics collected while building a folder tree.

use serde::{Deserialize, Serialize};

use super::tree::TreeNode;

/// Inconsistencies found in a folder/image snapshot.
///
/// None of these stop a build; each entity is placed at a fallback location
/// and listed here so a UI can show a non-fatal warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Folders whose `parentId` matches no known folder (placed at root level).
    pub dangling_parents: Vec<String>,
    /// Folders promoted to root level to break a parent cycle.
    pub broken_cycles: Vec<String>,
    /// Ids of images tagged with a folder name that does not exist.
    pub orphaned_images: Vec<i64>,
}

impl BuildReport {
    /// True when the snapshot was fully consistent.
    pub fn is_clean(&self) -> bool {
        self.dangling_parents.is_empty()
            && self.broken_cycles.is_empty()
            && self.orphaned_images.is_empty()
    }

    /// Total number of entities that needed a fallback placement.
    pub fn issue_count(&self) -> usize {
        self.dangling_parents.len() + self.broken_cycles.len() + self.orphaned_images.len()
    }
}

/// A built tree together with its build diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeBuild {
    /// The tree wrapper; `tree.children["root"]` is the entry point.
    pub tree: TreeNode,
    /// What had to be repaired along the way.
    pub report: BuildReport,
}
