//! Nested folder tree structure for the media browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ROOT_FOLDER;
use crate::image::ImageRecord;

/// A node in a media folder tree.
///
/// The value returned by a tree build is a wrapper node whose only child is
/// `"root"`; the synthetic root holds top-level folders and untagged images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Child folders keyed by folder name.
    #[serde(default)]
    pub children: BTreeMap<String, TreeNode>,
    /// Images stored directly in this folder, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ImageRecord>,
}

impl TreeNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wrapper containing an empty `"root"` node.
    pub fn wrapper() -> Self {
        let mut node = Self::new();
        node.children.insert(ROOT_FOLDER.to_string(), Self::new());
        node
    }

    /// The synthetic root of a wrapper node.
    pub fn root(&self) -> Option<&TreeNode> {
        self.children.get(ROOT_FOLDER)
    }

    /// Mutable access to the synthetic root, created if missing.
    pub fn root_mut(&mut self) -> &mut TreeNode {
        self.child_entry(ROOT_FOLDER)
    }

    /// Direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Direct child by name, inserting an empty node if absent.
    pub fn child_entry(&mut self, name: &str) -> &mut TreeNode {
        self.children.entry(name.to_string()).or_default()
    }

    /// Names of direct child folders in sorted order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    /// Number of images directly in this folder.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of images in this folder and all descendants.
    pub fn total_item_count(&self) -> usize {
        self.items.len()
            + self
                .children
                .values()
                .map(TreeNode::total_item_count)
                .sum::<usize>()
    }

    /// Number of descendant folders.
    pub fn folder_count(&self) -> usize {
        self.children.len()
            + self
                .children
                .values()
                .map(TreeNode::folder_count)
                .sum::<usize>()
    }

    /// True when the node has neither children nor images.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.items.is_empty()
    }

    /// Whether an image with the given id is stored directly here.
    pub fn contains_item(&self, id: i64) -> bool {
        self.items.iter().any(|img| img.id == id)
    }
}
