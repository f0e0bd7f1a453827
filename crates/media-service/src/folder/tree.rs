//! Folder tree building from flat folder and image lists.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use media_entity::folder::{BuildReport, FolderRecord, TreeBuild, TreeNode};
use media_entity::image::ImageRecord;

use super::assign::ImageAssigner;
use super::index::FolderIndex;
use super::path::PathResolver;

type ChildMap<'a> = HashMap<Option<&'a str>, Vec<&'a FolderRecord>>;

/// Builds the folder skeleton of a media tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'i, 'a> {
    index: &'i FolderIndex<'a>,
}

impl<'i, 'a> TreeBuilder<'i, 'a> {
    /// Creates a builder over an index.
    pub fn new(index: &'i FolderIndex<'a>) -> Self {
        Self { index }
    }

    /// Builds the wrapper node with every folder nested under `"root"` and
    /// no images attached.
    pub fn build_skeleton(&self) -> TreeNode {
        let mut children_of: ChildMap<'a> = HashMap::new();
        for folder in self.index.folders() {
            children_of
                .entry(self.index.effective_parent(&folder.name))
                .or_default()
                .push(folder);
        }

        let mut tree = TreeNode::wrapper();
        *tree.root_mut() = Self::build_subtree(None, &children_of);
        tree
    }

    /// Builds the subtree below `parent` (`None` = the synthetic root).
    fn build_subtree(parent: Option<&'a str>, children_of: &ChildMap<'a>) -> TreeNode {
        let children: BTreeMap<String, TreeNode> = children_of
            .get(&parent)
            .into_iter()
            .flatten()
            .copied()
            .map(|child| {
                let name: &'a str = child.name.as_str();
                (name.to_string(), Self::build_subtree(Some(name), children_of))
            })
            .collect();

        TreeNode {
            children,
            items: Vec::new(),
        }
    }
}

/// Builds a complete media tree: folders first, then images attached.
///
/// The returned wrapper always has `children["root"]`.
pub fn build_tree(images: &[ImageRecord], folders: &[FolderRecord]) -> TreeNode {
    build_tree_with_report(images, folders).tree
}

/// Builds a complete media tree and reports every fallback placement.
pub fn build_tree_with_report(images: &[ImageRecord], folders: &[FolderRecord]) -> TreeBuild {
    let index = FolderIndex::new(folders);
    let mut tree = TreeBuilder::new(&index).build_skeleton();
    let orphaned_images = ImageAssigner::new(PathResolver::new(&index)).assign(&mut tree, images);

    let report = BuildReport {
        dangling_parents: index
            .dangling_parents()
            .iter()
            .map(|n| (*n).to_string())
            .collect(),
        broken_cycles: index
            .broken_cycles()
            .iter()
            .map(|n| (*n).to_string())
            .collect(),
        orphaned_images,
    };

    debug!(
        folders = index.len(),
        images = images.len(),
        issues = report.issue_count(),
        "Built media folder tree"
    );

    TreeBuild { tree, report }
}
