//! Reading nodes out of a built tree.
//!
//! All lookups start at the wrapper returned by a tree build and treat the
//! path as absolute from the synthetic root, so `["root", "A"]` and `["A"]`
//! name the same node.

use std::borrow::Cow;

use media_entity::folder::{MediaPath, TreeNode};

/// Returns the node at `path`, or `None` if any segment is missing.
pub fn try_locate<'t>(tree: &'t TreeNode, path: &MediaPath) -> Option<&'t TreeNode> {
    let mut node = tree.root()?;
    for segment in path.folders() {
        node = node.child(segment)?;
    }
    Some(node)
}

/// Returns the node at `path`, or a fresh empty node if it does not exist.
///
/// A stale path (e.g. a folder deleted since the last refresh) renders as
/// an empty folder instead of failing.
pub fn locate<'t>(tree: &'t TreeNode, path: &MediaPath) -> Cow<'t, TreeNode> {
    match try_locate(tree, path) {
        Some(node) => Cow::Borrowed(node),
        None => Cow::Owned(TreeNode::new()),
    }
}
