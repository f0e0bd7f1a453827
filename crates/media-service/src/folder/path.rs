//! Folder path resolution.

use std::collections::HashSet;

use tracing::warn;

use media_entity::folder::{MediaPath, ROOT_FOLDER};

use super::index::FolderIndex;

/// Resolves folder names to their full path from the synthetic root.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'i, 'a> {
    index: &'i FolderIndex<'a>,
}

impl<'i, 'a> PathResolver<'i, 'a> {
    /// Creates a resolver over an index.
    pub fn new(index: &'i FolderIndex<'a>) -> Self {
        Self { index }
    }

    /// The index this resolver reads.
    pub fn index(&self) -> &'i FolderIndex<'a> {
        self.index
    }

    /// Walks parent links from `folder_name` up to the root.
    ///
    /// The result always starts with `"root"`. An unknown folder resolves to
    /// `root/<folder_name>`. The walk visits each name at most once, so it
    /// terminates after at most `n` steps whatever the input looks like.
    pub fn resolve(&self, folder_name: &str) -> MediaPath {
        if folder_name.is_empty() || folder_name == ROOT_FOLDER {
            return MediaPath::root();
        }

        let mut chain = vec![folder_name];
        let mut visited: HashSet<&str> = HashSet::from([folder_name]);
        let mut current = folder_name;

        while let Some(parent) = self.index.effective_parent(current) {
            if !visited.insert(parent) {
                warn!(
                    folder = folder_name,
                    repeated = parent,
                    "Parent chain revisits a folder, stopping"
                );
                break;
            }
            chain.push(parent);
            current = parent;
        }

        chain.reverse();
        MediaPath::from_segments(chain)
    }

    /// Every path from the root down to `folder_name`, for breadcrumbs.
    pub fn breadcrumbs(&self, folder_name: &str) -> Vec<MediaPath> {
        let full = self.resolve(folder_name);
        let mut crumbs = Vec::with_capacity(full.segments().len());
        let mut current = MediaPath::root();
        crumbs.push(current.clone());
        for name in full.folders() {
            current = current.join(name.as_str());
            crumbs.push(current.clone());
        }
        crumbs
    }
}
