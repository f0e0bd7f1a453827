//! Attaching images to a built folder tree.

use tracing::warn;

use media_entity::folder::{MediaPath, TreeNode};
use media_entity::image::ImageRecord;

use super::path::PathResolver;

/// Places each image in the node for its owning folder.
#[derive(Debug, Clone, Copy)]
pub struct ImageAssigner<'i, 'a> {
    resolver: PathResolver<'i, 'a>,
}

impl<'i, 'a> ImageAssigner<'i, 'a> {
    /// Creates an assigner that resolves folders through `resolver`.
    pub fn new(resolver: PathResolver<'i, 'a>) -> Self {
        Self { resolver }
    }

    /// Appends every image to its folder node, in input order.
    ///
    /// Missing nodes along the way are created empty, so an image tagged
    /// with a folder the snapshot does not list ends up in `root/<tag>`.
    /// Returns the ids of such orphaned images.
    pub fn assign(&self, tree: &mut TreeNode, images: &[ImageRecord]) -> Vec<i64> {
        let mut orphaned = Vec::new();

        for image in images {
            let folder = image.folder();
            let path = if image.is_in_root() {
                MediaPath::root()
            } else {
                if !self.resolver.index().contains(folder) {
                    warn!(
                        image_id = image.id,
                        folder,
                        "Image references an unknown folder"
                    );
                    orphaned.push(image.id);
                }
                self.resolver.resolve(folder)
            };

            let mut node = tree.root_mut();
            for segment in path.folders() {
                node = node.child_entry(segment);
            }
            node.items.push(image.clone());
        }

        orphaned
    }
}
