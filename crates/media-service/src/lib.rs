//! # media-service
//!
//! Turns the backend's flat folder and image lists into a navigable tree
//! and answers path, membership, and capacity questions about it.
//!
//! Every operation is a synchronous, pure function of its inputs: a tree
//! is rebuilt from a fresh `(images, folders)` snapshot after any change
//! and never patched in place.

pub mod folder;

pub use folder::{
    CapacityPolicy, FolderCapacity, FolderIndex, ImageAssigner, PathResolver, TreeBuilder,
    TreeService, build_tree, build_tree_with_report, locate, try_locate,
};
