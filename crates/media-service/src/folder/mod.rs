//! Folder hierarchy building, navigation, and capacity services.

pub mod assign;
pub mod capacity;
pub mod index;
pub mod locate;
pub mod path;
pub mod service;
pub mod tree;

pub use assign::ImageAssigner;
pub use capacity::{CapacityPolicy, FolderCapacity};
pub use index::FolderIndex;
pub use locate::{locate, try_locate};
pub use path::PathResolver;
pub use service::TreeService;
pub use tree::{TreeBuilder, build_tree, build_tree_with_report};
