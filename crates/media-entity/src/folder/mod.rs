//! Folder domain entities.

pub mod model;
pub mod path;
pub mod report;
pub mod tree;

pub use model::FolderRecord;
pub use path::MediaPath;
pub use report::{BuildReport, TreeBuild};
pub use tree::TreeNode;

/// Name of the synthetic root folder that every path starts from.
pub const ROOT_FOLDER: &str = "root";
