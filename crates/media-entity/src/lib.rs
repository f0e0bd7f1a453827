//! # media-entity
//!
//! Plain data models for the media manager. Folder and image records are
//! the flat snapshots reported by the backend; [`folder::TreeNode`] and
//! [`folder::MediaPath`] are the in-memory shapes the hierarchy service
//! produces and navigates. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod folder;
pub mod image;

pub use folder::{BuildReport, FolderRecord, MediaPath, ROOT_FOLDER, TreeBuild, TreeNode};
pub use image::ImageRecord;
