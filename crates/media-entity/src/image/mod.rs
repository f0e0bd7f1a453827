//! Image domain entities.

pub mod model;

pub use model::{ImageRecord, sort_images_by_id};
