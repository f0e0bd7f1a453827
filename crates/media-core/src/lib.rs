//! # media-core
//!
//! Core crate for the cinema media manager. Contains configuration
//! schemas and the unified error system shared by the folder hierarchy
//! service and the command-line tooling.
//!
//! This crate has **no** internal dependencies on other media crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
