//! Convenience result type alias for the media manager.

use crate::error::AppError;

/// A specialized `Result` type for media manager operations.
pub type AppResult<T> = Result<T, AppError>;
