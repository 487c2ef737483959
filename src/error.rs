//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

/// Boxed error returned by miss loaders and refresh functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Cache Error Enum ==
/// Recoverable errors returned by cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent or expired and no miss loader is configured
    #[error("cache: key not found")]
    NotFound,

    /// The miss loader failed; its error is passed through unchanged
    #[error(transparent)]
    Loader(BoxError),
}

impl CacheError {
    /// Returns true for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound)
    }

    /// Returns the loader's error, if this is a loader failure.
    pub fn loader_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            CacheError::Loader(err) => Some(err.as_ref()),
            CacheError::NotFound => None,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
