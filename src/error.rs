//! Error types for seize.
//!
//! Only construction can fail. A document without readable content is not
//! an error: `Seize::content()` simply returns `None`.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required document or node was missing (empty selection).
    #[error("{0}")]
    InvalidArgument(String),

    /// A string could not be read as a structural address.
    #[error("Invalid structural address: {0:?}")]
    InvalidAddress(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
