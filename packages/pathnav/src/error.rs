//! Error types for path writes.

use crate::Path;

/// Errors raised by [`set`](crate::set).
///
/// Reads and deletes never fail; a missing or unreachable location is
/// reported as `None` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The resolved write target is not a container.
    #[error("cannot write a value to the specified path '{path}': {message}")]
    InvalidTarget { path: Path, message: String },
}

impl Error {
    pub(crate) fn invalid_target(path: &Path, message: impl Into<String>) -> Self {
        Error::InvalidTarget {
            path: path.clone(),
            message: message.into(),
        }
    }
}
