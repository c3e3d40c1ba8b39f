//! Defines the error type shared by every fallible operation of this crate.
use thiserror::Error;


/// Result alias for `clusterboost`.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors returned by the clustering, the weak learner,
/// the booster, and the data set reader.
///
/// The training core only reports [`Error::InvalidArgument`].
/// The remaining variants come from file and model I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violates the contract of the called operation.
    /// E.g., shape mismatch, `k` out of range, non-binary label.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to read or write a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A data set file is malformed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Failed to (de)serialize a model.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


impl Error {
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }
}
