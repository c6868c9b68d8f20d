use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// Everything the engine can reject.
///
/// Errors are raised by the call that detects them, before any weight is
/// touched, so a failed call leaves the network exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    /// Unknown activation/loss name, or an out-of-range hyperparameter.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A vector or matrix does not have the size the receiver expects.
    #[error("dimension error: {what} has length {actual}, expected {expected}")]
    Dimension {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// An operation was called in a state that does not allow it.
    #[error("sequencing error: {0}")]
    Sequencing(String),
}

impl NetError {
    pub(crate) fn dimension(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        NetError::Dimension {
            what: what.into(),
            expected,
            actual,
        }
    }

    pub(crate) fn check_len(what: &str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(NetError::dimension(what, expected, actual))
        }
    }
}
