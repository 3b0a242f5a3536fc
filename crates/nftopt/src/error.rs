//! Error types for the optimizer.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while running the optimizer.
#[derive(Debug, Error)]
pub enum NftError {
    /// The initial point or configuration was rejected before any evaluation.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// The objective function returned an error.
    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl NftError {
    /// Wraps an objective error, keeping it as the error source.
    pub fn objective<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Objective(Box::new(err))
    }

    /// Returns true if this error was raised before any evaluation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type for optimizer operations.
pub type NftResult<T> = Result<T, NftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("device offline")]
    struct DeviceOffline;

    #[test]
    fn test_objective_error_keeps_source() {
        let err = NftError::objective(DeviceOffline);
        assert_eq!(err.to_string(), "objective evaluation failed");
        let source = err.source().expect("source is kept");
        assert_eq!(source.to_string(), "device offline");
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = NftError::InvalidArgument {
            reason: "initial point is empty",
        };
        assert_eq!(err.to_string(), "invalid argument: initial point is empty");
        assert!(err.is_invalid_argument());
    }
}
