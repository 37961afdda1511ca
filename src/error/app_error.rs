use thiserror::Error;

/// Application-wide error type.
///
/// `Validation` is the only failure mode the catalog stores produce; it
/// carries the human-readable message of the first rule that failed.
/// `Internal` covers unexpected faults outside the core contract (startup,
/// transport plumbing) and converts from `anyhow::Error`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error raised synchronously by a store operation
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Creates a validation error with the given rule message.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let error = AppError::validation("name must not be empty");
        assert_eq!(
            error.to_string(),
            "Validation failed: name must not be empty"
        );
    }

    #[test]
    fn test_internal_error_from_anyhow() {
        let error: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(error, AppError::Internal { .. }));
    }
}
