//! Error taxonomy shared by every namespace of the facade.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Malformed or length-mismatched input the caller controls.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Key material of the wrong size or format for the algorithm.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Textual encoding (UTF-8, Base64, hex digits) that cannot be reversed.
    #[error("decoding failed: {0}")]
    Decoding(String),

    /// The input had a valid shape but did not decrypt (bad padding).
    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("verification failed: {0}")]
    Verification(String),

    /// Opaque failure reported by the cryptographic provider.
    #[error("provider error: {0}")]
    Provider(String),
}

impl CryptoError {
    /// Returns `true` for errors raised by input validation rather than by
    /// the provider.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidInput(_)
                | CryptoError::InvalidKey(_)
                | CryptoError::UnsupportedAlgorithm(_)
                | CryptoError::Decoding(_)
        )
    }
}

impl From<tokio::task::JoinError> for CryptoError {
    fn from(err: tokio::task::JoinError) -> Self {
        CryptoError::Provider(format!("worker task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = CryptoError::InvalidInput("odd-length hex".into());
        assert_eq!(err.to_string(), "invalid input: odd-length hex");
    }

    #[test]
    fn validation_errors_are_classified() {
        assert!(CryptoError::InvalidKey("x".into()).is_validation());
        assert!(CryptoError::UnsupportedAlgorithm("MD5".into()).is_validation());
        assert!(!CryptoError::Decryption("x".into()).is_validation());
        assert!(!CryptoError::Provider("x".into()).is_validation());
    }
}
