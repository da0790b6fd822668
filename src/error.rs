//! Error types for traceagri.

use thiserror::Error;

use crate::locale::CatalogError;

/// Main error type for traceagri operations.
#[derive(Error, Debug)]
pub enum TraceAgriError {
    /// Durable storage rejected a read or write.
    #[error("storage error for key {key}: {message}")]
    Storage { key: String, message: String },

    /// A storage key that cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Session record could not be encoded or decoded.
    #[error("session record error: {0}")]
    Record(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown locale tag.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Translation catalog failed validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The credential verifier could not reach a decision.
    #[error("credential verification failed: {0}")]
    Verifier(String),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

/// Convenience Result type for traceagri operations.
pub type Result<T> = std::result::Result<T, TraceAgriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_display() {
        let err = TraceAgriError::Storage {
            key: "traceagri-user".into(),
            message: "quota exceeded".into(),
        };
        assert!(err.to_string().contains("traceagri-user"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: TraceAgriError = io_err.into();
        assert!(matches!(err, TraceAgriError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_record_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TraceAgriError = json_err.into();
        assert!(matches!(err, TraceAgriError::Record(_)));
    }

    #[test]
    fn test_unsupported_locale_display() {
        let err = TraceAgriError::UnsupportedLocale("fr".into());
        assert_eq!(err.to_string(), "unsupported locale: fr");
    }
}
