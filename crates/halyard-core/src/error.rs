//! Error types for halyard.

use thiserror::Error;

/// Top-level result type for halyard operations.
pub type Result<T> = std::result::Result<T, HalyardError>;

/// Top-level error type for halyard.
#[derive(Debug, Error)]
pub enum HalyardError {
    /// A `self` link had to be synthesized but no request was in flight.
    #[error("no request context available to populate the 'self' link")]
    ContextUnavailable,

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = HalyardError::ContextUnavailable;
        let msg = err.to_string();
        assert!(msg.contains("request context"));
        assert!(msg.contains("self"));

        let err = HalyardError::Serialization("key must be a string".to_string());
        let msg = err.to_string();
        assert!(msg.contains("serialization"));
        assert!(msg.contains("key must be a string"));
    }
}
