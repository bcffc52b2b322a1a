//! Error types for relationship querying
//!
//! A deliberate cancellation is part of the normal control flow here and
//! gets its own variant so the query boundary can filter it out instead
//! of surfacing it to callers.

/// Result type alias for relationship operations
pub type RelationResult<T> = Result<T, RelationError>;

/// Error types for relationship loading and querying
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelationError {
    /// The in-flight request was deliberately cancelled because a newer
    /// query for the same relationship superseded it
    #[error("Relationship request aborted")]
    Aborted,

    /// Transport- or server-level failure while loading a relationship
    #[error("Relationship load failed: {0}")]
    Load(String),

    /// Unknown relationship name or invalid relationship metadata
    #[error("Relationship configuration error: {0}")]
    Configuration(String),
}

impl RelationError {
    /// Returns true for the distinguished cancellation kind
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_is_distinguished_from_load_failure() {
        assert!(RelationError::Aborted.is_abort());
        assert!(!RelationError::Load("boom".to_string()).is_abort());
        assert!(!RelationError::Configuration("bad".to_string()).is_abort());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RelationError::Load("timeout".to_string()).to_string(),
            "Relationship load failed: timeout"
        );
        assert_eq!(
            RelationError::Aborted.to_string(),
            "Relationship request aborted"
        );
    }
}
