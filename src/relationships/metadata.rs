//! Relationship Metadata - Kind and per-relationship configuration

use serde::{Deserialize, Serialize};

use crate::error::{RelationError, RelationResult};

/// Defines the kind of relationship a record property holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// One-to-many relationship (hasMany)
    HasMany,
    /// Many-to-one relationship (belongsTo)
    BelongsTo,
}

impl RelationshipKind {
    /// Returns true if this relationship kind resolves to a collection
    pub fn is_collection(self) -> bool {
        matches!(self, Self::HasMany)
    }
}

/// Metadata for a single named relationship on a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipMetadata {
    /// The kind of relationship
    pub kind: RelationshipKind,

    /// Name of the relationship (property name on the record)
    pub name: String,

    /// Whether a replaced belongs-to value with a persisted identity is
    /// retained even after the live association later clears
    pub sticky: bool,
}

impl RelationshipMetadata {
    /// Create a new RelationshipMetadata instance
    pub fn new(kind: RelationshipKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            sticky: false,
        }
    }

    /// Mark this relationship as sticky (belongs-to only)
    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Validate the relationship metadata for consistency
    pub fn validate(&self) -> RelationResult<()> {
        if self.name.is_empty() {
            return Err(RelationError::Configuration(
                "Relationship name cannot be empty".to_string(),
            ));
        }

        if self.sticky && self.kind != RelationshipKind::BelongsTo {
            return Err(RelationError::Configuration(format!(
                "Relationship '{}' of kind {:?} cannot be sticky",
                self.name, self.kind
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_kind_properties() {
        assert!(RelationshipKind::HasMany.is_collection());
        assert!(!RelationshipKind::BelongsTo.is_collection());
    }

    #[test]
    fn test_relationship_metadata_creation() {
        let metadata = RelationshipMetadata::new(RelationshipKind::HasMany, "comments");

        assert_eq!(metadata.kind, RelationshipKind::HasMany);
        assert_eq!(metadata.name, "comments");
        assert!(!metadata.sticky);
        assert!(metadata.validate().is_ok());
    }

    #[test]
    fn test_sticky_belongs_to_validates() {
        let metadata =
            RelationshipMetadata::new(RelationshipKind::BelongsTo, "author").with_sticky(true);
        assert!(metadata.validate().is_ok());
    }

    #[test]
    fn test_sticky_has_many_rejected() {
        let metadata =
            RelationshipMetadata::new(RelationshipKind::HasMany, "comments").with_sticky(true);
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let metadata = RelationshipMetadata::new(RelationshipKind::BelongsTo, "");
        assert!(metadata.validate().is_err());
    }
}
