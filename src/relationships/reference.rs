//! Relationship References - Capability set shared by has-many and belongs-to handles

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RelationResult;

/// A handle scoped to one named relationship on one record, exposing its
/// cached value and load/reload operations.
///
/// Has-many and belongs-to references are two variants implementing the
/// same interface; the coordinator never needs to know which it holds
/// beyond picking the accessor that produced it.
#[async_trait]
pub trait RelationshipReference: Send + Sync {
    /// The currently cached value, or None if nothing has been resolved.
    ///
    /// None is ambiguous between "never fetched" and "last fetch errored
    /// and left nothing behind"; the coordinator disambiguates with its
    /// own last-error flag.
    fn value(&self) -> Option<Value>;

    /// Fetch the relationship, consulting any reference-level cache
    async fn load(&self) -> RelationResult<Value>;

    /// Refetch the relationship unconditionally, discarding any cached
    /// value or error state
    async fn reload(&self) -> RelationResult<Value>;
}
