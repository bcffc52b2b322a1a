//! Record Host Seam - What the coordinator consumes from the host model system

use std::sync::Arc;

use serde_json::Value;

use crate::relationships::metadata::RelationshipMetadata;
use crate::relationships::reference::RelationshipReference;

/// The host record the coordinator is attached to.
///
/// Field storage, relationship metadata, reference construction, and the
/// default change-notification behavior all live in the host model
/// system; the coordinator only calls through this trait.
pub trait RecordHost: Send + Sync {
    /// Current resolved value of a named property, if set
    fn attribute(&self, key: &str) -> Option<Value>;

    /// Declared metadata for a named relationship, if one exists
    fn relationship(&self, name: &str) -> Option<&RelationshipMetadata>;

    /// Reference handle for a has-many relationship
    fn has_many(&self, name: &str) -> Arc<dyn RelationshipReference>;

    /// Reference handle for a belongs-to relationship
    fn belongs_to(&self, name: &str) -> Arc<dyn RelationshipReference>;

    /// The base/default notification behavior for a belongs-to change.
    ///
    /// [`notify_belongs_to_changed`] calls this first, unconditionally,
    /// before applying the sticky-caching rule.
    ///
    /// [`notify_belongs_to_changed`]: crate::relationships::query::RelationshipQueries::notify_belongs_to_changed
    fn belongs_to_did_change(&self, key: &str);
}

/// Whether a record value already has a persisted identity, as opposed
/// to being a locally-created placeholder that was never saved.
pub fn has_persisted_identity(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|obj| obj.get("id"))
        .map(|id| !id.is_null())
        .unwrap_or(false)
}
