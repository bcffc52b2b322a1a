//! Relationship Query Coordinator - Deduplicated, cancellable relationship querying

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{RelationError, RelationResult};
use crate::record::{has_persisted_identity, RecordHost};

use super::metadata::RelationshipKind;
use super::state::RelationStateStore;

/// Per-record coordinator for relationship queries.
///
/// Guarantees at most one live transport call per relationship property:
/// a new `query` aborts the previous in-flight call for the same
/// property before starting its own, and a deliberately aborted call
/// settles as an empty success rather than an error.
pub struct RelationshipQueries {
    host: Arc<dyn RecordHost>,
    state: RelationStateStore,
}

impl RelationshipQueries {
    /// Create a coordinator for one record
    pub fn new(host: Arc<dyn RecordHost>) -> Self {
        Self {
            host,
            state: RelationStateStore::new(),
        }
    }

    /// Create a coordinator sharing an existing state store.
    ///
    /// Used when the transport side needs the store before the
    /// coordinator exists, to register its request handles against it.
    pub fn with_state(host: Arc<dyn RecordHost>, state: RelationStateStore) -> Self {
        Self { host, state }
    }

    /// Shared state handle for the transport side, which registers the
    /// abort handle of each request it starts
    pub fn state(&self) -> RelationStateStore {
        self.state.clone()
    }

    /// Initiate a parameterized fetch of a named relationship.
    ///
    /// Cancels any previous in-flight fetch for the same property, then
    /// resolves with the (possibly reloaded) relationship value. A fetch
    /// superseded by a newer `query` resolves as `Ok(None)`; any other
    /// load failure propagates. The transient per-property state is
    /// cleared on every exit path.
    pub async fn query(&self, property: &str, params: Value) -> RelationResult<Option<Value>> {
        debug!("Querying relationship '{}'", property);
        self.state.set_query_params(property, params).await;

        if let Some(handle) = self.state.take_active_request(property).await {
            debug!("Aborting superseded request for relationship '{}'", property);
            handle.abort();
        }

        let result = self.reload_relationship(property).await;

        // Guaranteed cleanup, regardless of outcome.
        self.state.clear_in_flight(property).await;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_abort() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Resolve the up-to-date value of a named relationship.
    ///
    /// A relationship that already holds a loaded value is force-reloaded.
    /// One that does not is loaded; if that load fails and the previous
    /// attempt also failed, the load path is assumed stuck and a forced
    /// reload is issued instead. A first failure is remembered and
    /// propagated unchanged.
    pub async fn reload_relationship(&self, property: &str) -> RelationResult<Value> {
        let kind = self
            .host
            .relationship(property)
            .map(|meta| meta.kind)
            .ok_or_else(|| {
                RelationError::Configuration(format!("Unknown relationship '{}'", property))
            })?;

        let reference = match kind {
            RelationshipKind::HasMany => self.host.has_many(property),
            RelationshipKind::BelongsTo => self.host.belongs_to(property),
        };

        // Yield once so a superseded request's abort path settles before
        // this request touches the shared per-property state.
        tokio::task::yield_now().await;

        if reference.value().is_some() {
            let value = reference.reload().await?;
            self.state.set_last_was_error(property, false).await;
            return Ok(value);
        }

        match reference.load().await {
            Ok(value) => {
                self.state.set_last_was_error(property, false).await;
                Ok(value)
            }
            // Cancellation is not a load failure; it neither sets nor
            // consults the last-error flag.
            Err(err) if err.is_abort() => Err(err),
            Err(err) => {
                if self.state.last_load_errored(property).await {
                    debug!(
                        "Load of '{}' failed twice, escalating to forced reload: {}",
                        property, err
                    );
                    let value = reference.reload().await?;
                    self.state.set_last_was_error(property, false).await;
                    Ok(value)
                } else {
                    warn!("Load of relationship '{}' failed: {}", property, err);
                    self.state.set_last_was_error(property, true).await;
                    Err(err)
                }
            }
        }
    }

    /// React to a belongs-to property change.
    ///
    /// Calls through to the host's default notification behavior first,
    /// then retains the new value for later if it already has a
    /// persisted identity and the relationship is declared sticky.
    pub async fn notify_belongs_to_changed(&self, key: &str) {
        self.host.belongs_to_did_change(key);

        let Some(value) = self.host.attribute(key) else {
            return;
        };
        if !has_persisted_identity(&value) {
            return;
        }

        let sticky = self
            .host
            .relationship(key)
            .map(|meta| meta.kind == RelationshipKind::BelongsTo && meta.sticky)
            .unwrap_or(false);
        if sticky {
            debug!("Retaining sticky belongs-to value for '{}'", key);
            self.state.set_sticky_value(key, value).await;
        }
    }

    /// The retained sticky value for a belongs-to relationship, if any
    pub async fn sticky_value(&self, key: &str) -> Option<Value> {
        self.state.sticky_value(key).await
    }

    /// The parameters of the in-flight query for a property, if any
    pub async fn query_params(&self, property: &str) -> Option<Value> {
        self.state.query_params(property).await
    }
}
