//! Relationship State Store - Per-(record, property) coordination state

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use super::request::AbortHandle;

/// Transient and cached state for one relationship property
#[derive(Debug, Clone, Default)]
pub struct PropertyState {
    /// Last parameters passed to `query` for this relationship; present
    /// only while that query is in flight
    pub query_params: Option<Value>,
    /// Handle to the in-flight transport call, if any
    pub active_request: Option<AbortHandle>,
    /// Whether the most recent load attempt for this relationship failed
    pub last_was_error: bool,
    /// Retained belongs-to value for sticky relationships
    pub sticky_value: Option<Value>,
}

/// Per-record store of relationship coordination state, keyed by
/// relationship property name.
///
/// Clones share the same underlying map, so the transport side can
/// register request handles against the same state the coordinator
/// reads and clears. All state is owned by the record instance the
/// store belongs to; nothing is shared across records.
#[derive(Clone, Default)]
pub struct RelationStateStore {
    state: Arc<RwLock<HashMap<String, PropertyState>>>,
}

impl RelationStateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the parameters of a query that is about to start
    pub async fn set_query_params(&self, property: &str, params: Value) {
        let mut state = self.state.write().await;
        state.entry(property.to_string()).or_default().query_params = Some(params);
    }

    /// The parameters of the in-flight query, if any
    pub async fn query_params(&self, property: &str) -> Option<Value> {
        let state = self.state.read().await;
        state.get(property).and_then(|s| s.query_params.clone())
    }

    /// Register the handle of a transport call that just started.
    ///
    /// At most one handle is current per property; a newer registration
    /// replaces the old one.
    pub async fn track_request(&self, property: &str, handle: AbortHandle) {
        let mut state = self.state.write().await;
        state.entry(property.to_string()).or_default().active_request = Some(handle);
    }

    /// The handle of the current in-flight transport call, if any
    pub async fn active_request(&self, property: &str) -> Option<AbortHandle> {
        let state = self.state.read().await;
        state.get(property).and_then(|s| s.active_request.clone())
    }

    /// Remove and return the current in-flight handle, if any
    pub async fn take_active_request(&self, property: &str) -> Option<AbortHandle> {
        let mut state = self.state.write().await;
        state.get_mut(property).and_then(|s| s.active_request.take())
    }

    /// Clear the transient in-flight slots (params and request handle).
    ///
    /// Runs when a query settles, on every exit path.
    pub async fn clear_in_flight(&self, property: &str) {
        let mut state = self.state.write().await;
        if let Some(s) = state.get_mut(property) {
            s.query_params = None;
            s.active_request = None;
        }
    }

    /// Remember whether the most recent load attempt failed
    pub async fn set_last_was_error(&self, property: &str, errored: bool) {
        let mut state = self.state.write().await;
        state.entry(property.to_string()).or_default().last_was_error = errored;
    }

    /// Did the most recent load attempt for this relationship fail?
    pub async fn last_load_errored(&self, property: &str) -> bool {
        let state = self.state.read().await;
        state.get(property).map(|s| s.last_was_error).unwrap_or(false)
    }

    /// Retain a belongs-to value for a sticky relationship
    pub async fn set_sticky_value(&self, property: &str, value: Value) {
        let mut state = self.state.write().await;
        state.entry(property.to_string()).or_default().sticky_value = Some(value);
    }

    /// The retained sticky value, if one was ever written
    pub async fn sticky_value(&self, property: &str) -> Option<Value> {
        let state = self.state.read().await;
        state.get(property).and_then(|s| s.sticky_value.clone())
    }
}
