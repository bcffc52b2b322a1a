//! # relquery: Relationship Querying for Client-Side Records
//!
//! Augments a record with deduplicated, cancellable relationship loading:
//! at most one transport call is live per (record, relationship), a
//! superseded call is aborted and observed as an empty success, and a
//! relationship whose previous load failed escalates to a forced reload
//! on the next attempt instead of repeating the stuck load path.
//!
//! The host model system, transport, and notification machinery are
//! collaborators behind the [`RecordHost`] and [`RelationshipReference`]
//! traits; this crate owns only the coordination logic and the
//! per-property state it needs for it.

pub mod error;
pub mod record;
pub mod relationships;

// Re-export core traits and types
pub use error::*;
pub use record::*;
pub use relationships::*;
