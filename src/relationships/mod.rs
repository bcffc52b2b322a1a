//! Relationships Module - Query coordination, references, and per-property state

pub mod metadata;
pub mod query;
pub mod reference;
pub mod request;
pub mod state;


// Re-export main types
pub use metadata::*;
pub use query::*;
pub use reference::*;
pub use request::*;
pub use state::*;
