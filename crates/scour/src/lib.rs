//! Scour — a typed adapter that syncs searchable models into an external
//! search index.
//!
//! ## Crate layout
//! - `core`: model traits, the client boundary, the engine, and events.
//!
//! The `prelude` module mirrors the surface used by application code;
//! implement `SearchClient` over a concrete index client and `Searchable`
//! on each model type to be synced.

pub use scour_core as core;

// common entry points at the crate root
pub use scour_core::{
    engine::SearchEngine,
    error::{ClientError, EngineError, ProviderError},
    event::{EngineEvent, EventSink, NullSink, RecordedEvents},
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
}
