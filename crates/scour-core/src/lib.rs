//! Core runtime for Scour: searchable-model traits, the search-client
//! boundary, and the engine that projects model lifecycle events onto an
//! external search index.

// public exports are one module level down
pub mod client;
pub mod document;
pub mod engine;
pub mod error;
pub mod event;
pub mod key;
pub mod query;
pub mod response;
pub mod traits;


///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or mock helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        client::{SearchClient, SearchIndex},
        document::{Document, FieldMap},
        engine::SearchEngine,
        key::SearchKey,
        query::{SearchOptions, SearchQuery},
        response::{RawSearchResults, SearchHit},
        traits::{IndexIdentity, ModelProvider, Searchable},
    };
}
