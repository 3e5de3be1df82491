//! The opaque collaborator boundary.
//!
//! Everything hard (inverted-index search, ranking, transport) lives
//! behind these traits. The engine never reaches past them, which keeps
//! the whole adapter mockable from tests.

use crate::{
    document::Document, error::ClientError, key::SearchKey, query::SearchOptions,
    response::RawSearchResults,
};

///
/// SearchClient
///
/// Index lookup and creation surface of the external client.
///

pub trait SearchClient {
    type Index: SearchIndex;

    /// Fetch an index, verifying it exists.
    /// Missing indexes surface as `ClientError::IndexNotFound`.
    fn get_index(&self, uid: &str) -> Result<Self::Index, ClientError>;

    /// Fetch an index, creating it with the given identifying field
    /// when missing. Idempotent from the caller's perspective.
    fn get_or_create_index(
        &self,
        uid: &str,
        primary_key: Option<&str>,
    ) -> Result<Self::Index, ClientError>;

    /// Obtain an index handle without a round trip. The handle is not
    /// validated; operations on a missing index fail at call time.
    fn index(&self, uid: &str) -> Self::Index;
}

///
/// SearchIndex
///
/// Document and search operations on one index handle.
/// Object-safe so query callbacks can receive `&dyn SearchIndex`.
///

pub trait SearchIndex {
    fn uid(&self) -> &str;

    /// Upsert a batch of documents.
    fn add_documents(&self, documents: &[Document]) -> Result<(), ClientError>;

    /// Bulk-delete documents by resolved key.
    fn delete_documents(&self, keys: &[SearchKey]) -> Result<(), ClientError>;

    /// Drop every document in the index.
    fn delete_all_documents(&self) -> Result<(), ClientError>;

    /// Run a search. Hit order in the result is the engine's ranking
    /// order and must be preserved downstream.
    fn search(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<RawSearchResults, ClientError>;
}
