use crate::{document::FieldMap, error::ProviderError, key::SearchKey};

// ============================================================================
// MODEL IDENTITY & PROJECTION
// ============================================================================
//
// These traits describe *what a model contributes to the index*,
// not how it is persisted or transported.
//

///
/// IndexIdentity
///
/// Static index placement for a model type.
///
/// ## Semantics
/// - `INDEX_NAME` is the index uid the type syncs into
/// - `PRIMARY_KEY` is the identifying document field, and the field the
///   index is created with when provisioned lazily
/// - `MODEL_NAME` names the type in engine events
///

pub trait IndexIdentity {
    const INDEX_NAME: &'static str;
    const PRIMARY_KEY: &'static str;
    const MODEL_NAME: &'static str;
}

///
/// Searchable
///
/// Capability surface a model exposes to the engine.
///
/// `search_key` is the override point for custom key accessors; the
/// default expectation is the primary-key value. An empty `to_searchable`
/// projection excludes the model from update batches entirely (a no-op,
/// not an error).
///

pub trait Searchable: IndexIdentity {
    /// Resolved document identity for this model instance.
    fn search_key(&self) -> SearchKey;

    /// Searchable projection: the fields this model contributes.
    fn to_searchable(&self) -> FieldMap;

    /// Extra document fields merged over the projection, e.g. a
    /// soft-delete marker. Defaults to none.
    fn search_metadata(&self) -> FieldMap {
        FieldMap::new()
    }
}

// ============================================================================
// RE-HYDRATION
// ============================================================================

///
/// ModelProvider
///
/// Bulk loader used to re-hydrate models from hit keys.
/// Response order is unspecified; the engine re-sorts against the
/// engine-provided hit order.
///

pub trait ModelProvider<M: Searchable> {
    fn load_by_keys(&self, keys: &[SearchKey]) -> Result<Vec<M>, ProviderError>;
}
