use crate::traits::Searchable;
use derive_more::{Deref, DerefMut};
use serde::Serialize;
use serde_json::Value as Json;
use std::collections::BTreeMap;

///
/// FieldMap
///
/// Field name to JSON value mapping shared by projections, metadata,
/// documents, and search options.
///

pub type FieldMap = BTreeMap<String, Json>;

/// Document field carrying the soft-delete marker.
pub const SOFT_DELETE_FIELD: &str = "__soft_deleted";

/// Metadata fragment marking a model as soft-deleted (or restored).
#[must_use]
pub fn soft_delete(deleted: bool) -> FieldMap {
    let mut map = FieldMap::new();
    map.insert(SOFT_DELETE_FIELD.to_string(), Json::from(deleted));
    map
}

///
/// Document
///
/// The unit submitted to the index: a model's searchable projection
/// merged with its metadata and keyed by its resolved search key.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq, Serialize)]
pub struct Document(FieldMap);

impl Document {
    /// Map a model into a document.
    ///
    /// Returns `None` when the searchable projection is empty, which
    /// excludes the model from the batch. Merge order: projection, then
    /// metadata, then the resolved key under `M::PRIMARY_KEY` (later
    /// entries win on field collisions).
    #[must_use]
    pub fn from_model<M: Searchable>(model: &M) -> Option<Self> {
        let mut fields = model.to_searchable();
        if fields.is_empty() {
            return None;
        }

        fields.extend(model.search_metadata());
        fields.insert(M::PRIMARY_KEY.to_string(), model.search_key().to_json());

        Some(Self(fields))
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Json> {
        self.0.get(name)
    }

    #[must_use]
    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl From<FieldMap> for Document {
    fn from(fields: FieldMap) -> Self {
        Self(fields)
    }
}
