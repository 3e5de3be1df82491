use crate::{document::FieldMap, key::SearchKey};

///
/// SearchHit
///
/// One matched document: its resolved key plus whatever fields the
/// engine returned alongside it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchHit {
    pub key: SearchKey,
    pub fields: FieldMap,
}

impl SearchHit {
    #[must_use]
    pub fn new(key: impl Into<SearchKey>) -> Self {
        Self {
            key: key.into(),
            fields: FieldMap::new(),
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: FieldMap) -> Self {
        self.fields = fields;
        self
    }
}

///
/// RawSearchResults
///
/// Raw engine results: hits in ranking order plus engine-specific
/// metadata. Hit order is authoritative and must survive remapping.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawSearchResults {
    pub hits: Vec<SearchHit>,
    pub estimated_total: Option<u64>,
    pub raw: FieldMap,
}

impl RawSearchResults {
    #[must_use]
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            estimated_total: None,
            raw: FieldMap::new(),
        }
    }

    #[must_use]
    pub const fn with_estimated_total(mut self, total: u64) -> Self {
        self.estimated_total = Some(total);
        self
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Ordered key extraction (hit ids, in ranking order).
    #[must_use]
    pub fn keys(&self) -> Vec<SearchKey> {
        self.hits.iter().map(|hit| hit.key.clone()).collect()
    }

    /// Engine-estimated total, falling back to the hit count.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.estimated_total.unwrap_or(self.hits.len() as u64)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl FromIterator<SearchHit> for RawSearchResults {
    fn from_iter<I: IntoIterator<Item = SearchHit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
