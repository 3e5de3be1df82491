use crate::{
    client::SearchIndex, document::FieldMap, error::ClientError, response::RawSearchResults,
};
use derive_more::{Deref, DerefMut};
use serde::Serialize;
use serde_json::Value as Json;
use std::fmt;

/// Option key the engine merges page sizes into.
pub const OPTION_LIMIT: &str = "limit";

/// Option key the engine merges page offsets into.
pub const OPTION_OFFSET: &str = "offset";

///
/// SearchOptions
///
/// Engine-facing options mapping passed through to the index verbatim,
/// apart from the pagination keys the engine merges in.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq, Serialize)]
pub struct SearchOptions(FieldMap);

impl SearchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Json>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        self.set(OPTION_LIMIT, limit)
    }

    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        self.set(OPTION_OFFSET, offset)
    }

    /// Merge `other` over this mapping (later entries win).
    pub fn merge(&mut self, other: FieldMap) {
        self.0.extend(other);
    }

    #[must_use]
    pub fn into_fields(self) -> FieldMap {
        self.0
    }
}

impl From<FieldMap> for SearchOptions {
    fn from(fields: FieldMap) -> Self {
        Self(fields)
    }
}

///
/// SearchCallback
///
/// Caller-supplied dispatch override. When present it fully controls how
/// text and options become an index call; the engine does not augment it.
///

pub type SearchCallback =
    dyn Fn(&dyn SearchIndex, &str, &SearchOptions) -> Result<RawSearchResults, ClientError>;

///
/// SearchQuery
///
/// Search intent: raw text, an options mapping, and an optional dispatch
/// override. Consuming builder in the fluent style; execution routing
/// lives on the engine.
///

#[derive(Default)]
pub struct SearchQuery {
    text: String,
    options: SearchOptions,
    callback: Option<Box<SearchCallback>>,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: SearchOptions::new(),
            callback: None,
        }
    }

    // ------------------------------------------------------------------
    // Intent builders (pure)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<Json>) -> Self {
        self.options = self.options.set(name, value);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Merge 1-based pagination into the options mapping:
    /// `limit = page_size`, `offset = (page - 1) * page_size`.
    /// Page 0 clamps to page 1.
    #[must_use]
    pub fn paginate(mut self, page_size: u64, page: u64) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        self.options = self.options.limit(page_size).offset(offset);
        self
    }

    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&dyn SearchIndex, &str, &SearchOptions) -> Result<RawSearchResults, ClientError>
            + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    // ------------------------------------------------------------------
    // Intent inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    #[must_use]
    pub fn callback(&self) -> Option<&SearchCallback> {
        self.callback.as_deref()
    }
}

impl fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchQuery")
            .field("text", &self.text)
            .field("options", &self.options)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
