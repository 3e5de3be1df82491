
use crate::{
    client::{SearchClient, SearchIndex},
    document::Document,
    error::EngineError,
    event::{EngineEvent, EventSink, NullSink},
    key::SearchKey,
    query::SearchQuery,
    response::RawSearchResults,
    traits::{ModelProvider, Searchable},
};
use std::{collections::BTreeMap, rc::Rc};

///
/// SearchEngine
///
/// The adapter proper. Projects model lifecycle events onto index
/// mutations, search intent onto index calls, and raw hits back onto
/// ordered model collections. Everything else is delegated to the
/// injected client.
///

pub struct SearchEngine<C: SearchClient> {
    client: C,
    events: Rc<dyn EventSink>,
}

impl<C: SearchClient> SearchEngine<C> {
    // ======================================================================
    // Construction & configuration
    // ======================================================================

    pub fn new(client: C) -> Self {
        Self {
            client,
            events: Rc::new(NullSink),
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: Rc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    // ======================================================================
    // Write path
    // ======================================================================

    /// Upsert a batch of models.
    ///
    /// Models with an empty searchable projection are excluded. When the
    /// resolved batch is empty no index call is issued at all; otherwise
    /// the index is provisioned lazily and the batch submitted once.
    pub fn update<M: Searchable>(&self, models: &[M]) -> Result<(), EngineError> {
        let documents: Vec<Document> = models.iter().filter_map(Document::from_model).collect();
        if documents.is_empty() {
            return Ok(());
        }

        let index = self.ensure_index::<M>()?;
        index.add_documents(&documents)?;

        Ok(())
    }

    /// Bulk-delete a batch of models by resolved key.
    ///
    /// Empty batches still issue the call with an empty key list, unlike
    /// update.
    pub fn delete<M: Searchable>(&self, models: &[M]) -> Result<(), EngineError> {
        let keys: Vec<SearchKey> = models.iter().map(Searchable::search_key).collect();
        self.client.index(M::INDEX_NAME).delete_documents(&keys)?;

        Ok(())
    }

    /// Drop every document from the model's index.
    pub fn flush<M: Searchable>(&self) -> Result<(), EngineError> {
        self.client.index(M::INDEX_NAME).delete_all_documents()?;

        Ok(())
    }

    // ======================================================================
    // Read path
    // ======================================================================

    /// Run a search against the model's index.
    ///
    /// A query callback, when present, fully controls dispatch; the
    /// engine hands it the unvalidated index handle, the raw text, and
    /// the options as-is.
    pub fn search<M: Searchable>(
        &self,
        query: &SearchQuery,
    ) -> Result<RawSearchResults, EngineError> {
        let index = self.client.index(M::INDEX_NAME);

        let results = match query.callback() {
            Some(callback) => callback(&index, query.text(), query.options())?,
            None => index.search(query.text(), query.options())?,
        };

        Ok(results)
    }

    /// Merge 1-based pagination into the query, then search.
    pub fn paginate<M: Searchable>(
        &self,
        query: SearchQuery,
        page_size: u64,
        page: u64,
    ) -> Result<RawSearchResults, EngineError> {
        self.search::<M>(&query.paginate(page_size, page))
    }

    // ======================================================================
    // Result mapping
    // ======================================================================

    /// Re-hydrate models from raw results, preserving hit order exactly.
    ///
    /// The provider is bulk-loaded once; its response order is ignored.
    /// Loaded models are arena'd by resolved key and projected back
    /// through the original key sequence. Keys missing from the loaded
    /// set are dropped silently; zero hits short-circuit to an empty
    /// collection without consulting the provider.
    pub fn map<M, P>(&self, results: &RawSearchResults, provider: &P) -> Result<Vec<M>, EngineError>
    where
        M: Searchable,
        P: ModelProvider<M>,
    {
        if results.is_empty() {
            return Ok(Vec::new());
        }

        let keys = results.keys();
        let mut arena: BTreeMap<SearchKey, M> = provider
            .load_by_keys(&keys)?
            .into_iter()
            .map(|model| (model.search_key(), model))
            .collect();

        Ok(keys.iter().filter_map(|key| arena.remove(key)).collect())
    }

    /// Ordered hit ids, in ranking order.
    #[expect(clippy::unused_self)]
    #[must_use]
    pub fn map_ids(&self, results: &RawSearchResults) -> Vec<SearchKey> {
        results.keys()
    }

    /// Total match count as reported by the engine.
    #[expect(clippy::unused_self)]
    #[must_use]
    pub fn total_count(&self, results: &RawSearchResults) -> u64 {
        results.total()
    }

    // ======================================================================
    // Index provisioning
    // ======================================================================

    // Fetch the model's index, creating it on IndexNotFound with the
    // model's primary-key field as its identifying key. Creation emits
    // exactly one IndexCreated event. Any other fetch error propagates.
    fn ensure_index<M: Searchable>(&self) -> Result<C::Index, EngineError> {
        match self.client.get_index(M::INDEX_NAME) {
            Ok(index) => Ok(index),
            Err(err) if err.is_index_not_found() => {
                let index = self
                    .client
                    .get_or_create_index(M::INDEX_NAME, Some(M::PRIMARY_KEY))?;

                self.events.record(&EngineEvent::IndexCreated {
                    index: index.uid().to_string(),
                    model: M::MODEL_NAME,
                });

                Ok(index)
            }
            Err(err) => Err(err.into()),
        }
    }
}
