use crate::{
    document::{FieldMap, soft_delete},
    error::ProviderError,
    key::SearchKey,
    traits::{IndexIdentity, ModelProvider, Searchable},
};
use serde_json::Value as Json;
use std::cell::Cell;

///
/// Post
///
/// Baseline fixture: numeric primary key, title/body projection.
///

#[derive(Clone, Debug)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: u64, title: &str, body: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

impl IndexIdentity for Post {
    const INDEX_NAME: &'static str = "posts";
    const PRIMARY_KEY: &'static str = "id";
    const MODEL_NAME: &'static str = "Post";
}

impl Searchable for Post {
    fn search_key(&self) -> SearchKey {
        SearchKey::Uint(self.id)
    }

    fn to_searchable(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("title".to_string(), Json::from(self.title.clone()));
        fields.insert("body".to_string(), Json::from(self.body.clone()));
        fields
    }
}

///
/// SlugPost
///
/// Custom key accessor: documents are keyed by slug, not the numeric id.
///

#[derive(Clone, Debug)]
pub struct SlugPost {
    pub id: u64,
    pub slug: String,
    pub title: String,
}

impl SlugPost {
    pub fn new(id: u64, slug: &str, title: &str) -> Self {
        Self {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
        }
    }
}

impl IndexIdentity for SlugPost {
    const INDEX_NAME: &'static str = "slug_posts";
    const PRIMARY_KEY: &'static str = "slug";
    const MODEL_NAME: &'static str = "SlugPost";
}

impl Searchable for SlugPost {
    fn search_key(&self) -> SearchKey {
        SearchKey::from(self.slug.as_str())
    }

    fn to_searchable(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("title".to_string(), Json::from(self.title.clone()));
        fields
    }
}

///
/// DraftPost
///
/// Projection is empty until the post is published, so drafts are
/// excluded from update batches.
///

#[derive(Clone, Debug)]
pub struct DraftPost {
    pub id: u64,
    pub published_title: Option<String>,
}

impl DraftPost {
    pub fn new(id: u64, published_title: Option<&str>) -> Self {
        Self {
            id,
            published_title: published_title.map(str::to_string),
        }
    }
}

impl IndexIdentity for DraftPost {
    const INDEX_NAME: &'static str = "draft_posts";
    const PRIMARY_KEY: &'static str = "id";
    const MODEL_NAME: &'static str = "DraftPost";
}

impl Searchable for DraftPost {
    fn search_key(&self) -> SearchKey {
        SearchKey::Uint(self.id)
    }

    fn to_searchable(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        if let Some(title) = &self.published_title {
            fields.insert("title".to_string(), Json::from(title.clone()));
        }
        fields
    }
}

///
/// ArchivedPost
///
/// Carries the soft-delete marker through search metadata.
///

#[derive(Clone, Debug)]
pub struct ArchivedPost {
    pub id: u64,
    pub title: String,
    pub deleted: bool,
}

impl ArchivedPost {
    pub fn new(id: u64, title: &str, deleted: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            deleted,
        }
    }
}

impl IndexIdentity for ArchivedPost {
    const INDEX_NAME: &'static str = "archived_posts";
    const PRIMARY_KEY: &'static str = "id";
    const MODEL_NAME: &'static str = "ArchivedPost";
}

impl Searchable for ArchivedPost {
    fn search_key(&self) -> SearchKey {
        SearchKey::Uint(self.id)
    }

    fn to_searchable(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("title".to_string(), Json::from(self.title.clone()));
        fields
    }

    fn search_metadata(&self) -> FieldMap {
        soft_delete(self.deleted)
    }
}

///
/// PostStore
///
/// ModelProvider fixture: serves posts in whatever order they were
/// seeded, counting bulk-load calls.
///

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    load_calls: Cell<u32>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            load_calls: Cell::new(0),
        }
    }

    pub fn load_calls(&self) -> u32 {
        self.load_calls.get()
    }
}

impl ModelProvider<Post> for PostStore {
    fn load_by_keys(&self, keys: &[SearchKey]) -> Result<Vec<Post>, ProviderError> {
        self.load_calls.set(self.load_calls.get() + 1);

        Ok(self
            .posts
            .iter()
            .filter(|post| keys.contains(&post.search_key()))
            .cloned()
            .collect())
    }
}

///
/// FailingStore
///
/// ModelProvider fixture whose bulk load always fails.
///

#[derive(Debug, Default)]
pub struct FailingStore;

impl ModelProvider<Post> for FailingStore {
    fn load_by_keys(&self, _keys: &[SearchKey]) -> Result<Vec<Post>, ProviderError> {
        Err(ProviderError::new("store offline"))
    }
}
