use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

///
/// SearchKey
///
/// The resolved identity of a document in the index.
/// Backing primary keys and custom key accessors with the same scalar
/// representation, so delete lists and hit ids compare directly.
///
/// Untagged serde keeps documents carrying plain JSON scalars.
/// Non-negative numbers normalize to `Uint`; `Int` is reserved for
/// negative values so equality survives a JSON round trip.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(untagged)]
pub enum SearchKey {
    Uint(u64),
    Int(i64),
    String(String),
}

impl SearchKey {
    /// Project the key into the JSON scalar stored in a document.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Uint(v) => Json::from(*v),
            Self::Int(v) => Json::from(*v),
            Self::String(v) => Json::from(v.clone()),
        }
    }

    /// Extract a key from a raw document field, normalizing non-negative
    /// numbers to `Uint`. Non-scalar values carry no identity.
    #[must_use]
    pub fn from_json(value: &Json) -> Option<Self> {
        match value {
            Json::Number(n) => n
                .as_u64()
                .map(Self::Uint)
                .or_else(|| n.as_i64().map(Self::Int)),
            Json::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }
}

impl From<u64> for SearchKey {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<i64> for SearchKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for SearchKey {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for SearchKey {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
