use thiserror::Error as ThisError;

///
/// ClientError
///
/// Error vocabulary of the search-client boundary.
/// `IndexNotFound` on fetch is the only kind the engine recognizes and
/// recovers locally; every other variant propagates to the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ClientError {
    #[error("index not found: {index}")]
    IndexNotFound { index: String },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("backend error: {message}")]
    Backend { message: String },
}

impl ClientError {
    pub fn index_not_found(index: impl Into<String>) -> Self {
        Self::IndexNotFound {
            index: index.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_index_not_found(&self) -> bool {
        matches!(self, Self::IndexNotFound { .. })
    }
}

///
/// ProviderError
///
/// Bulk-load failure reported by a model provider during result remapping.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("model provider failed: {message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// EngineError
///
/// Adapter-level error. A thin sum over the collaborator boundaries;
/// no retry, wrapping, or user-facing translation happens here.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EngineError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
