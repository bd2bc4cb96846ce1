use nusmods_cache::{CacheError, FetchError, StoreError};
use nusmods_config::ConfigError;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Cache store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of a failed fetch, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Cache(CacheError::Fetch(FetchError::Status { status, .. }))
            | ClientError::Fetch(FetchError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
