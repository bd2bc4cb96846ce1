//! Read-through cache of decoded JSON records.
//!
//! A lookup first consults the byte store. If the stored bytes decode into the
//! requested type they are returned; otherwise the caller-supplied fetch runs,
//! its bytes are written back best-effort and then decoded.
//!
//! There is no expiry or invalidation, and concurrent misses on the same key
//! each run their own fetch. Both writes carry the same bytes, so the store
//! ends up consistent either way.

use crate::fetch::FetchError;
use crate::store::ByteStore;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Error type for cache lookups.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode fetched record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decoding cache over an injected [`ByteStore`].
#[derive(Clone)]
pub struct ReadThroughCache {
    store: Arc<dyn ByteStore>,
}

impl std::fmt::Debug for ReadThroughCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadThroughCache").finish_non_exhaustive()
    }
}

impl ReadThroughCache {
    pub fn new(store: Arc<dyn ByteStore>) -> Self {
        Self { store }
    }

    /// Return the record cached under `key`, fetching it on a miss.
    ///
    /// Store read failures and cached bytes that no longer decode are treated
    /// as misses. A failed write-back is logged and ignored.
    ///
    /// # Errors
    ///
    /// - [`CacheError::Fetch`] if the fetch fails
    /// - [`CacheError::Decode`] if the freshly fetched bytes do not decode
    #[instrument(skip_all, fields(cache.key = %key))]
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T, CacheError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>, FetchError>>,
    {
        match self.store.get(key).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(record) => {
                    debug!("Cache hit");
                    return Ok(record);
                }
                Err(e) => warn!(error = %e, "Cached entry does not decode, refetching"),
            },
            Ok(None) => debug!("Cache miss"),
            Err(e) => warn!(error = %e, "Cache read failed, refetching"),
        }

        let bytes = fetch().await?;

        if let Err(e) = self.store.put(key, &bytes).await {
            warn!(error = %e, "Failed to write cache entry");
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
