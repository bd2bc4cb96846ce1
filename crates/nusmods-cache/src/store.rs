//! Byte store abstraction.
//!
//! Stores map string keys to opaque bytes. Implementations can be swapped
//! without touching the cache logic.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use tokio::sync::RwLock;

/// Boxed future returned by [`ByteStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Abstract trait for key→bytes storage backends.
pub trait ByteStore: Send + Sync {
    /// Read the bytes stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` if nothing is stored under the key.
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn put<'a>(&'a self, key: &'a str, bytes: &'a [u8]) -> StoreFuture<'a, ()>;
}

/// Error type for byte store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Process-local store.
///
/// Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryByteStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryByteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl ByteStore for MemoryByteStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>> {
        Box::pin(async move { Ok(self.entries.read().await.get(key).cloned()) })
    }

    fn put<'a>(&'a self, key: &'a str, bytes: &'a [u8]) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.entries
                .write()
                .await
                .insert(key.to_string(), bytes.to_vec());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_get_put() {
        let store = MemoryByteStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.put("list-2025-2026", b"[]").await.unwrap();
        assert_eq!(store.get("list-2025-2026").await.unwrap(), Some(b"[]".to_vec()));

        store.put("list-2025-2026", b"[1]").await.unwrap();
        assert_eq!(store.get("list-2025-2026").await.unwrap(), Some(b"[1]".to_vec()));
        assert_eq!(store.len().await, 1);
    }
}
