//! Redis byte store for caches shared between machines.
//!
//! Entries are plain string values under `<namespace>:<key>` with no expiry.

use crate::store::{ByteStore, StoreError, StoreFuture};
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, instrument};

/// Redis-backed byte store with connection pooling.
#[derive(Clone)]
pub struct RedisByteStore {
    conn: ConnectionManager,
    namespace: String,
}

impl std::fmt::Debug for RedisByteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisByteStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl RedisByteStore {
    /// Connects to Redis.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `namespace` - Prefix for every key written by this store
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Redis` if the connection fails.
    pub async fn new(redis_url: &str, namespace: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn,
            namespace: namespace.into(),
        })
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }

    #[instrument(skip(self), fields(cache.operation = "GET"))]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(self.namespaced(key)).await?;

        debug!(cache.key = %key, hit = value.is_some(), "Redis GET");

        Ok(value)
    }

    #[instrument(skip(self, bytes), fields(cache.operation = "SET", bytes = bytes.len()))]
    async fn put_bytes(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.namespaced(key), bytes).await?;

        debug!(cache.key = %key, "Redis SET");

        Ok(())
    }
}

impl ByteStore for RedisByteStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>> {
        Box::pin(self.get_bytes(key))
    }

    fn put<'a>(&'a self, key: &'a str, bytes: &'a [u8]) -> StoreFuture<'a, ()> {
        Box::pin(self.put_bytes(key, bytes))
    }
}
