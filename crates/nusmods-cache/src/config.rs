//! Cache configuration.
//!
//! This module selects and configures the byte store backing the cache from
//! environment variables.

use crate::local::LocalByteStore;
use crate::redis::RedisByteStore;
use crate::store::{ByteStore, MemoryByteStore, StoreError};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Which [`ByteStore`] implementation backs the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    File,
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "fs" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            "memory" | "none" => Ok(Self::Memory),
            other => Err(format!("unknown cache backend '{other}'")),
        }
    }
}

/// Cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `CACHE_BACKEND`: `file`, `redis` or `memory` (default: `file`)
/// - `CACHE_DIR`: Base directory for the file backend (default: `./.cache`)
/// - `CACHE_NAMESPACE`: Directory name or key prefix (default: `NUSModsCache`)
/// - `REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub backend: CacheBackend,

    /// Base directory for the file backend.
    pub cache_dir: PathBuf,

    /// Namespace separating this client's entries from anything else in the store.
    pub namespace: String,

    /// Redis connection URL.
    pub redis_url: String,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised `CACHE_BACKEND` falls back to `file`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            backend: lookup("CACHE_BACKEND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.backend),
            cache_dir: lookup("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            namespace: lookup("CACHE_NAMESPACE").unwrap_or(defaults.namespace),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
        }
    }

    /// Open the configured byte store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Redis` if the Redis backend cannot connect.
    pub async fn open_store(&self) -> Result<Arc<dyn ByteStore>, StoreError> {
        let store: Arc<dyn ByteStore> = match self.backend {
            CacheBackend::File => Arc::new(LocalByteStore::new(&self.cache_dir, &self.namespace)),
            CacheBackend::Redis => {
                Arc::new(RedisByteStore::new(&self.redis_url, self.namespace.clone()).await?)
            }
            CacheBackend::Memory => Arc::new(MemoryByteStore::new()),
        };

        info!(backend = ?self.backend, namespace = %self.namespace, "Cache store opened");

        Ok(store)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::File,
            cache_dir: PathBuf::from("./.cache"),
            namespace: "NUSModsCache".into(),
            redis_url: "redis://127.0.0.1:6379".into(),
        }
    }
}
