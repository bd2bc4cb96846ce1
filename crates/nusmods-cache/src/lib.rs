//! # NUSMods Cache
//!
//! Read-through caching of remote catalog records.
//!
//! This crate provides:
//! - A [`ByteStore`] abstraction with filesystem, Redis and in-memory backends
//! - The [`Fetcher`] capability the cache falls back to on a miss
//! - [`ReadThroughCache`], which decodes cached bytes or fetches fresh ones
//! - Cache key generation and configuration from environment variables
//!
//! Cached entries never expire. Once a record is stored it is served as-is
//! until the entry is removed from the store by hand, even if the upstream
//! catalog has since changed.
//!
//! # Example
//!
//! ```ignore
//! use nusmods_cache::{CacheConfig, ReadThroughCache, keys};
//!
//! let config = CacheConfig::from_env();
//! let cache = ReadThroughCache::new(config.open_store().await?);
//!
//! let modules: Vec<ModuleListItem> = cache
//!     .get_or_fetch(&keys::module_list("2025-2026"), || fetcher.fetch("2025-2026/moduleList.json"))
//!     .await?;
//! ```

pub mod config;
pub mod fetch;
pub mod keys;
pub mod local;
pub mod read_through;
pub mod redis;
pub mod store;

pub use config::{CacheBackend, CacheConfig};
pub use fetch::{FetchError, FetchFuture, Fetcher};
pub use local::LocalByteStore;
pub use read_through::{CacheError, ReadThroughCache};
pub use redis::RedisByteStore;
pub use store::{ByteStore, MemoryByteStore, StoreError, StoreFuture};
