//! Filesystem byte store.
//!
//! Stores one file per key inside a namespace directory:
//!
//! ```text
//! <base_dir>/<namespace>/<key>
//! ```
//!
//! # Example
//!
//! ```ignore
//! use nusmods_cache::{ByteStore, LocalByteStore};
//! use std::path::PathBuf;
//!
//! let store = LocalByteStore::new(PathBuf::from("./.cache"), "NUSModsCache");
//! store.put("list-2025-2026", bytes).await?;
//! let cached = store.get("list-2025-2026").await?;
//! ```

use crate::store::{ByteStore, StoreError, StoreFuture};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

/// Sequence for temp file names, unique per write within this process.
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Local filesystem-based byte store.
#[derive(Debug, Clone)]
pub struct LocalByteStore {
    /// Directory holding this namespace's entries
    dir: PathBuf,
}

impl LocalByteStore {
    /// Create a store rooted at `base_dir/namespace`.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(base_dir: impl Into<PathBuf>, namespace: &str) -> Self {
        Self {
            dir: base_dir.into().join(namespace),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate storage key format to prevent path traversal.
    fn validate_key(key: &str) -> Result<(), StoreError> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StoreError::InvalidKey(
                "Key must not be empty, contain '..', or start with '/'".to_string(),
            ));
        }

        // Keys are flat file names
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(StoreError::InvalidKey(format!(
                "Key contains invalid characters: {key}"
            )));
        }

        Ok(())
    }
}

impl ByteStore for LocalByteStore {
    fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<Vec<u8>>> {
        Box::pin(async move {
            Self::validate_key(key)?;

            match fs::read(self.dir.join(key)).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn put<'a>(&'a self, key: &'a str, bytes: &'a [u8]) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            Self::validate_key(key)?;

            fs::create_dir_all(&self.dir).await?;

            // Each writer gets its own temp file; the rename replaces the entry whole
            let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
            let tmp = self
                .dir
                .join(format!(".{key}.{}.{seq}.tmp", std::process::id()));

            let written = match fs::write(&tmp, bytes).await {
                Ok(()) => fs::rename(&tmp, self.dir.join(key)).await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                let _ = fs::remove_file(&tmp).await;
                return Err(e.into());
            }

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_cache_keys() {
        assert!(LocalByteStore::validate_key("list-2025-2026").is_ok());
        assert!(LocalByteStore::validate_key("tt-2025-2026-S1-CS1010").is_ok());
        assert!(LocalByteStore::validate_key("info-2025-2026-CS2030S").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_path_traversal() {
        assert!(LocalByteStore::validate_key("../../../etc/passwd").is_err());
        assert!(LocalByteStore::validate_key("..\\windows\\system32").is_err());
        assert!(LocalByteStore::validate_key("/etc/passwd").is_err());
        assert!(LocalByteStore::validate_key("nested/key").is_err());
        assert!(LocalByteStore::validate_key("").is_err());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalByteStore::new(tmp.path(), "NUSModsCache");

        assert_eq!(store.get("list-2025-2026").await.unwrap(), None);

        store.put("list-2025-2026", b"[]").await.unwrap();
        assert_eq!(store.get("list-2025-2026").await.unwrap(), Some(b"[]".to_vec()));
        assert!(store.dir().join("list-2025-2026").exists());
        assert_eq!(std::fs::read_dir(store.dir()).unwrap().count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_never_expose_partial_entries() {
        const LEN: usize = 1 << 20;
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalByteStore::new(tmp.path(), "NUSModsCache");

        for round in 0..5u8 {
            let mut writers = Vec::new();
            for writer in 0..8u8 {
                let store = store.clone();
                let fill = round.wrapping_mul(8).wrapping_add(writer);
                writers.push(tokio::spawn(async move {
                    store.put("k", &vec![fill; LEN]).await
                }));
            }

            let reader = {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..20 {
                        if let Some(bytes) = store.get("k").await.unwrap() {
                            assert_eq!(bytes.len(), LEN);
                            assert!(bytes.iter().all(|b| *b == bytes[0]));
                        }
                        tokio::task::yield_now().await;
                    }
                })
            };

            for writer in writers {
                writer.await.unwrap().unwrap();
            }
            reader.await.unwrap();
        }

        // Only the entry itself is left behind
        assert_eq!(std::fs::read_dir(store.dir()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let tmp = tempfile::tempdir().unwrap();
        let a = LocalByteStore::new(tmp.path(), "a");
        let b = LocalByteStore::new(tmp.path(), "b");

        a.put("key", b"1").await.unwrap();
        assert_eq!(b.get("key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_key_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalByteStore::new(tmp.path(), "ns");
        assert!(matches!(
            store.put("../escape", b"x").await,
            Err(StoreError::InvalidKey(_))
        ));
    }
}
