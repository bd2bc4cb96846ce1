//! Remote fetch capability.

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`Fetcher::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, FetchError>> + Send + 'a>>;

/// Something that can retrieve the raw body of a remote resource.
pub trait Fetcher: Send + Sync {
    /// Fetch the resource at `path`, relative to the fetcher's base location.
    fn fetch<'a>(&'a self, path: &'a str) -> FetchFuture<'a>;
}

/// The remote collaborator did not deliver a body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Remote returned status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid resource path: {0}")]
    InvalidPath(String),
}
