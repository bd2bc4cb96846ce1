//! HTTP fetcher for the NUSMods API.

use nusmods_cache::{FetchError, FetchFuture, Fetcher};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = concat!("nusmods-sync/", env!("CARGO_PKG_VERSION"));

/// Fetches resource bodies relative to an API root.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher for `base_url` with a per-request timeout.
    ///
    /// `base_url` should end with `/`; otherwise its last segment is replaced
    /// when resource paths are joined onto it.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[instrument(skip(self), fields(http.method = "GET"))]
    async fn get(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| FetchError::InvalidPath(format!("{path}: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Remote returned non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!(bytes = body.len(), "Fetched resource");

        Ok(body.to_vec())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, path: &'a str) -> FetchFuture<'a> {
        Box::pin(self.get(path))
    }
}
