//! Saved-page fetcher for offline replay

use super::{DocumentFetcher, FetchError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a previously saved copy of the page from disk
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentFetcher for FileFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!(path = %self.path.display(), "Reading saved fair value page");

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::File {
                path: self.path.display().to_string(),
                source,
            })
    }
}
