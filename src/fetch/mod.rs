//! Document fetch module
//!
//! Retrieves the raw fair value decomposition page

mod file;
mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Errors retrieving the upstream document
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with something other than 200 OK
    #[error("Unable to retrieve data: upstream returned HTTP {0}")]
    Status(u16),
    /// Request could not be completed (DNS, connect, timeout, body read)
    #[error("Unable to retrieve data: {0}")]
    Transport(#[from] reqwest::Error),
    /// Saved copy of the page could not be read
    #[error("Unable to read saved page {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for document sources
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the page body; exactly one attempt
    async fn fetch(&self) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: DocumentFetcher + ?Sized> DocumentFetcher for Box<T> {
    async fn fetch(&self) -> Result<String, FetchError> {
        (**self).fetch().await
    }
}

/// Saved page when `from_file` is given, otherwise the configured URL
pub fn fetcher_for(
    source: &crate::config::SourceConfig,
    from_file: Option<&std::path::Path>,
) -> Result<Box<dyn DocumentFetcher>, FetchError> {
    let fetcher: Box<dyn DocumentFetcher> = match from_file {
        Some(path) => Box::new(FileFetcher::new(path)),
        None => Box::new(HttpFetcher::new(source)?),
    };
    Ok(fetcher)
}
