//! Text source providers.
//!
//! A `TextSource` turns a configured [`BookSource`] into its raw text. The
//! HTTP provider keeps a copy of every download in a cache directory and
//! serves later requests from disk, so a corpus is only fetched once.
//!
//! License: MIT OR Apache-2.0

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::config::BookSource;
use crate::errors::LitentropyError;

const USER_AGENT: &str = concat!("litentropy/", env!("CARGO_PKG_VERSION"));

/// Supplies the raw text of a book.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Returns the full text of `book`.
    async fn fetch(&self, book: &BookSource) -> Result<String, LitentropyError>;
}

/// Downloads books over HTTP(S), caching each one under `cache_dir`.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
    cache_dir: PathBuf,
}

impl HttpTextSource {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self::with_client(Client::new(), cache_dir)
    }

    pub fn with_client(client: Client, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    async fn download(&self, book: &BookSource) -> Result<String, LitentropyError> {
        let to_download_error = |source| LitentropyError::Download {
            name: book.name.clone(),
            source,
        };

        let resp = self
            .client
            .get(&book.url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(to_download_error)?;

        resp.text().await.map_err(to_download_error)
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, book: &BookSource) -> Result<String, LitentropyError> {
        let path = cache_path(&self.cache_dir, book);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            info!("File '{}' already exists, skipping download.", path.display());
            return read_cached(&path).await;
        }

        info!("Downloading '{}' from {}...", book.name, book.url);
        let text = self.download(book).await?;

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|source| LitentropyError::Cache {
                path: self.cache_dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, &text)
            .await
            .map_err(|source| LitentropyError::Cache {
                path: path.clone(),
                source,
            })?;

        info!("Download of '{}' complete ({} bytes).", book.name, text.len());
        Ok(text)
    }
}

/// Serves books from a cache directory only; never touches the network.
#[derive(Debug, Clone)]
pub struct CachedTextSource {
    cache_dir: PathBuf,
}

impl CachedTextSource {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }
}

#[async_trait]
impl TextSource for CachedTextSource {
    fn name(&self) -> &str {
        "cache"
    }

    async fn fetch(&self, book: &BookSource) -> Result<String, LitentropyError> {
        read_cached(&cache_path(&self.cache_dir, book)).await
    }
}

/// Location of the cached copy of `book`.
pub fn cache_path(cache_dir: &Path, book: &BookSource) -> PathBuf {
    cache_dir.join(&book.filename)
}

async fn read_cached(path: &Path) -> Result<String, LitentropyError> {
    debug!("Reading cached text from {}", path.display());
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LitentropyError::Cache {
            path: path.to_path_buf(),
            source,
        })?;
    // Project Gutenberg files are UTF-8, older mirrors occasionally are not.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
