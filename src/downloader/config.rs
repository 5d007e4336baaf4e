//! Configuration structures and defaults for the downloader.
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::downloader::DownloadCallback;
//! use bulkfetch::download::{Status, Summary};
//!
//! let callback: DownloadCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Success => println!("Downloaded {}", summary.download().filename),
//!         Status::Fail(msg) => println!("Failed {}: {}", summary.download().url, msg),
//!         Status::Skipped(reason) => println!("Skipped {}: {}", summary.download().filename, reason),
//!         Status::NotStarted => {}
//!     }
//! });
//! ```

use crate::download::Summary;
use crate::http::{HttpClientConfig, BROWSER_USER_AGENT};
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// What to do when several URLs of one batch derive the same file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Download the first URL claiming a name; skip the others.
    #[default]
    SkipDuplicates,
    /// Let every URL try. The first one to create the file wins, the others
    /// are skipped when they find it in place.
    Allow,
}

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: PathBuf,
    /// Maximum number of downloads in flight. `None` starts them all at once.
    pub concurrent_downloads: Option<usize>,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// Handling of duplicate file names.
    pub collisions: CollisionPolicy,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl DownloaderConfig {
    /// HTTP client settings derived from this configuration.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            user_agent: self.user_agent.clone(),
            headers: self.headers.clone(),
            proxy: self.proxy.clone(),
            timeout: self.timeout,
        }
    }
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("concurrent_downloads", &self.concurrent_downloads)
            .field("style_options", &self.style_options)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .field("collisions", &self.collisions)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            concurrent_downloads: None,
            style_options: StyleOptions::default(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            headers: None,
            proxy: None,
            timeout: None,
            collisions: CollisionPolicy::default(),
            on_complete: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, ACCEPT};

    #[test]
    fn test_defaults() {
        let config = DownloaderConfig::default();
        assert_eq!(config.concurrent_downloads, None);
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
        assert_eq!(config.collisions, CollisionPolicy::SkipDuplicates);
        assert!(config.on_complete.is_none());
    }

    #[test]
    fn test_http_client_config_follows_downloader_config() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        let config = DownloaderConfig {
            user_agent: "agent/1.0".to_string(),
            headers: Some(headers),
            timeout: Some(Duration::from_secs(3)),
            ..DownloaderConfig::default()
        };

        let http = config.http_client_config();
        assert_eq!(http.user_agent, "agent/1.0");
        assert_eq!(http.timeout, Some(Duration::from_secs(3)));
        assert!(http.headers.unwrap().contains_key(ACCEPT));
    }

    #[test]
    fn test_debug_hides_callback() {
        let config = DownloaderConfig {
            on_complete: Some(Arc::new(Box::new(|_: &Summary| {}))),
            ..DownloaderConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("on_complete: true"));
    }
}
