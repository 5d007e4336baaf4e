//! Core downloader implementation with fetch logic.
//!
//! Every download runs on its own tokio task. The call returns once all of
//! them are finished, with one [`Summary`] per requested URL and the number
//! of files written.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bulkfetch::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./js"))
//!     .build();
//!
//! let urls = vec![
//!     "https://example.com/static/app.js".to_string(),
//!     "https://example.com/static/vendor.js".to_string(),
//! ];
//! let report = downloader.download_urls(&urls).await?;
//! println!("Total files downloaded: {}", report.downloaded());
//! for failure in report.failures() {
//!     println!("{} failed: {:?}", failure.download().url, failure.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::{CollisionPolicy, DownloaderConfig};
use super::counter::DownloadCounter;
use crate::download::{Download, Phase, Report, Summary};
use crate::error::{Error, Result};
use crate::http::create_http_client;
use crate::progress::ProgressDisplay;

use futures::future::join_all;
use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::header::HeaderMap;
use reqwest::Response;
use reqwest_middleware::ClientWithMiddleware;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::{
    fs::{self, File, OpenOptions},
    io::AsyncWriteExt,
};
use tracing::{debug, error, info, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use bulkfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: Arc<DownloaderConfig>,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the limit on downloads in flight, if any.
    pub fn concurrent_downloads(&self) -> Option<usize> {
        self.config.concurrent_downloads
    }

    /// Gets the User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.config.user_agent
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the duplicate file name policy.
    pub fn collisions(&self) -> CollisionPolicy {
        self.config.collisions
    }

    /// Path a download is written to.
    pub fn destination(&self, download: &Download) -> PathBuf {
        self.config.directory.join(&download.filename)
    }

    /// Download every URL of `urls`.
    pub async fn download_urls<S: AsRef<str>>(&self, urls: &[S]) -> Result<Report> {
        let downloads: Vec<Download> = urls.iter().map(|u| Download::new(u.as_ref())).collect();
        self.download(&downloads).await
    }

    /// Starts the downloads and waits for all of them to finish.
    ///
    /// Only a failure to build the HTTP client is returned as an error.
    /// Failures of individual downloads are reported in their summaries.
    pub async fn download(&self, downloads: &[Download]) -> Result<Report> {
        let client = create_http_client(self.config.http_client_config())?;

        let progress_display =
            ProgressDisplay::new(self.config.style_options.clone(), downloads.len());
        let counter = DownloadCounter::new();
        let limiter = self
            .config
            .concurrent_downloads
            .map(|n| Arc::new(Semaphore::new(n)));
        let claims = self.find_collisions(downloads);

        debug!(
            downloads = downloads.len(),
            limit = ?self.config.concurrent_downloads,
            "Starting downloads"
        );

        let handles: Vec<_> = downloads
            .iter()
            .cloned()
            .zip(claims)
            .map(|(download, claimed_by)| {
                let downloader = self.clone();
                let client = client.clone();
                let progress_display = progress_display.clone();
                let counter = counter.clone();
                let limiter = limiter.clone();

                tokio::spawn(async move {
                    let _permit = match limiter {
                        Some(semaphore) => semaphore.acquire_owned().await.ok(),
                        None => None,
                    };
                    downloader
                        .fetch(&client, download, claimed_by, &counter, &progress_display)
                        .await
                })
            })
            .collect();

        // Wait for every task before reading the counter.
        let results = join_all(handles).await;

        let summaries: Vec<Summary> = results
            .into_iter()
            .zip(downloads)
            .map(|(result, download)| match result {
                Ok(summary) => summary,
                Err(e) => {
                    error!(url = %download.url, "Download task failed: {}", e);
                    let summary = Summary::new(download.clone(), self.destination(download))
                        .fail(Error::Internal(format!("download task failed: {}", e)));
                    self.complete(summary, &progress_display)
                }
            })
            .collect();

        progress_display.finish();

        let report = Report::new(summaries, counter.get());
        info!(
            downloaded = report.downloaded(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Done"
        );
        Ok(report)
    }

    /// For each download, the URL that already claimed its file name in this
    /// batch, if any.
    fn find_collisions(&self, downloads: &[Download]) -> Vec<Option<String>> {
        if self.config.collisions == CollisionPolicy::Allow {
            return vec![None; downloads.len()];
        }

        let mut claimed: HashMap<&str, &str> = HashMap::new();
        downloads
            .iter()
            .map(|d| {
                if d.filename.is_empty() {
                    return None;
                }
                match claimed.get(d.filename.as_str()) {
                    Some(first) => Some(first.to_string()),
                    None => {
                        claimed.insert(&d.filename, &d.url);
                        None
                    }
                }
            })
            .collect()
    }

    /// Runs one download to a terminal state and reports it.
    async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        download: Download,
        claimed_by: Option<String>,
        counter: &DownloadCounter,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let summary = self
            .run(client, download, claimed_by, counter, progress_display)
            .await;
        self.complete(summary, progress_display)
    }

    /// Advance the main bar and call the completion callback.
    fn complete(&self, summary: Summary, progress_display: &ProgressDisplay) -> Summary {
        progress_display.increment_main();

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        summary
    }

    async fn run(
        &self,
        client: &ClientWithMiddleware,
        download: Download,
        claimed_by: Option<String>,
        counter: &DownloadCounter,
        progress_display: &ProgressDisplay,
    ) -> Summary {
        let output = self.destination(&download);
        let summary = Summary::new(download.clone(), output.clone());

        if download.filename.is_empty() {
            warn!(url = %download.url, "URL has no file name");
            return summary.fail("URL has no file name");
        }

        if let Some(first) = claimed_by {
            info!(
                "File {} is already requested by {}. Skipping {}.",
                download.filename, first, download.url
            );
            return summary.skip(format!("file name already claimed by {}", first));
        }

        // Existing files are never requested.
        match fs::try_exists(&output).await {
            Ok(true) => {
                info!(
                    "File {} already exists in the destination folder. Skipping.",
                    download.filename
                );
                return summary.skip("file already exists");
            }
            Ok(false) => (),
            Err(e) => {
                warn!("Cannot check whether {:?} exists: {}", output, e);
                return summary.fail(format!("cannot check destination: {}", e));
            }
        }

        let summary = summary.enter(Phase::Fetching);
        info!("Downloading {} to {}", download.url, download.filename);

        let url = match download.parse_url() {
            Ok(url) => url,
            Err(e) => {
                warn!(url = %download.url, "Error creating request: {}", e);
                return summary.fail(e);
            }
        };

        let res = match client.get(url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!(url = %download.url, "HTTP GET error: {}", e);
                return summary.fail(Error::from(e));
            }
        };

        let status = res.status();
        let summary = summary.with_statuscode(status);
        if !status.is_success() {
            warn!(url = %download.url, "Unexpected status code: {}", status);
            return summary.fail(format!("Unexpected status code: {}", status));
        }

        let summary = summary.enter(Phase::Writing);
        debug!("Creating destination file {:?}", &output);
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&output)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                info!(
                    "File {} appeared in the destination folder. Skipping.",
                    download.filename
                );
                return summary.skip("file created by another download");
            }
            Err(e) => {
                warn!("Error while creating {}: {}", download.filename, e);
                return summary.fail(e);
            }
        };

        let pb = progress_display.create_child_progress(res.content_length(), &download.filename);
        match write_body(res, file, &pb).await {
            Ok(size) => {
                progress_display.finish_child(pb);
                counter.increment();
                info!("Downloaded {}", download.filename);
                summary.succeed(size)
            }
            Err(e) => {
                progress_display.abandon_child(pb);
                warn!(url = %download.url, "Error while downloading: {}", e);
                remove_partial(&output).await;
                summary.fail(e)
            }
        }
    }
}

/// Stream the response body into `file` chunk by chunk.
async fn write_body(res: Response, mut file: File, pb: &ProgressBar) -> Result<u64> {
    let mut size: u64 = 0;

    debug!("Retrieving chunks...");
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        let chunk_size = chunk.len() as u64;
        file.write_all_buf(&mut chunk).await?;
        size += chunk_size;
        pb.inc(chunk_size);
    }
    file.flush().await?;

    Ok(size)
}

async fn remove_partial(output: &Path) {
    match fs::remove_file(output).await {
        Ok(()) => debug!("Removed partial file {:?}", output),
        Err(e) => error!("Cannot remove partial file {:?}: {}", output, e),
    }
}
