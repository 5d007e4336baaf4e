//! bulkfetch downloads a list of URLs concurrently into a directory.
//!
//! Each URL is saved under the last `/`-separated segment of its URL. Files
//! already present are skipped without any request, and a failing URL never
//! stops the others.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use bulkfetch::{directory, downloader::DownloaderBuilder, source::Source, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let urls = Source::File(PathBuf::from("url_list.txt")).read().await?;
//! let output = directory::resolve_output_dir("js")?;
//! directory::prepare_output_dir(&output).await;
//!
//! let downloader = DownloaderBuilder::new().directory(output).build();
//! let report = downloader.download_urls(&urls).await?;
//! println!("Total files downloaded: {}", report.downloaded());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`source`] - Reading the URL list from a file or standard input
//! - [`directory`] - Resolving and creating the output directory
//! - [`download`] - The `Download` struct, per-task `Summary` and batch `Report`
//! - [`downloader`] - The `Downloader` and `DownloaderBuilder` orchestrating downloads
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display management

pub mod directory;
pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod source;

pub use download::{derive_filename, Download, Phase, Report, Status, Summary};
pub use downloader::{CollisionPolicy, Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use source::Source;
