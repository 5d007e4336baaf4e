//! Downloader module containing the download orchestration, its builder and
//! its configuration.
//!
//! - `downloader` - Core Downloader struct: fan-out, per-task logic, fan-in
//! - `builder` - DownloaderBuilder for flexible configuration
//! - `config` - Configuration structures and callback types
//! - `counter` - Shared count of written files
//!
//! # Examples
//!
//! ```rust,no_run
//! use bulkfetch::downloader::DownloaderBuilder;
//! use bulkfetch::download::Download;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::hidden().concurrent_downloads(16).build();
//!
//! let downloads = vec![
//!     Download::from("https://example.com/a.js"),
//!     Download::from("https://example.com/b.js"),
//! ];
//!
//! let report = downloader.download(&downloads).await?;
//! assert_eq!(report.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod counter;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{CollisionPolicy, DownloadCallback, DownloaderConfig};
pub use counter::DownloadCounter;
pub use downloader::Downloader;
