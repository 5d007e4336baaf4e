//! Download module containing download-related types.
//!
//! - [`download`] - The [`Download`] struct and file name derivation
//! - [`summary`] - Per-task result tracking
//! - [`report`] - Ordered summaries and the aggregate count of a batch
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::download::{Download, Status, Summary};
//! use std::path::PathBuf;
//!
//! let download = Download::from("https://example.com/static/app.js");
//! let summary = Summary::new(download, PathBuf::from("js/app.js"));
//!
//! match summary.status() {
//!     Status::Success => println!("Downloaded"),
//!     Status::Fail(msg) => println!("Failed: {}", msg),
//!     Status::Skipped(reason) => println!("Skipped: {}", reason),
//!     Status::NotStarted => println!("Not started"),
//! }
//! ```

pub mod download;
pub mod report;
pub mod summary;

pub use download::{derive_filename, Download};
pub use report::Report;
pub use summary::{Phase, Status, Summary};
