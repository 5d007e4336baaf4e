//! Progress module containing progress bar functionality.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Progress bar display management and coordination
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::downloader::DownloaderBuilder;
//! use bulkfetch::progress::StyleOptions;
//!
//! let visible = DownloaderBuilder::new()
//!     .style_options(StyleOptions::default())
//!     .build();
//!
//! // No bars at all.
//! let quiet = DownloaderBuilder::hidden().build();
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
