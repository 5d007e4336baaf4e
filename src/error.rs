//! Error handling for bulkfetch.
//!
//! Only startup failures travel through [`Error`]. Failures of a single
//! download are captured in its [`Summary`](crate::download::Summary) and
//! never abort the batch.

use std::io;
use thiserror::Error;

/// Errors that can happen when using bulkfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Recorded in the summary of a download task that panicked.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Wraps standard I/O errors raised while creating, writing or removing
    /// files during a download.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Network failures, HTTP status errors and body streaming errors.
    #[error("Reqwest error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP middleware error: {source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// The URL list could not be opened or read.
    ///
    /// `origin` names the input: a file path or `<stdin>`.
    #[error("Cannot read URL list from {origin}")]
    Source {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be determined.
    #[error("Cannot determine the current working directory")]
    WorkingDirectory {
        #[source]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a bulkfetch error.
pub type Result<T> = std::result::Result<T, Error>;
