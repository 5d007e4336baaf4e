//! Download summary functionality.
//!
//! This module contains the [`Summary`] struct, the terminal [`Status`] of a
//! download task and the [`Phase`] it reached.
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::download::{Download, Phase, Status, Summary};
//! use std::path::PathBuf;
//!
//! let download = Download::from("http://host/a.js");
//! let summary = Summary::new(download, PathBuf::from("out/a.js"))
//!     .enter(Phase::Fetching)
//!     .fail("connection refused");
//!
//! assert_eq!(summary.phase(), Phase::Fetching);
//! assert!(matches!(summary.status(), Status::Fail(_)));
//! ```

use super::download::Download;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download was skipped with reason
    Skipped(String),
    /// Download completed successfully
    Success,
}

/// Position of a task in its lifecycle.
///
/// `Pending → {Skipped | Fetching → {Failed | Writing → {Failed | Succeeded}}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet talking to the network.
    Pending,
    /// Request sent or being built.
    Fetching,
    /// Destination file created, body being streamed.
    Writing,
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// Where the file is written.
    destination: PathBuf,
    /// HTTP status code, once a response was received.
    statuscode: Option<StatusCode>,
    /// Bytes written to disk.
    size: u64,
    /// Status.
    status: Status,
    /// Last phase reached.
    phase: Phase,
}

impl Summary {
    /// Create a new [`Download`] [`Summary`].
    pub fn new(download: Download, destination: PathBuf) -> Self {
        Self {
            download,
            destination,
            statuscode: None,
            size: 0,
            status: Status::NotStarted,
            phase: Phase::Pending,
        }
    }

    /// Record the HTTP status code of the response.
    pub fn with_statuscode(self, statuscode: StatusCode) -> Self {
        Self {
            statuscode: Some(statuscode),
            ..self
        }
    }

    /// Move the summary to another phase.
    pub fn enter(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }

    /// Get the summary's HTTP status code.
    pub fn statuscode(&self) -> Option<StatusCode> {
        self.statuscode
    }

    /// Get the number of bytes written.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the destination path.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Get the last phase reached.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether this download wrote a new file.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Mark the summary as successful after writing `size` bytes.
    pub fn succeed(self, size: u64) -> Self {
        Self {
            size,
            status: Status::Success,
            ..self
        }
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }
}
