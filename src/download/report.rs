//! Aggregate result of a batch.

use super::summary::{Status, Summary};

/// Outcome of one [`Downloader::download`](crate::Downloader::download) call.
///
/// Summaries appear in the same order as the downloads that were requested.
#[derive(Debug, Clone, Default)]
pub struct Report {
    summaries: Vec<Summary>,
    downloaded: usize,
}

impl Report {
    /// Create a new [`Report`].
    pub fn new(summaries: Vec<Summary>, downloaded: usize) -> Self {
        Self {
            summaries,
            downloaded,
        }
    }

    /// Number of newly written files.
    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    /// Number of downloads skipped because their file already existed or
    /// their name was claimed by another URL.
    pub fn skipped(&self) -> usize {
        self.summaries
            .iter()
            .filter(|s| matches!(s.status(), Status::Skipped(_)))
            .count()
    }

    /// Number of failed downloads.
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Iterate over the failed downloads.
    pub fn failures(&self) -> impl Iterator<Item = &Summary> {
        self.summaries
            .iter()
            .filter(|s| matches!(s.status(), Status::Fail(_)))
    }

    /// Per-download summaries, in request order.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Consume the report and return its summaries.
    pub fn into_summaries(self) -> Vec<Summary> {
        self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
