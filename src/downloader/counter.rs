use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of files written by one batch.
///
/// Each [`Downloader::download`](crate::Downloader::download) call owns a
/// fresh counter and hands clones to its tasks. Clones share the count.
#[derive(Debug, Clone, Default)]
pub struct DownloadCounter {
    count: Arc<AtomicUsize>,
}

impl DownloadCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one written file and return the new total.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
