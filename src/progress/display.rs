//! Progress bar display management and coordination.
//!
//! [`ProgressDisplay`] is cloned into every download task. Clones share the
//! same bars.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager that coordinates multiple progress bars.
#[derive(Clone)]
pub struct ProgressDisplay {
    /// Coordinates the main bar and the child bars.
    multi: MultiProgress,
    /// Counts finished downloads.
    main: ProgressBar,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display for `total_downloads` tasks.
    pub fn new(style_options: StyleOptions, total_downloads: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        let main = multi.add(
            style_options
                .main()
                .to_progress_bar(Some(total_downloads as u64)),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a child progress bar for one transfer, labelled with its
    /// file name.
    pub fn create_child_progress(&self, size: Option<u64>, name: &str) -> ProgressBar {
        let pb = self
            .multi
            .add(self.style_options.child().to_progress_bar(size));
        pb.set_message(name.to_string());
        pb
    }

    /// Record one more finished download, whatever its outcome.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Drop a child bar whose transfer failed.
    pub fn abandon_child(&self, pb: ProgressBar) {
        pb.finish_and_clear();
        self.multi.remove(&pb);
    }

    /// Finish the progress display, clearing or keeping the main bar based
    /// on configuration.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Position of the main bar.
    pub fn completed(&self) -> u64 {
        self.main.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_bar_counts_completions() {
        let display = ProgressDisplay::new(StyleOptions::hidden(), 3);
        let clone = display.clone();

        display.increment_main();
        clone.increment_main();

        assert_eq!(display.completed(), 2);
        display.finish();
    }

    #[test]
    fn test_child_lifecycle() {
        let display = ProgressDisplay::new(StyleOptions::hidden(), 1);

        let pb = display.create_child_progress(Some(10), "a.js");
        pb.inc(10);
        display.finish_child(pb);

        let pb = display.create_child_progress(None, "b.js");
        display.abandon_child(pb);
    }
}
