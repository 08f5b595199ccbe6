//! Progress bar display for artifact downloads

use std::io::Read;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for one artifact download
pub struct DownloadProgress {
    pb: ProgressBar,
}

impl DownloadProgress {
    /// Create a progress display; a byte bar when the total size is known,
    /// a spinner otherwise
    pub fn new(total_bytes: Option<u64>, message: String) -> Self {
        let pb = match total_bytes {
            Some(total) => {
                let style = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-");
                let pb = ProgressBar::new(total);
                pb.set_style(style);
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        pb.set_message(message);
        Self { pb }
    }

    /// Wrap a reader so progress advances as bytes are consumed
    pub fn wrap_read<R: Read>(&self, read: R) -> impl Read {
        self.pb.wrap_read(read)
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error, leaving the bar visible at its last position
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
