use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner reporting which pipeline stage is running.
pub struct ProgressTracker {
    pb: ProgressBar,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap(),
        );

        Self {
            pb,
            start_time: Instant::now(),
        }
    }

    pub fn start(&self, msg: &str) {
        self.pb.set_message(msg.to_string());
        self.pb.enable_steady_tick(Duration::from_millis(100));
    }

    pub fn update(&self, msg: &str) {
        self.pb.set_message(msg.to_string());
    }

    pub fn complete(&self, msg: &str) {
        self.pb.finish_with_message(format!(
            "{} in {:.2} seconds",
            msg,
            self.start_time.elapsed().as_secs_f32()
        ));
    }

    pub fn abandon(&self, msg: &str) {
        self.pb.abandon_with_message(msg.to_string());
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
