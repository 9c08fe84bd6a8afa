use std::path::{Path, PathBuf};

use crate::config::{Config, ScrubConfig};
use crate::notification::NotificationState;
use crate::scrubber::ScrollScrubber;

pub struct App {
    pub scrubber: ScrollScrubber,
    pub notification: NotificationState,
    pub scrub_config: ScrubConfig,
    pub source: Option<PathBuf>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            scrubber: ScrollScrubber::new(config.scrub.pixels_per_frame()),
            notification: NotificationState::new(),
            scrub_config: config.scrub.clone(),
            source: None,
            should_quit: false,
            needs_render: true,
        }
    }

    /// Start decoding the animation the scrubber is bound to
    pub fn load(&mut self, path: PathBuf) {
        self.source = Some(path.clone());
        self.scrubber.load(path);
        self.mark_dirty();
    }

    /// Pick up the decode result once it is ready
    ///
    /// Failures are shown as a permanent error notification; the scrubber
    /// has already logged them.
    pub fn poll_loader(&mut self) {
        match self.scrubber.poll_load() {
            Some(Ok(())) => {
                if let Some(count) = self.scrubber.frame_count() {
                    self.notification.show(&format!("Loaded {} frames", count));
                }
                self.mark_dirty();
            }
            Some(Err(e)) => {
                self.notification
                    .show_error(&format!("Failed to load animation: {}", e));
                self.mark_dirty();
            }
            None => {}
        }
    }

    pub fn source_name(&self) -> Option<String> {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// A draw is needed for state changes, queued frames, the loading
    /// indicator and notification expiry.
    pub fn should_render(&self) -> bool {
        self.needs_render
            || self.scrubber.has_pending_render()
            || self.scrubber.is_loading()
            || self.notification.is_visible()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
