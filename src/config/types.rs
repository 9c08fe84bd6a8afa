// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::scrubber::DEFAULT_PIXELS_PER_FRAME;

fn default_pixels_per_frame() -> u32 {
    DEFAULT_PIXELS_PER_FRAME
}

fn default_scroll_step() -> u32 {
    DEFAULT_PIXELS_PER_FRAME
}

fn default_page_frames() -> u32 {
    10
}

/// Scroll sensitivity section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrubConfig {
    /// Scroll distance mapped to one animation frame
    #[serde(default = "default_pixels_per_frame")]
    pub pixels_per_frame: u32,
    /// Scroll distance per wheel notch or j/k press
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u32,
    /// Frames skipped by PageUp/PageDown
    #[serde(default = "default_page_frames")]
    pub page_frames: u32,
}

impl ScrubConfig {
    /// Values below 1 would collapse the page to nothing
    pub fn pixels_per_frame(&self) -> u32 {
        self.pixels_per_frame.max(1)
    }

    pub fn scroll_step(&self) -> u32 {
        self.scroll_step.max(1)
    }

    pub fn page_distance(&self) -> u32 {
        self.page_frames.max(1).saturating_mul(self.pixels_per_frame())
    }
}

impl Default for ScrubConfig {
    fn default() -> Self {
        ScrubConfig {
            pixels_per_frame: default_pixels_per_frame(),
            scroll_step: default_scroll_step(),
            page_frames: default_page_frames(),
        }
    }
}

/// Animation source section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct AnimationConfig {
    /// GIF shown when no path is given on the command line
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub scrub: ScrubConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
