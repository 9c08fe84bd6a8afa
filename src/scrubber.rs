//! Scroll-driven frame selection
//!
//! [`ScrollScrubber`] owns the decoded animation and the drawing surface and
//! turns page scroll offsets into frame indices.

pub mod frame_index;
mod scrubber_state;

use serde::Serialize;

use crate::animation::AnimationHandle;

pub use frame_index::{frame_index, scroll_fraction, scrollable_extent};
pub use scrubber_state::{ScrollScrubber, ScrubberPhase};

/// Scroll distance per frame when nothing else is configured
pub const DEFAULT_PIXELS_PER_FRAME: u32 = 20;

/// Summary of a decoded animation and the page extent it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationInfo {
    pub frame_count: usize,
    pub width: u32,
    pub height: u32,
    pub scroll_extent: u32,
}

impl AnimationInfo {
    pub fn from_handle(handle: &dyn AnimationHandle, pixels_per_frame: u32) -> Self {
        Self {
            frame_count: handle.frame_count(),
            width: handle.native_width(),
            height: handle.native_height(),
            scroll_extent: scrollable_extent(handle.frame_count(), pixels_per_frame),
        }
    }
}
