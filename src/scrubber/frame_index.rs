//! Scroll position to frame index mapping

/// Fraction of the page scrolled, in `[0, 1]`
///
/// A non-positive `max_offset` means there is nothing to scroll, which maps
/// to 0 rather than dividing by zero.
pub fn scroll_fraction(offset: i64, max_offset: i64) -> f64 {
    if max_offset <= 0 {
        return 0.0;
    }
    (offset as f64 / max_offset as f64).clamp(0.0, 1.0)
}

/// Frame to show for a scroll offset, always within `[0, frame_count - 1]`
pub fn frame_index(offset: i64, max_offset: i64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let scaled = (scroll_fraction(offset, max_offset) * frame_count as f64).floor();
    (scaled as usize).min(frame_count - 1)
}

/// Total page height needed so one full scroll covers every frame once
pub fn scrollable_extent(frame_count: usize, pixels_per_frame: u32) -> u32 {
    let frames = u32::try_from(frame_count).unwrap_or(u32::MAX);
    frames.saturating_mul(pixels_per_frame)
}

#[cfg(test)]
#[path = "frame_index_tests.rs"]
mod frame_index_tests;
