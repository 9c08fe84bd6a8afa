//! Vertical scrollbar for the animation pane

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right border of the given area
///
/// Only drawn when the content exceeds the viewport. `viewport_size` of 0
/// counts as a single unit so a zero-height page still gets a thumb.
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total: usize,
    viewport_size: usize,
    scroll_offset: usize,
) {
    let viewport_size = viewport_size.max(1);
    if total <= viewport_size || area.height == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);

    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // Passing max_scroll + 1 lets the thumb reach the bottom at max scroll.
    let max_scroll = total.saturating_sub(viewport_size);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_offset.min(max_scroll))
        .viewport_content_length(viewport_size);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
