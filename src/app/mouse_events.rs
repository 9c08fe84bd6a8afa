//! Mouse event dispatcher
//!
//! The wheel drives the page scroll; the whole screen is one scrollable page.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => handle_scroll(app, ScrollDirection::Down),
        MouseEventKind::ScrollUp => handle_scroll(app, ScrollDirection::Up),
        _ => {}
    }
}

pub fn handle_scroll(app: &mut App, direction: ScrollDirection) {
    let step = app.scrub_config.scroll_step();
    match direction {
        ScrollDirection::Up => app.scrubber.scroll_up(step),
        ScrollDirection::Down => app.scrubber.scroll_down(step),
    }
    app.mark_dirty();
}
