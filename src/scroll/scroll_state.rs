/// Vertical scroll position of the virtual page the animation is bound to
///
/// `content_height` is the total scrollable extent and `viewport_height` the
/// visible part of it, both in scroll units. The offset is kept within
/// `[0, max_offset]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
    pub max_offset: u32,
    pub content_height: u32,
    pub viewport_height: u32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_height: u32, viewport_height: u32) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;

        // Content shorter than the viewport leaves nothing to scroll
        self.max_offset = content_height.saturating_sub(viewport_height);

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.update_bounds(self.content_height, viewport_height);
    }

    pub fn scroll_down(&mut self, amount: u32) {
        self.offset = self.offset.saturating_add(amount).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, amount: u32) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
