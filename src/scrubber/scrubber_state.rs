use std::path::PathBuf;

use super::frame_index::{frame_index, scrollable_extent};
use crate::animation::{AnimationHandle, AnimationLoader};
use crate::error::ScrubError;
use crate::scroll::ScrollState;
use crate::surface::Surface;

/// Lifecycle of the scrubber: `Unloaded -> Loading -> Ready | Failed`
#[derive(Debug, Clone, PartialEq)]
pub enum ScrubberPhase {
    Unloaded,
    Loading,
    Ready,
    Failed(ScrubError),
}

/// Binds the page scroll position to an animation frame
///
/// Scroll input is ignored until the animation has decoded with at least one
/// frame. Frame changes are not drawn immediately; they are queued and painted
/// by [`ScrollScrubber::refresh`] on the next display refresh.
pub struct ScrollScrubber {
    phase: ScrubberPhase,
    loader: Option<AnimationLoader>,
    animation: Option<Box<dyn AnimationHandle>>,
    surface: Surface,
    scroll: ScrollState,
    pixels_per_frame: u32,
    pending_frame: Option<usize>,
    current_frame: Option<usize>,
}

impl ScrollScrubber {
    pub fn new(pixels_per_frame: u32) -> Self {
        Self {
            phase: ScrubberPhase::Unloaded,
            loader: None,
            animation: None,
            surface: Surface::default(),
            scroll: ScrollState::new(),
            pixels_per_frame: pixels_per_frame.max(1),
            pending_frame: None,
            current_frame: None,
        }
    }

    /// Start decoding the GIF at `path` in the background
    pub fn load(&mut self, path: PathBuf) {
        self.begin_load(AnimationLoader::spawn_load(path));
    }

    /// Start loading with an already spawned loader
    ///
    /// Loading is one-shot: calls after the first are ignored.
    pub fn begin_load(&mut self, loader: AnimationLoader) {
        if self.phase != ScrubberPhase::Unloaded {
            #[cfg(debug_assertions)]
            log::debug!("Ignoring load request in phase {:?}", self.phase);
            return;
        }
        self.loader = Some(loader);
        self.phase = ScrubberPhase::Loading;
    }

    /// Check whether decoding has finished (non-blocking)
    ///
    /// Returns the outcome exactly once, when the phase leaves `Loading`.
    pub fn poll_load(&mut self) -> Option<Result<(), ScrubError>> {
        let result = self.loader.as_mut()?.poll()?;
        self.loader = None;

        match result.and_then(require_frames) {
            Ok(animation) => {
                self.arm(animation);
                Some(Ok(()))
            }
            Err(e) => {
                log::error!("Failed to load animation: {}", e);
                self.phase = ScrubberPhase::Failed(e.clone());
                Some(Err(e))
            }
        }
    }

    fn arm(&mut self, animation: Box<dyn AnimationHandle>) {
        let frame_count = animation.frame_count();
        self.surface
            .resize(animation.native_width(), animation.native_height());
        self.surface.clear();
        self.scroll.update_bounds(
            scrollable_extent(frame_count, self.pixels_per_frame),
            self.scroll.viewport_height,
        );

        #[cfg(debug_assertions)]
        log::debug!(
            "Scrubber armed: {} frames, {}x{}, extent {}",
            frame_count,
            animation.native_width(),
            animation.native_height(),
            self.scroll.content_height
        );

        self.animation = Some(animation);
        self.phase = ScrubberPhase::Ready;

        // First frame is shown before any scrolling happens
        self.on_scroll();
    }

    /// Recompute the frame for the current scroll offset and queue it for drawing
    pub fn on_scroll(&mut self) {
        if self.phase != ScrubberPhase::Ready {
            return;
        }
        let Some(animation) = &self.animation else {
            return;
        };

        let index = frame_index(
            i64::from(self.scroll.offset),
            i64::from(self.scroll.max_offset),
            animation.frame_count(),
        );
        self.pending_frame = Some(index);
    }

    pub fn scroll_down(&mut self, amount: u32) {
        if self.is_armed() {
            self.scroll.scroll_down(amount);
            self.on_scroll();
        }
    }

    pub fn scroll_up(&mut self, amount: u32) {
        if self.is_armed() {
            self.scroll.scroll_up(amount);
            self.on_scroll();
        }
    }

    pub fn jump_to_top(&mut self) {
        if self.is_armed() {
            self.scroll.jump_to_top();
            self.on_scroll();
        }
    }

    pub fn jump_to_bottom(&mut self) {
        if self.is_armed() {
            self.scroll.jump_to_bottom();
            self.on_scroll();
        }
    }

    /// Track the visible page height; the frame is recomputed when armed
    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.scroll.viewport_height == viewport_height {
            return;
        }
        self.scroll.set_viewport_height(viewport_height);
        self.on_scroll();
    }

    /// Display refresh: paint the queued frame onto the surface
    ///
    /// Returns the frame drawn, if any was queued.
    pub fn refresh(&mut self) -> Option<usize> {
        let index = self.pending_frame.take()?;
        let animation = self.animation.as_ref()?;

        animation.render_frame(index, &mut self.surface, 0, 0);
        self.current_frame = Some(index);
        Some(index)
    }

    pub fn phase(&self) -> &ScrubberPhase {
        &self.phase
    }

    pub fn is_armed(&self) -> bool {
        self.phase == ScrubberPhase::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ScrubberPhase::Loading
    }

    pub fn error(&self) -> Option<&ScrubError> {
        match &self.phase {
            ScrubberPhase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn has_pending_render(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn pending_frame(&self) -> Option<usize> {
        self.pending_frame
    }

    pub fn current_frame(&self) -> Option<usize> {
        self.current_frame
    }

    pub fn frame_count(&self) -> Option<usize> {
        self.animation.as_ref().map(|a| a.frame_count())
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn pixels_per_frame(&self) -> u32 {
        self.pixels_per_frame
    }
}

fn require_frames(
    animation: Box<dyn AnimationHandle>,
) -> Result<Box<dyn AnimationHandle>, ScrubError> {
    if animation.frame_count() == 0 {
        return Err(ScrubError::NoFrames);
    }
    Ok(animation)
}

#[cfg(test)]
#[path = "scrubber_state_tests.rs"]
mod scrubber_state_tests;
