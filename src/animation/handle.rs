use image::RgbaImage;

use crate::surface::Surface;

/// Read-only view of a decoded animation
///
/// The scrubber only ever queries the handle; frame data stays owned by
/// whichever decoder produced it.
pub trait AnimationHandle: Send {
    fn frame_count(&self) -> usize;

    fn native_width(&self) -> u32;

    fn native_height(&self) -> u32;

    /// Paint frame `index` onto `target` with its top-left corner at (x, y).
    /// Out-of-range indices draw nothing.
    fn render_frame(&self, index: usize, target: &mut Surface, x: u32, y: u32);
}

/// A GIF decoded into fully composited frames
///
/// Each frame is a complete canvas-sized image with disposal already applied,
/// so any frame can be drawn without replaying the ones before it.
#[derive(Debug, Clone)]
pub struct GifAnimation {
    width: u32,
    height: u32,
    frames: Vec<RgbaImage>,
}

impl GifAnimation {
    pub fn new(width: u32, height: u32, frames: Vec<RgbaImage>) -> Self {
        Self {
            width,
            height,
            frames,
        }
    }

    pub fn frame(&self, index: usize) -> Option<&RgbaImage> {
        self.frames.get(index)
    }
}

impl AnimationHandle for GifAnimation {
    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn native_width(&self) -> u32 {
        self.width
    }

    fn native_height(&self) -> u32 {
        self.height
    }

    fn render_frame(&self, index: usize, target: &mut Surface, x: u32, y: u32) {
        if let Some(frame) = self.frames.get(index) {
            target.draw_image(frame, x, y);
        }
    }
}
