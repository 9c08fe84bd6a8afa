//! Drawing surface
//!
//! An RGBA pixel buffer that frames are painted onto. The scrubber sizes it to
//! the animation's native dimensions once decoding completes; the terminal
//! widget then samples it to fit whatever area is available.

use image::{Rgba, RgbaImage, imageops};

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Resize to the given dimensions, discarding current contents
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width() == width && self.height() == height {
            return;
        }
        self.pixels = RgbaImage::new(width, height);
    }

    /// Reset every pixel to fully transparent
    pub fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Copy `image` onto the surface with its top-left corner at (x, y).
    /// Parts falling outside the surface are clipped.
    pub fn draw_image(&mut self, image: &RgbaImage, x: u32, y: u32) {
        imageops::replace(&mut self.pixels, image, i64::from(x), i64::from(y));
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
