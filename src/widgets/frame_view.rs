//! Half-block rendering of a pixel surface
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀` and the lower one as the background. The surface is
//! scaled with nearest-neighbour sampling to fit the area, keeping its aspect
//! ratio, and centered.

use image::Rgba;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::surface::Surface;

const UPPER_HALF_BLOCK: char = '▀';

pub struct FrameView<'a> {
    surface: &'a Surface,
}

impl<'a> FrameView<'a> {
    pub fn new(surface: &'a Surface) -> Self {
        Self { surface }
    }
}

/// Largest size with the source's aspect ratio that fits `max_width` x `max_height`
///
/// Returns None when either side is empty.
pub fn fit_size(
    src_width: u32,
    src_height: u32,
    max_width: u32,
    max_height: u32,
) -> Option<(u32, u32)> {
    if src_width == 0 || src_height == 0 || max_width == 0 || max_height == 0 {
        return None;
    }

    let scale = (f64::from(max_width) / f64::from(src_width))
        .min(f64::from(max_height) / f64::from(src_height));
    let width = ((f64::from(src_width) * scale).floor() as u32).clamp(1, max_width);
    let height = ((f64::from(src_height) * scale).floor() as u32).clamp(1, max_height);
    Some((width, height))
}

fn to_color(pixel: Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        return Color::Reset;
    }
    // Composite over black
    let blend = |c: u8| ((u16::from(c) * u16::from(a)) / 255) as u8;
    Color::Rgb(blend(r), blend(g), blend(b))
}

impl Widget for FrameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let src_width = self.surface.width();
        let src_height = self.surface.height();
        let max_width = u32::from(area.width);
        let max_height = u32::from(area.height) * 2;

        let Some((width, height)) = fit_size(src_width, src_height, max_width, max_height) else {
            return;
        };

        let x_offset = (max_width - width) / 2;
        // Keep the vertical offset on a cell boundary
        let y_offset = (max_height - height) / 4;
        let rows = height.div_ceil(2);

        let sample = |tx: u32, ty: u32| -> Color {
            if ty >= height {
                return Color::Reset;
            }
            let sx = (u64::from(tx) * u64::from(src_width) / u64::from(width)) as u32;
            let sy = (u64::from(ty) * u64::from(src_height) / u64::from(height)) as u32;
            self.surface.pixel(sx, sy).map(to_color).unwrap_or(Color::Reset)
        };

        for row in 0..rows {
            for col in 0..width {
                let x = area.x + (x_offset + col) as u16;
                let y = area.y + (y_offset + row) as u16;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(UPPER_HALF_BLOCK)
                        .set_fg(sample(col, row * 2))
                        .set_bg(sample(col, row * 2 + 1));
                }
            }
        }
    }
}
