use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageDecoder};

use super::handle::GifAnimation;
use crate::error::ScrubError;

// Logical screen width and height, little-endian u16s after the 6-byte signature
const SCREEN_SIZE: std::ops::Range<usize> = 6..10;

/// Decode a GIF from memory into composited frames
///
/// Native dimensions come from the logical screen descriptor; when that is
/// 0x0 the first frame's extent is used instead.
pub fn decode_gif(bytes: &[u8]) -> Result<GifAnimation, ScrubError> {
    let bytes = with_screen_size(bytes)?;
    let decoder = GifDecoder::new(Cursor::new(&*bytes))?;
    let (width, height) = decoder.dimensions();

    let frames = decoder
        .into_frames()
        .collect_frames()?
        .into_iter()
        .map(|frame| frame.into_buffer())
        .collect::<Vec<_>>();

    if frames.is_empty() {
        return Err(ScrubError::NoFrames);
    }

    #[cfg(debug_assertions)]
    log::debug!("Decoded GIF: {} frames, {}x{}", frames.len(), width, height);

    Ok(GifAnimation::new(width, height, frames))
}

/// Frames are composited onto a canvas of the logical screen size, so a 0x0
/// screen is rewritten to cover the first frame before decoding.
fn with_screen_size(bytes: &[u8]) -> Result<Cow<'_, [u8]>, ScrubError> {
    let mut header = gif::DecodeOptions::new().read_info(Cursor::new(bytes))?;
    if header.width() != 0 && header.height() != 0 {
        return Ok(Cow::Borrowed(bytes));
    }

    let (screen_width, screen_height) = (header.width(), header.height());
    let Some(frame) = header.next_frame_info()? else {
        return Ok(Cow::Borrowed(bytes));
    };
    let width = match screen_width {
        0 => frame.left.saturating_add(frame.width),
        w => w,
    };
    let height = match screen_height {
        0 => frame.top.saturating_add(frame.height),
        h => h,
    };

    #[cfg(debug_assertions)]
    log::debug!(
        "Logical screen is {}x{}, using {}x{} from the first frame",
        screen_width,
        screen_height,
        width,
        height
    );

    let mut patched = bytes.to_vec();
    if let Some(screen) = patched.get_mut(SCREEN_SIZE) {
        screen[..2].copy_from_slice(&width.to_le_bytes());
        screen[2..].copy_from_slice(&height.to_le_bytes());
    }
    Ok(Cow::Owned(patched))
}

/// Read and decode a GIF file
pub fn decode_file(path: &Path) -> Result<GifAnimation, ScrubError> {
    let bytes = fs::read(path)?;
    decode_gif(&bytes)
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod decoder_tests;
