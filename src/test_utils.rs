//! Shared test utilities for gifscrub
//!
//! Fixtures for building animations, GIF files and apps in tests.

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use image::codecs::gif::GifEncoder;
    use image::{Frame, Rgba, RgbaImage};
    use tempfile::TempDir;

    use crate::animation::loader::LoadResult;
    use crate::animation::{AnimationHandle, AnimationLoader};
    use crate::app::App;
    use crate::config::Config;
    use crate::scrubber::ScrollScrubber;
    use crate::surface::Surface;

    /// In-memory animation whose frame `i` is a solid color with red = `i`
    pub struct FakeAnimation {
        frames: usize,
        width: u32,
        height: u32,
    }

    impl FakeAnimation {
        pub fn new(frames: usize) -> Self {
            Self {
                frames,
                width: 4,
                height: 2,
            }
        }

        pub fn with_size(mut self, width: u32, height: u32) -> Self {
            self.width = width;
            self.height = height;
            self
        }
    }

    /// Color painted by [`FakeAnimation`] for a frame index
    pub fn fake_frame_color(index: usize) -> Rgba<u8> {
        Rgba([(index % 256) as u8, 0, 0, 255])
    }

    impl AnimationHandle for FakeAnimation {
        fn frame_count(&self) -> usize {
            self.frames
        }

        fn native_width(&self) -> u32 {
            self.width
        }

        fn native_height(&self) -> u32 {
            self.height
        }

        fn render_frame(&self, index: usize, target: &mut Surface, x: u32, y: u32) {
            if index < self.frames {
                let image = RgbaImage::from_pixel(self.width, self.height, fake_frame_color(index));
                target.draw_image(&image, x, y);
            }
        }
    }

    /// Frames of distinct solid colors
    pub fn solid_frames(width: u32, height: u32, count: usize) -> Vec<RgbaImage> {
        (0..count)
            .map(|i| {
                let shade = (i * 255 / count.max(1)) as u8;
                RgbaImage::from_pixel(width, height, Rgba([shade, 255 - shade, 64, 255]))
            })
            .collect()
    }

    /// Encode frames as an animated GIF
    pub fn encode_gif(frames: &[RgbaImage]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder
                .encode_frames(frames.iter().cloned().map(Frame::new))
                .unwrap();
        }
        bytes
    }

    /// Write an animated GIF into a fresh temp directory
    pub fn write_temp_gif(width: u32, height: u32, frames: usize) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("anim.gif");
        std::fs::write(&path, encode_gif(&solid_frames(width, height, frames))).unwrap();
        (temp_dir, path)
    }

    /// Poll a loader until it delivers a result
    pub fn wait_for_load(loader: &mut AnimationLoader, max_attempts: u32) -> Option<LoadResult> {
        for _ in 0..max_attempts {
            if let Some(result) = loader.poll() {
                return Some(result);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    /// Loader that hands back `handle` from its background thread
    pub fn loader_for(handle: FakeAnimation) -> AnimationLoader {
        AnimationLoader::spawn_with(move || Ok(Box::new(handle) as Box<dyn AnimationHandle>))
    }

    /// Poll a scrubber until its load completes
    pub fn wait_for_scrubber(scrubber: &mut ScrollScrubber, max_attempts: u32) {
        for _ in 0..max_attempts {
            if scrubber.poll_load().is_some() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("scrubber did not finish loading");
    }

    /// Scrubber armed with a [`FakeAnimation`] of `frames` frames
    pub fn ready_scrubber(frames: usize, pixels_per_frame: u32) -> ScrollScrubber {
        let mut scrubber = ScrollScrubber::new(pixels_per_frame);
        scrubber.begin_load(loader_for(FakeAnimation::new(frames)));
        wait_for_scrubber(&mut scrubber, 200);
        assert!(scrubber.is_armed());
        scrubber
    }

    /// App with default config whose scrubber is armed with `frames` frames
    pub fn test_app(frames: usize) -> App {
        let mut app = App::new(&Config::default());
        app.scrubber.begin_load(loader_for(FakeAnimation::new(frames)));
        wait_for_scrubber(&mut app.scrubber, 200);
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
