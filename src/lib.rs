//! gifscrub library - scroll-driven animated GIF scrubbing
//!
//! This library exposes the core functionality of gifscrub for testing purposes.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod scroll;
pub mod scrubber;
pub mod surface;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::ScrubError;
pub use scrubber::{ScrollScrubber, ScrubberPhase};
