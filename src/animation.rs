//! Animation decoding
//!
//! Wraps the GIF decoder behind [`AnimationHandle`] and runs decoding on a
//! background thread so the event loop never blocks on a large file.

mod decoder;
mod handle;
pub mod loader;

pub use decoder::{decode_file, decode_gif};
pub use handle::{AnimationHandle, GifAnimation};
pub use loader::AnimationLoader;
