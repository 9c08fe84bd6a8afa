//! Animation Loader Module
//!
//! Decodes the animation in a background thread so the event loop keeps
//! running while a large GIF is being composited. The result arrives exactly
//! once over a channel and is picked up by polling.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use super::decoder::decode_file;
use super::handle::AnimationHandle;
use crate::error::ScrubError;

pub type LoadResult = Result<Box<dyn AnimationHandle>, ScrubError>;

/// Manages asynchronous animation decoding in a background thread
pub struct AnimationLoader {
    rx: Option<Receiver<LoadResult>>,
}

impl AnimationLoader {
    /// Spawn a background thread that reads and decodes a GIF file
    pub fn spawn_load(path: PathBuf) -> Self {
        Self::spawn_with(move || {
            #[cfg(debug_assertions)]
            log::debug!("Decoding animation {:?}", path);

            decode_file(&path).map(|anim| Box::new(anim) as Box<dyn AnimationHandle>)
        })
    }

    /// Spawn a background thread running an arbitrary decode step
    pub fn spawn_with<F>(decode: F) -> Self
    where
        F: FnOnce() -> LoadResult + Send + 'static,
    {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let _ = tx.send(decode());
        });

        Self { rx: Some(rx) }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while still loading and after the result has already
    /// been taken.
    pub fn poll(&mut self) -> Option<LoadResult> {
        let rx = self.rx.as_ref()?;

        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(ScrubError::Io(
                    "Animation loader thread disconnected".to_string(),
                )))
            }
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
