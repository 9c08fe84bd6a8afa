use thiserror::Error;

/// Every variant is a decode failure from the scrubber's point of view: the
/// animation never becomes available and scrubbing is never armed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrubError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Could not decode animation: {0}")]
    Decode(String),

    #[error("Animation contains no frames")]
    NoFrames,
}

impl From<std::io::Error> for ScrubError {
    fn from(e: std::io::Error) -> Self {
        ScrubError::Io(e.to_string())
    }
}

impl From<image::ImageError> for ScrubError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => ScrubError::Io(io.to_string()),
            other => ScrubError::Decode(other.to_string()),
        }
    }
}

impl From<gif::DecodingError> for ScrubError {
    fn from(e: gif::DecodingError) -> Self {
        match e {
            gif::DecodingError::Io(io) => ScrubError::Io(io.to_string()),
            other => ScrubError::Decode(other.to_string()),
        }
    }
}
