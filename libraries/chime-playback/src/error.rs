//! Error types for fade and screen-audio management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Player capability call rejected by the underlying audio engine
    #[error("Player error: {0}")]
    Player(#[from] chime_core::CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
