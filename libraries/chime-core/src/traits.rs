/// Core traits for Chime
use crate::error::Result;
use std::time::Duration;

/// Audio player capability
///
/// Abstracts the platform audio player a screen owns (device player,
/// software mixer, test double). Chime never decodes or renders audio
/// itself; it only drives playback state and volume through this trait.
///
/// Implementations are expected to be cheap to call: every method is
/// invoked from timer ticks on the playback runtime.
pub trait AudioPlayer: Send {
    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the underlying audio session rejects the call
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position
    ///
    /// # Errors
    /// Returns an error if the underlying audio session rejects the call
    fn pause(&mut self) -> Result<()>;

    /// Seek to a position from the start of the loaded source
    ///
    /// # Errors
    /// Returns an error if the position is out of range or the source
    /// does not support seeking
    fn seek_to(&mut self, position: Duration) -> Result<()>;

    /// Set the playback volume (0.0 = silent, 1.0 = full volume)
    ///
    /// Implementations must clamp out-of-range values to [0.0, 1.0].
    ///
    /// # Errors
    /// Returns an error if the underlying audio session rejects the call
    fn set_volume(&mut self, volume: f32) -> Result<()>;

    /// Get the current playback volume
    fn volume(&self) -> f32;

    /// Enable or disable looping of the loaded source
    fn set_looping(&mut self, looping: bool);

    /// Whether the loaded source loops
    fn is_looping(&self) -> bool;
}
