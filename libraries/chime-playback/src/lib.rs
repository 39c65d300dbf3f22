//! Chime - Fade Management
//!
//! Screen-scoped background music fades for Chime.
//!
//! This crate provides:
//! - Linear volume fades (timer-driven, 500 ms / 20 steps by default)
//! - At-most-one-active-ramp preemption (rapid focus changes never
//!   interleave two fades)
//! - One-shot completion continuations for sequencing after a fade-out
//! - A screen focus subscription surface with cleanup hooks
//! - Screen bindings: faded background music plus un-faded one-shot
//!   effect players
//!
//! # Architecture
//!
//! `chime-playback` is platform-agnostic: the audio player a screen owns
//! is provided via the [`AudioPlayer`] trait from `chime-core`, and
//! focus detection is fed in through [`FocusEvents`] rather than coming
//! from any particular UI toolkit. Fade ticks run on the tokio runtime;
//! the ramp math itself ([`FadeRamp`]) is pure and synchronous.
//!
//! # Example: ramp math
//!
//! ```rust
//! use chime_playback::{FadeRamp, FadeSettings};
//! use std::time::Duration;
//!
//! let settings = FadeSettings::default();
//! assert_eq!(settings.interval(), Duration::from_millis(25));
//!
//! let mut ramp = FadeRamp::fade_in(settings.steps);
//! let first = ramp.advance();
//! assert!((first - 0.05).abs() < 0.001);
//! ```
//!
//! # Example: fading a screen's background music
//!
//! ```rust,no_run
//! use chime_core::{AudioPlayer, Result};
//! use chime_playback::{FadeController, SharedPlayer};
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! # struct DevicePlayer;
//! # impl AudioPlayer for DevicePlayer {
//! #     fn play(&mut self) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) -> Result<()> { Ok(()) }
//! #     fn seek_to(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//! #     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//! #     fn volume(&self) -> f32 { 1.0 }
//! #     fn set_looping(&mut self, _looping: bool) {}
//! #     fn is_looping(&self) -> bool { false }
//! # }
//! #[tokio::main]
//! async fn main() {
//!     let player: SharedPlayer<DevicePlayer> = Arc::new(Mutex::new(DevicePlayer));
//!     let mut fade = FadeController::new(Arc::clone(&player));
//!
//!     // Ramp up from silence; returns immediately, ticks run async.
//!     fade.fade_in();
//!
//!     // Later: ramp down, then start the next track once silent.
//!     fade.fade_out_with(|| {
//!         // queue the next screen's music here
//!     });
//! }
//! ```

pub mod controller;
pub mod error;
pub mod events;
pub mod focus;
pub mod ramp;
pub mod screen;
pub mod types;

// Re-export commonly used types
pub use chime_core::AudioPlayer;
pub use controller::{FadeController, SharedPlayer};
pub use error::{PlaybackError, Result};
pub use events::FadeEvent;
pub use focus::{CleanupFn, FocusEvents, SubscriptionId};
pub use ramp::FadeRamp;
pub use screen::{OneShot, ScreenAudio};
pub use types::{FadePhase, FadeSettings};
