//! Chime Core
//!
//! Capability traits and error handling for Chime.
//!
//! This crate defines the seam between Chime's fade/lifecycle logic and
//! the platform audio player that actually renders sound:
//! - **Core Traits**: `AudioPlayer`
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! Decoding, output devices, and asset loading live on the other side of
//! the `AudioPlayer` trait and are out of scope here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::AudioPlayer;
