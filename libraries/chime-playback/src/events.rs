//! Fade events
//!
//! Event-based communication for UI synchronization. Events accumulate
//! on the controller and are drained with
//! [`take_events`](crate::controller::FadeController::take_events).

use crate::types::FadePhase;
use serde::{Deserialize, Serialize};

/// Events emitted by the fade controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FadeEvent {
    /// A fade-in was scheduled; playback started at volume 0.0
    FadeInStarted,

    /// A fade-out was scheduled
    FadeOutStarted,

    /// A fade-in ran to completion; the player is at full volume
    FadeInCompleted,

    /// A fade-out ran to completion; the player is paused and silent
    FadeOutCompleted,

    /// An in-flight fade was cancelled before completion, either by a
    /// newer fade request or by an explicit cancel
    FadeCancelled {
        /// The phase that was interrupted
        phase: FadePhase,
    },
}
