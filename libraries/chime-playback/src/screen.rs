//! Screen audio binding
//!
//! Wires one screen's players into the focus lifecycle: background
//! music fades in on focus and out on blur, while secondary one-shot
//! players (stingers, effect tracks) are paused directly - no fade is
//! applied to one-shot sounds.

use crate::{
    controller::{FadeController, SharedPlayer},
    error::Result,
    focus::{FocusEvents, SubscriptionId},
    types::FadeSettings,
};
use chime_core::AudioPlayer;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

/// Trigger handle for a secondary one-shot player
///
/// One-shots restart from the top on every trigger and are stopped
/// without a fade. Clones share the same underlying player.
pub struct OneShot<P: AudioPlayer> {
    player: SharedPlayer<P>,
}

impl<P: AudioPlayer> Clone for OneShot<P> {
    fn clone(&self) -> Self {
        Self {
            player: Arc::clone(&self.player),
        }
    }
}

impl<P: AudioPlayer> OneShot<P> {
    /// Wrap a player as a one-shot trigger
    pub fn new(player: SharedPlayer<P>) -> Self {
        Self { player }
    }

    /// Rewind to the start and play
    ///
    /// Failures are logged and returned so UI glue can still reflect an
    /// attempted transition without crashing.
    pub fn trigger(&self) -> Result<()> {
        let outcome = {
            let mut player = self.player.lock().unwrap();
            player.seek_to(Duration::ZERO).and_then(|()| player.play())
        };
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to trigger one-shot sound: {}", err);
                Err(err.into())
            }
        }
    }

    /// Pause playback immediately, keeping the position
    pub fn stop(&self) {
        if let Err(err) = self.player.lock().unwrap().pause() {
            warn!("Failed to stop one-shot sound: {}", err);
        }
    }
}

/// Audio for one screen: faded background music plus one-shot players
pub struct ScreenAudio<P: AudioPlayer> {
    label: String,
    bgm: SharedPlayer<P>,
    fade: FadeController<P>,
    one_shots: Vec<OneShot<P>>,
}

impl<P: AudioPlayer + 'static> ScreenAudio<P> {
    /// Create a screen binding with default fade settings
    pub fn new(label: impl Into<String>, bgm: SharedPlayer<P>) -> Self {
        Self::with_settings(label, bgm, FadeSettings::default())
    }

    /// Create a screen binding with specific fade settings
    pub fn with_settings(
        label: impl Into<String>,
        bgm: SharedPlayer<P>,
        settings: FadeSettings,
    ) -> Self {
        let fade = FadeController::with_settings(Arc::clone(&bgm), settings);
        Self {
            label: label.into(),
            bgm,
            fade,
            one_shots: Vec::new(),
        }
    }

    /// The screen label used in logs
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The background music fade controller
    pub fn fade(&self) -> &FadeController<P> {
        &self.fade
    }

    /// Mutable access to the fade controller, e.g. to sequence work
    /// after a fade-out via `fade_out_with`
    pub fn fade_mut(&mut self) -> &mut FadeController<P> {
        &mut self.fade
    }

    /// Register a secondary player that is paused directly on blur
    ///
    /// Returns a cloneable trigger handle for the caller to keep.
    pub fn add_one_shot(&mut self, player: SharedPlayer<P>) -> OneShot<P> {
        let one_shot = OneShot::new(player);
        self.one_shots.push(one_shot.clone());
        one_shot
    }

    /// Screen gained focus: rewind, loop, fade the background music in
    pub fn on_visible(&mut self) {
        debug!("{} screen focused, fading background music in", self.label);
        {
            let mut bgm = self.bgm.lock().unwrap();
            if let Err(err) = bgm.seek_to(Duration::ZERO) {
                warn!("Failed to rewind background music: {}", err);
            }
            bgm.set_looping(true);
        }
        self.fade.fade_in();
    }

    /// Screen lost focus: fade the background music out and pause every
    /// one-shot player without a fade
    pub fn on_hidden(&mut self) {
        debug!("{} screen blurred, fading background music out", self.label);
        self.fade.fade_out();
        for one_shot in &self.one_shots {
            one_shot.stop();
        }
    }

    /// Wire this screen into a focus event source
    ///
    /// The visibility handler calls `on_visible` and returns a cleanup
    /// hook that calls `on_hidden` on blur.
    pub fn attach(screen: Arc<Mutex<Self>>, focus: &mut FocusEvents) -> SubscriptionId {
        focus.on_became_visible(move || {
            screen.lock().unwrap().on_visible();
            let screen = Arc::clone(&screen);
            Some(Box::new(move || {
                screen.lock().unwrap().on_hidden();
            }))
        })
    }
}
