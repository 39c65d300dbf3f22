//! Fade controller - core orchestration
//!
//! Owns the fade lifecycle for one audio player: schedules the repeating
//! tick task, enforces at-most-one-active-ramp, and drives the player's
//! volume through [`FadeRamp`].

use crate::{
    events::FadeEvent,
    ramp::FadeRamp,
    types::{FadePhase, FadeSettings},
};
use chime_core::AudioPlayer;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// An audio player shared between its screen and the fade controller
///
/// The controller never owns the player's lifecycle; it only mutates
/// volume and playback state through the lock.
pub type SharedPlayer<P> = Arc<Mutex<P>>;

/// One-shot continuation invoked after a fade-out completes
type OnComplete = Box<dyn FnOnce() + Send>;

/// State shared between the controller and its tick task
struct ControllerShared {
    phase: FadePhase,
    pending_events: Vec<FadeEvent>,
}

/// Fade controller for a single audio player
///
/// `fade_in` and `fade_out` return immediately; the ramp progresses on a
/// spawned tokio task that writes one volume step per tick. Starting a
/// new fade in either direction aborts the in-flight task before the new
/// one is scheduled, so at most one timer is live per controller and
/// two fades never interleave their volume writes.
///
/// Must be used from within a tokio runtime. Fades are cooperative: each
/// tick is a bounded synchronous volume write under the player lock,
/// never held across an await.
///
/// Player call failures (device audio session errors) are logged as
/// warnings and the fade continues best-effort; neither entry point
/// fails or panics for them.
pub struct FadeController<P: AudioPlayer> {
    player: SharedPlayer<P>,
    settings: FadeSettings,
    shared: Arc<Mutex<ControllerShared>>,
    /// The single timer slot: at most one live tick task per controller
    active: Option<JoinHandle<()>>,
}

impl<P: AudioPlayer + 'static> FadeController<P> {
    /// Create a controller with default fade settings
    pub fn new(player: SharedPlayer<P>) -> Self {
        Self::with_settings(player, FadeSettings::default())
    }

    /// Create a controller with specific fade settings
    pub fn with_settings(player: SharedPlayer<P>, settings: FadeSettings) -> Self {
        Self {
            player,
            settings,
            shared: Arc::new(Mutex::new(ControllerShared {
                phase: FadePhase::Idle,
                pending_events: Vec::new(),
            })),
            active: None,
        }
    }

    /// Get the fade settings
    pub fn settings(&self) -> FadeSettings {
        self.settings
    }

    /// Current fade phase
    pub fn phase(&self) -> FadePhase {
        self.shared.lock().unwrap().phase
    }

    /// Whether a fade task is currently live
    pub fn is_fading(&self) -> bool {
        self.active.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Drain pending events in emission order
    pub fn take_events(&mut self) -> Vec<FadeEvent> {
        std::mem::take(&mut self.shared.lock().unwrap().pending_events)
    }

    /// Ramp volume from silence to full scale, starting playback
    ///
    /// Cancels any in-flight fade, resets the player volume to 0.0,
    /// issues `play()`, then schedules the up-ramp. May be called at any
    /// time, including while a fade-out is in progress; the ramp always
    /// restarts from volume 0.0, discarding prior progress.
    pub fn fade_in(&mut self) {
        self.cancel_active();

        {
            let mut player = self.player.lock().unwrap();
            // Volume goes to zero before play() so the first audible
            // sample is already silent.
            if let Err(err) = player.set_volume(0.0) {
                warn!("Failed to reset volume before fade-in: {}", err);
            }
            if let Err(err) = player.play() {
                warn!("Failed to start playback for fade-in: {}", err);
            }
        }

        {
            let mut shared = self.shared.lock().unwrap();
            shared.phase = FadePhase::FadingIn;
            shared.pending_events.push(FadeEvent::FadeInStarted);
        }
        debug!(
            "Starting fade-in: {} steps over {:?}",
            self.settings.steps, self.settings.duration
        );

        let player = Arc::clone(&self.player);
        let shared = Arc::clone(&self.shared);
        let mut ramp = FadeRamp::fade_in(self.settings.steps);
        let interval = self.settings.interval();

        self.active = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while !ramp.is_complete() {
                ticker.tick().await;
                let volume = ramp.advance();
                let mut player = player.lock().unwrap();
                if let Err(err) = player.set_volume(volume) {
                    warn!("Failed to write volume during fade-in: {}", err);
                }
            }

            let mut shared = shared.lock().unwrap();
            shared.phase = FadePhase::Idle;
            shared.pending_events.push(FadeEvent::FadeInCompleted);
            debug!("Fade-in complete");
        }));
    }

    /// Ramp volume down to silence, then pause
    ///
    /// Safe to call even if no fade is active or audio is already
    /// stopped. The down-ramp always starts from the full step counter
    /// regardless of the player's current volume.
    pub fn fade_out(&mut self) {
        self.start_fade_out(None);
    }

    /// Ramp volume down to silence, then pause and run `on_complete`
    ///
    /// The continuation fires exactly once, synchronously within the
    /// final tick after `pause()` has been issued. If the fade is
    /// preempted by another `fade_in`/`fade_out` before reaching
    /// silence, the continuation is dropped and never invoked.
    pub fn fade_out_with<F>(&mut self, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.start_fade_out(Some(Box::new(on_complete)));
    }

    /// Cancel any in-flight fade
    ///
    /// The player keeps whatever volume the last tick wrote; nothing is
    /// paused or resumed.
    pub fn cancel(&mut self) {
        self.cancel_active();
    }

    fn start_fade_out(&mut self, on_complete: Option<OnComplete>) {
        self.cancel_active();

        {
            let mut shared = self.shared.lock().unwrap();
            shared.phase = FadePhase::FadingOut;
            shared.pending_events.push(FadeEvent::FadeOutStarted);
        }
        debug!(
            "Starting fade-out: {} steps over {:?}",
            self.settings.steps, self.settings.duration
        );

        let player = Arc::clone(&self.player);
        let shared = Arc::clone(&self.shared);
        let mut ramp = FadeRamp::fade_out(self.settings.steps);
        let interval = self.settings.interval();

        self.active = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while !ramp.is_complete() {
                ticker.tick().await;
                let volume = ramp.advance();
                let mut player = player.lock().unwrap();
                if let Err(err) = player.set_volume(volume) {
                    warn!("Failed to write volume during fade-out: {}", err);
                }
            }

            {
                let mut player = player.lock().unwrap();
                if let Err(err) = player.pause() {
                    warn!("Failed to pause after fade-out: {}", err);
                }
            }

            {
                let mut shared = shared.lock().unwrap();
                shared.phase = FadePhase::Idle;
                shared.pending_events.push(FadeEvent::FadeOutCompleted);
            }
            debug!("Fade-out complete, player paused");

            if let Some(on_complete) = on_complete {
                on_complete();
            }
        }));
    }

    /// Cancel-before-schedule: abort the live task, if any, before a new
    /// one may take the slot.
    fn cancel_active(&mut self) {
        if let Some(task) = self.active.take() {
            if !task.is_finished() {
                task.abort();
                let mut shared = self.shared.lock().unwrap();
                let phase = shared.phase;
                shared.phase = FadePhase::Idle;
                shared.pending_events.push(FadeEvent::FadeCancelled { phase });
                debug!("Cancelled in-flight fade ({:?})", phase);
            }
        }
    }
}

impl<P: AudioPlayer> Drop for FadeController<P> {
    fn drop(&mut self) {
        if let Some(task) = self.active.take() {
            task.abort();
        }
    }
}
