//! Screen focus lifecycle
//!
//! Explicit subscription surface between a UI toolkit's focus detection
//! and the audio layer. The toolkit calls `set_visible`/`set_hidden`;
//! subscribers get their handler run on focus and the cleanup hook the
//! handler returned run on blur.

use tracing::debug;

/// Cleanup hook returned by a visibility handler, run on visibility-lost
pub type CleanupFn = Box<dyn FnOnce() + Send>;

/// Handler invoked when the screen becomes visible
type VisibilityHandler = Box<dyn FnMut() -> Option<CleanupFn> + Send>;

/// Identifies one visibility subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Visibility event dispatcher for one screen
///
/// Handlers run in subscription order on `set_visible`. Each handler may
/// return a cleanup hook; pending hooks run exactly once on the next
/// `set_hidden` (or on unsubscribe), mirroring mount/unmount semantics.
pub struct FocusEvents {
    next_id: u64,
    handlers: Vec<(SubscriptionId, VisibilityHandler)>,
    cleanups: Vec<(SubscriptionId, CleanupFn)>,
    visible: bool,
}

impl FocusEvents {
    /// Create a dispatcher for a screen that starts hidden
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
            cleanups: Vec::new(),
            visible: false,
        }
    }

    /// Whether the screen is currently visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Subscribe to visibility gain
    ///
    /// If the screen is already visible the handler runs immediately,
    /// the way a lifecycle effect fires on registration for a focused
    /// screen.
    pub fn on_became_visible<H>(&mut self, handler: H) -> SubscriptionId
    where
        H: FnMut() -> Option<CleanupFn> + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let mut handler: VisibilityHandler = Box::new(handler);
        if self.visible {
            if let Some(cleanup) = handler() {
                self.cleanups.push((id, cleanup));
            }
        }
        self.handlers.push((id, handler));
        id
    }

    /// Remove a subscription
    ///
    /// Runs the subscription's pending cleanup, if any, matching the
    /// unmount behavior of the original lifecycle source.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        if let Some(index) = self
            .cleanups
            .iter()
            .position(|(cleanup_id, _)| *cleanup_id == id)
        {
            let (_, cleanup) = self.cleanups.remove(index);
            cleanup();
        }
    }

    /// Dispatch visibility gained
    ///
    /// No-op if already visible; focus never re-fires without an
    /// intervening blur.
    pub fn set_visible(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        debug!("Screen became visible, running {} handler(s)", self.handlers.len());

        let mut new_cleanups = Vec::new();
        for (id, handler) in &mut self.handlers {
            if let Some(cleanup) = handler() {
                new_cleanups.push((*id, cleanup));
            }
        }
        self.cleanups.extend(new_cleanups);
    }

    /// Dispatch visibility lost, running all pending cleanups
    pub fn set_hidden(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        debug!("Screen became hidden, running {} cleanup(s)", self.cleanups.len());

        for (_, cleanup) in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

impl Default for FocusEvents {
    fn default() -> Self {
        Self::new()
    }
}
