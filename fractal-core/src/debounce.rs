//! Trailing-edge coalescing of redraw requests.
//!
//! Dragging a control produces a burst of edits; only the last one in a
//! quiet window should trigger a full regeneration. [`Debouncer`] is driven
//! by the host loop: call [`Debouncer::request`] on every edit and
//! [`Debouncer::poll`] once per frame.
//!
//! Times are plain [`Duration`]s measured from any fixed origin, e.g. the
//! host's frame clock. They must not go backwards.

use std::time::Duration;

use tracing::trace;

/// Quiet period a request must survive before it fires.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// "Latest request wins within a window".
///
/// Each request bumps a monotonic generation counter and restarts the
/// window; a fire reports the generation it stands for, so older requests
/// that were coalesced are never observed.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    generation: u64,
    pending_since: Option<Duration>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending_since: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Records a request at `now`, superseding any pending one.
    ///
    /// ### Returns
    /// The generation assigned to this request.
    pub fn request(&mut self, now: Duration) -> u64 {
        if self.pending_since.is_some() {
            trace!(superseded = self.generation, "coalescing redraw request");
        }
        self.generation += 1;
        self.pending_since = Some(now);
        self.generation
    }

    /// Fires the pending request if it has been quiet for a full window.
    ///
    /// ### Returns
    /// `Some(generation)` exactly once per burst, `None` otherwise.
    pub fn poll(&mut self, now: Duration) -> Option<u64> {
        let since = self.pending_since?;
        if now.saturating_sub(since) < self.window {
            return None;
        }
        self.pending_since = None;
        Some(self.generation)
    }

    /// How long until the pending request fires, or `None` if nothing is
    /// pending. Zero means the next [`poll`](Self::poll) fires.
    pub fn time_until_fire(&self, now: Duration) -> Option<Duration> {
        self.pending_since
            .map(|since| self.window.saturating_sub(now.saturating_sub(since)))
    }
}
