//! Rapid-click debouncing
//!
//! A trigger is accepted when at least `interval_ms` has passed since the
//! previously accepted trigger; everything in between is dropped. The
//! "previously accepted" timestamp lives in a [`LastAccepted`] cell which
//! can be process-wide (the classic behaviour, shared by every guarded
//! control) or owned by a single control.

use crate::clock::{MonotonicClock, SystemClock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Default minimum interval between accepted clicks
pub const DEFAULT_INTERVAL_MS: u64 = 300;

/// Sentinel for "nothing accepted yet"
const NEVER: u64 = u64::MAX;

/// Timestamp of the last accepted trigger
///
/// Guards bound to the same cell suppress each other.
#[derive(Debug)]
pub struct LastAccepted {
    at_ms: AtomicU64,
}

impl LastAccepted {
    /// Fresh cell that has never accepted anything
    pub const fn new() -> Self {
        Self {
            at_ms: AtomicU64::new(NEVER),
        }
    }

    /// The process-wide cell used by [`guard`] and [`Debouncer::process_wide`]
    pub fn process() -> Arc<LastAccepted> {
        static PROCESS: OnceLock<Arc<LastAccepted>> = OnceLock::new();
        Arc::clone(PROCESS.get_or_init(|| Arc::new(LastAccepted::new())))
    }

    /// Last accepted timestamp, or `None` if nothing was accepted yet
    pub fn get(&self) -> Option<u64> {
        match self.at_ms.load(Ordering::Relaxed) {
            NEVER => None,
            at => Some(at),
        }
    }

    fn record(&self, now_ms: u64) {
        // A real reading of u64::MAX would collide with the sentinel.
        self.at_ms.store(now_ms.min(NEVER - 1), Ordering::Relaxed);
    }
}

impl Default for LastAccepted {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a single trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The action ran and the timestamp moved
    Accepted,
    /// Too close to the previous accepted trigger; nothing happened
    Suppressed,
}

impl Decision {
    pub fn is_accepted(self) -> bool {
        matches!(self, Decision::Accepted)
    }
}

/// Which timestamp a guard measures against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuardScope {
    /// One timestamp for the whole process; a click on any guarded control
    /// suppresses clicks on every other guarded control
    #[default]
    Process,
    /// Each guarded control keeps its own timestamp
    PerTarget,
}

impl GuardScope {
    /// Build a debouncer with this scope
    pub fn debouncer(self, interval_ms: u64) -> Debouncer {
        match self {
            GuardScope::Process => Debouncer::process_wide(interval_ms),
            GuardScope::PerTarget => Debouncer::isolated(interval_ms),
        }
    }
}

impl fmt::Display for GuardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardScope::Process => f.write_str("process"),
            GuardScope::PerTarget => f.write_str("per-target"),
        }
    }
}

/// Interval check bound to a timestamp cell and a clock
///
/// Cloning shares the timestamp cell.
#[derive(Clone)]
pub struct Debouncer {
    interval_ms: u64,
    state: Arc<LastAccepted>,
    clock: Arc<dyn MonotonicClock>,
}

impl Debouncer {
    /// Debouncer measured against the process-wide timestamp
    pub fn process_wide(interval_ms: u64) -> Self {
        Self::with_state(interval_ms, LastAccepted::process())
    }

    /// Debouncer with a timestamp nobody else sees
    pub fn isolated(interval_ms: u64) -> Self {
        Self::with_state(interval_ms, Arc::new(LastAccepted::new()))
    }

    /// Debouncer measured against an explicit, possibly shared, cell
    pub fn with_state(interval_ms: u64, state: Arc<LastAccepted>) -> Self {
        Self {
            interval_ms,
            state,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used by [`Debouncer::check`] and [`Guarded::handle`]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn MonotonicClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// The timestamp cell this debouncer reads and writes
    pub fn state(&self) -> &Arc<LastAccepted> {
        &self.state
    }

    /// Decide whether a trigger at `now_ms` would be accepted
    ///
    /// Does not record anything.
    pub fn check_at(&self, now_ms: u64) -> Decision {
        match self.state.get() {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => Decision::Suppressed,
            _ => Decision::Accepted,
        }
    }

    /// [`Debouncer::check_at`] using the debouncer's clock
    pub fn check(&self) -> Decision {
        self.check_at(self.clock.now_ms())
    }

    /// Check a trigger at `now_ms` and record it if accepted
    pub fn accept_at(&self, now_ms: u64) -> Decision {
        let decision = self.check_at(now_ms);
        if decision.is_accepted() {
            self.state.record(now_ms);
        }
        decision
    }

    /// Wrap an action so it only runs for accepted triggers
    pub fn guard<F: FnMut()>(self, action: F) -> Guarded<F> {
        Guarded {
            debouncer: self,
            action,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::process_wide(DEFAULT_INTERVAL_MS)
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("interval_ms", &self.interval_ms)
            .field("last_accepted", &self.state.get())
            .finish_non_exhaustive()
    }
}

/// An action behind a debouncer
pub struct Guarded<F> {
    debouncer: Debouncer,
    action: F,
}

impl<F: FnMut()> Guarded<F> {
    /// Handle a trigger that happened at `now_ms`
    ///
    /// On acceptance the action runs first and the timestamp is recorded
    /// afterwards.
    pub fn handle_at(&mut self, now_ms: u64) -> Decision {
        let decision = self.debouncer.check_at(now_ms);
        match decision {
            Decision::Accepted => {
                (self.action)();
                self.debouncer.state.record(now_ms);
                trace!(now_ms, "click accepted");
            }
            Decision::Suppressed => {
                trace!(
                    now_ms,
                    last_accepted = ?self.debouncer.state.get(),
                    interval_ms = self.debouncer.interval_ms,
                    "click suppressed"
                );
            }
        }
        decision
    }

    /// Handle a trigger happening now, per the debouncer's clock
    pub fn handle(&mut self) -> Decision {
        let now_ms = self.debouncer.clock.now_ms();
        self.handle_at(now_ms)
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}

impl<F> fmt::Debug for Guarded<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

/// Guard `action` against the process-wide timestamp
pub fn guard<F: FnMut()>(interval_ms: u64, action: F) -> Guarded<F> {
    Debouncer::process_wide(interval_ms).guard(action)
}

/// [`guard`] with [`DEFAULT_INTERVAL_MS`]
pub fn guard_default<F: FnMut()>(action: F) -> Guarded<F> {
    guard(DEFAULT_INTERVAL_MS, action)
}
