//! Debounced command dispatch.
//!
//! Every value edit calls [`SendDebouncer::note_edit`]; the scheduled send
//! only fires once the knob has been quiet for the full period, so a burst
//! of rotation-driven adjustments collapses into a single network call.
//!
//! The debouncer is pure policy over a millisecond clock: the firmware loop
//! feeds it `Instant::now().as_millis()` each tick, host tests feed it a
//! simulated clock.

/// The single in-flight scheduled send awaiting its quiet-period deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingSend {
    /// Menu index of the setting to ship.
    pub index: usize,
    /// Absolute deadline (ms) at which the send fires.
    pub deadline_ms: u64,
}

/// One process-wide pending-send slot.
///
/// A new edit always cancels and replaces whatever is pending, including a
/// pending send for a *different* setting: editing B while A's send is still
/// waiting drops A's send entirely. That cross-setting coalescing matches
/// the machine's observed behavior; see DESIGN.md for the trade-off.
#[derive(Debug)]
pub struct SendDebouncer {
    pending: Option<PendingSend>,
    quiet_ms: u64,
}

impl SendDebouncer {
    /// Create a debouncer with the given quiet period.
    pub const fn new(quiet_ms: u64) -> Self {
        Self {
            pending: None,
            quiet_ms,
        }
    }

    /// Record an edit to the setting at `index`, (re)arming the slot with
    /// deadline `now_ms + quiet period`. Any previously pending send is
    /// cancelled, whichever setting it targeted.
    pub fn note_edit(&mut self, index: usize, now_ms: u64) {
        self.pending = Some(PendingSend {
            index,
            deadline_ms: now_ms + self.quiet_ms,
        });
    }

    /// Fire the pending send if its deadline has elapsed.
    ///
    /// Returns the target setting index exactly once per armed slot; the
    /// caller reads the setting's *current* value and issues the command.
    /// Subsequent polls return `None` until a new edit arms the slot again.
    pub fn poll(&mut self, now_ms: u64) -> Option<usize> {
        let pending = self.pending?;
        if now_ms < pending.deadline_ms {
            return None;
        }
        self.pending = None;
        Some(pending.index)
    }

    /// Discard the pending send, if any. Safe to call any number of times.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The currently armed slot, if any.
    pub fn pending(&self) -> Option<PendingSend> {
        self.pending
    }
}
