//! Single-slot debounce for shared-file flushes.

use std::time::{Duration, Instant};

/// Quiet period before a pending flush fires.
pub const QUIET_PERIOD: Duration = Duration::from_millis(500);

/// A single-slot scheduled flush.
///
/// Holds at most one pending deadline: scheduling replaces any previous one,
/// so a burst of mutations (a control being dragged) collapses into a single
/// flush of the most recent state once the burst goes quiet. Time is passed
/// in by the caller, which keeps the coordinator on its one event thread and
/// makes tests deterministic.
#[derive(Debug, Default)]
pub struct FlushSlot {
    deadline: Option<Instant>,
}

impl FlushSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a flush for `now + QUIET_PERIOD`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + QUIET_PERIOD);
    }

    /// Drop any pending flush.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a flush is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed; returns whether the caller
    /// should flush now.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_never_fires() {
        let mut slot = FlushSlot::new();
        assert!(!slot.is_pending());
        assert!(!slot.fire_if_due(Instant::now()));
    }

    #[test]
    fn fires_only_after_quiet_period() {
        let t0 = Instant::now();
        let mut slot = FlushSlot::new();
        slot.schedule(t0);

        assert!(!slot.fire_if_due(t0 + Duration::from_millis(499)));
        assert!(slot.is_pending());
        assert!(slot.fire_if_due(t0 + QUIET_PERIOD));
        assert!(!slot.is_pending());
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let t0 = Instant::now();
        let mut slot = FlushSlot::new();
        slot.schedule(t0);
        slot.schedule(t0 + Duration::from_millis(300));

        // The original deadline has been discarded.
        assert!(!slot.fire_if_due(t0 + Duration::from_millis(600)));
        assert!(slot.fire_if_due(t0 + Duration::from_millis(800)));
    }

    #[test]
    fn fires_at_most_once_per_schedule() {
        let t0 = Instant::now();
        let mut slot = FlushSlot::new();
        slot.schedule(t0);

        let later = t0 + Duration::from_secs(2);
        assert!(slot.fire_if_due(later));
        assert!(!slot.fire_if_due(later));
    }

    #[test]
    fn cancel_clears_the_slot() {
        let t0 = Instant::now();
        let mut slot = FlushSlot::new();
        slot.schedule(t0);
        slot.cancel();
        assert!(!slot.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
