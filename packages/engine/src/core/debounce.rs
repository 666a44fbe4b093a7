//! Deadline-based timers
//!
//! Time comes from the frame clock (milliseconds), so these work the same
//! under `requestAnimationFrame`, an external ticker, or a unit test.

/// One-shot deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deadline {
    due_at_ms: f64,
}

impl Deadline {
    pub fn after(now_ms: f64, delay_ms: f64) -> Self {
        Self { due_at_ms: now_ms + delay_ms }
    }

    #[inline]
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms >= self.due_at_ms
    }
}

/// Trailing-edge debounce: every `schedule` cancels the pending fire and
/// starts a new delay window.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay_ms: f64,
    pending: Option<Deadline>,
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, pending: None }
    }

    /// Cancel any pending fire and schedule a new one `delay_ms` from `now_ms`.
    pub fn schedule(&mut self, now_ms: f64) {
        self.pending = Some(Deadline::after(now_ms, self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.pending {
            Some(deadline) if deadline.is_due(now_ms) => {
                self.pending = None;
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
    fn fires_once_after_delay() {
        let mut d = Debounce::new(150.0);
        d.schedule(1000.0);
        assert!(!d.poll(1100.0));
        assert!(d.poll(1150.0));
        assert!(!d.poll(1200.0));
    }

    #[test]
    fn reschedule_pushes_deadline_out() {
        let mut d = Debounce::new(150.0);
        d.schedule(0.0);
        d.schedule(100.0);
        assert!(!d.poll(160.0));
        assert!(d.poll(250.0));
    }

    #[test]
    fn cancel_drops_pending_fire() {
        let mut d = Debounce::new(150.0);
        d.schedule(0.0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.poll(1_000.0));
    }
}
