//! Deadline-based timers driven by an external clock.
//!
//! Nothing here schedules callbacks: the owner polls with the current time
//! from its frame tick. Dropping or cancelling a timer is therefore enough to
//! guarantee it never fires again.

/// Cancel-and-reschedule timer that fires once after a quiet period.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Replaces any pending deadline with `now + delay`.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// True exactly once when the deadline has been reached.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(d) if now_ms >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fixed-period ticker. Missed periods collapse into a single tick.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    period_ms: u64,
    next: Option<u64>,
}

impl Ticker {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next: None,
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.next.is_none() {
            self.next = Some(now_ms.saturating_add(self.period_ms));
        }
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now_ms < next {
            return false;
        }
        let behind = (now_ms - next) / self.period_ms;
        self.next = Some(next + (behind + 1) * self.period_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_fires_once_at_deadline() {
        let mut d = Debounce::new(500);
        d.arm(1000);
        assert!(!d.fire_if_due(1499));
        assert!(d.fire_if_due(1500));
        assert!(!d.fire_if_due(2000));
    }

    #[test]
    fn rearming_pushes_deadline() {
        let mut d = Debounce::new(500);
        d.arm(0);
        d.arm(499);
        assert_eq!(d.deadline(), Some(999));
        assert!(!d.fire_if_due(500));
    }

    #[test]
    fn cancelled_debounce_never_fires() {
        let mut d = Debounce::new(500);
        d.arm(0);
        d.cancel();
        assert!(!d.fire_if_due(10_000));
    }

    #[test]
    fn ticker_collapses_missed_periods() {
        let mut t = Ticker::new(500);
        t.start(0);
        assert!(!t.poll(499));
        assert!(t.poll(1700));
        assert!(!t.poll(1999));
        assert!(t.poll(2000));
    }

    #[test]
    fn stopped_ticker_is_silent() {
        let mut t = Ticker::new(500);
        t.start(0);
        t.stop();
        assert!(!t.poll(5000));
        assert!(!t.is_running());
    }
}
