use std::time::{Duration, Instant};

use crate::constants::DEFAULT_DEBOUNCE_MS;

// single-shot delayed task, rescheduling replaces the pending deadline
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once, on the first call at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
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

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);
        assert!(!debounce.fire(start));

        debounce.schedule(start);
        assert!(!debounce.fire(start + Duration::from_millis(499)));
        assert!(debounce.fire(start + DELAY));
        assert!(!debounce.fire(start + Duration::from_secs(5)));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn rescheduling_pushes_the_deadline() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);
        debounce.schedule(start);
        debounce.schedule(start + Duration::from_millis(400));

        assert!(!debounce.fire(start + Duration::from_millis(600)));
        assert!(debounce.fire(start + Duration::from_millis(900)));
    }

    #[test]
    fn cancel_drops_pending() {
        let start = Instant::now();
        let mut debounce = Debouncer::default();
        assert_eq!(debounce.delay(), DELAY);
        debounce.schedule(start);
        debounce.cancel();
        assert!(!debounce.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn zero_delay_fires_immediately() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(Duration::ZERO);
        debounce.schedule(start);
        assert!(debounce.fire(start));
    }
}
