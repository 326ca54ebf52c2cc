use std::time::{Duration, Instant};

/// Keeps redraws on a fixed cadence, independent of the layout code.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    interval: Duration,
    deadline: Instant,
}

impl RedrawScheduler {
    /// The first redraw is due at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// True when a redraw is due; the next one is then armed one interval out.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + self.interval;
        true
    }

    /// Makes the next call to `due` succeed, e.g. after a resize.
    pub fn expedite(&mut self, now: Instant) {
        self.deadline = self.deadline.min(now);
    }
}
