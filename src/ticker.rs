use std::time::{Duration, Instant};

/// A repeating timer expressed as a deadline. It never fires by itself: the
/// session loop waits on its command queue for at most `remaining()` and
/// treats the timeout as the tick, so timer ticks and key presses are handled
/// one at a time by the same consumer.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(interval_ms: f64) -> Self {
        Ticker { interval: to_duration(interval_ms), deadline: None }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Restarts the countdown from now. No effect on a stopped ticker.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Takes effect from the next start or reset
    pub fn set_interval(&mut self, interval_ms: f64) {
        self.interval = to_duration(interval_ms);
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the next tick is due, `None` when stopped
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_at(Instant::now())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn start_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    fn reset_at(&mut self, now: Instant) {
        if self.is_running() {
            self.start_at(now);
        }
    }

    fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}

fn to_duration(ms: f64) -> Duration {
    Duration::from_micros((ms.max(0.0) * 1000.0).round() as u64)
}
