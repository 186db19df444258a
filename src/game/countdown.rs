use std::time::Duration;

/// Fixed-interval countdown fed with elapsed wall time.
///
/// Elapsed time accumulates until a full interval has passed; each full
/// interval emits the new remaining time. The emission carrying zero ends
/// the countdown.
#[derive(Debug, Clone)]
pub struct Countdown {
    interval: Duration,
    interval_ms: u64,
    accumulator: Duration,
    remaining_ms: u64,
    active: bool,
}

impl Countdown {
    pub fn new(tick_interval_ms: u64) -> Self {
        let interval_ms = tick_interval_ms.max(1);
        Self {
            interval: Duration::from_millis(interval_ms),
            interval_ms,
            accumulator: Duration::ZERO,
            remaining_ms: 0,
            active: false,
        }
    }

    pub fn start(&mut self, total_ms: u64) {
        self.remaining_ms = total_ms;
        self.accumulator = Duration::ZERO;
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.accumulator = Duration::ZERO;
    }

    /// Overrides the remaining time without disturbing the phase of the
    /// next tick.
    pub fn resync(&mut self, remaining_ms: u64) {
        self.remaining_ms = remaining_ms;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn advance(&mut self, delta: Duration) -> Vec<i64> {
        if !self.active {
            return Vec::new();
        }

        self.accumulator += delta;
        let mut emitted = Vec::new();
        while self.active && self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            self.remaining_ms = self.remaining_ms.saturating_sub(self.interval_ms);
            emitted.push(i64::try_from(self.remaining_ms).unwrap_or(i64::MAX));
            if self.remaining_ms == 0 {
                self.cancel();
            }
        }
        emitted
    }

    pub fn until_next_tick(&self) -> Option<Duration> {
        self.active
            .then(|| self.interval.saturating_sub(self.accumulator))
    }
}
