use std::time::Duration;

const FAST_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(33);
const IDLE_THRESHOLD: u8 = 3;

/// Cadence of bus drains: fast while events arrive, slower once idle.
#[derive(Debug, Clone)]
pub(super) struct MicroTicker {
    fast:       Duration,
    idle:       Duration,
    threshold:  u8,
    idle_ticks: u8,
}

impl MicroTicker {
    pub(super) fn new(fast: Duration, idle: Duration, threshold: u8) -> Self {
        Self {
            fast,
            idle,
            threshold,
            idle_ticks: 0,
        }
    }

    pub(super) fn interval(&self) -> Duration {
        if self.idle_ticks >= self.threshold {
            self.idle
        } else {
            self.fast
        }
    }

    pub(super) fn record_activity(&mut self) {
        self.idle_ticks = 0;
    }

    pub(super) fn record_idle(&mut self) {
        self.idle_ticks = self.idle_ticks.saturating_add(1).min(self.threshold);
    }
}

impl Default for MicroTicker {
    fn default() -> Self {
        Self::new(FAST_INTERVAL, IDLE_INTERVAL, IDLE_THRESHOLD)
    }
}
