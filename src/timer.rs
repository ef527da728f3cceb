//! Fixed-period timer source
//!
//! The host feeds elapsed wall time in; the timer fires its callback once for
//! every full period that has passed. Firings never overlap: each callback
//! returns before the next one starts.

use crate::consts::TICK_INTERVAL_MS;

/// Maximum firings per pump to prevent spiral of death after a stall
pub const MAX_CATCH_UP: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimer {
    period_ms: f64,
    accumulator_ms: f64,
    running: bool,
    max_catch_up: u32,
}

impl Default for FixedTimer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}

impl FixedTimer {
    /// A stopped timer with the given period (clamped to at least 1 ms)
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1) as f64,
            accumulator_ms: 0.0,
            running: false,
            max_catch_up: MAX_CATCH_UP,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop firing and drop any partially elapsed period
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator_ms = 0.0;
    }

    /// Account for `elapsed_ms` of wall time, calling `on_fire` once per due
    /// period. Returns the number of firings.
    pub fn pump(&mut self, elapsed_ms: f64, on_fire: impl FnMut()) -> u32 {
        self.pump_at_most(elapsed_ms, self.max_catch_up, on_fire)
    }

    /// Like [`FixedTimer::pump`], but fire no more than `limit` times
    pub fn pump_at_most(&mut self, elapsed_ms: f64, limit: u32, mut on_fire: impl FnMut()) -> u32 {
        if !self.running || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }

        let limit = limit.min(self.max_catch_up);
        self.accumulator_ms += elapsed_ms;
        let mut fired = 0;
        while self.accumulator_ms >= self.period_ms && fired < limit {
            on_fire();
            self.accumulator_ms -= self.period_ms;
            fired += 1;
        }

        // Drop the backlog we refused to replay
        if self.accumulator_ms >= self.period_ms {
            log::debug!(
                "Timer dropped {:.1} ms of backlog",
                self.accumulator_ms - self.accumulator_ms % self.period_ms
            );
            self.accumulator_ms %= self.period_ms;
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = FixedTimer::new(40);
        let mut count = 0;
        assert_eq!(timer.pump(1000.0, || count += 1), 0);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = FixedTimer::new(40);
        timer.start();
        let mut count = 0;
        assert_eq!(timer.pump(39.0, || count += 1), 0);
        assert_eq!(timer.pump(1.0, || count += 1), 1);
        assert_eq!(timer.pump(100.0, || count += 1), 2);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut timer = FixedTimer::new(40).with_max_catch_up(8);
        timer.start();
        let mut count = 0;
        assert_eq!(timer.pump(10_000.0, || count += 1), 8);
        // Backlog is dropped, not replayed later
        assert_eq!(timer.pump(1.0, || count += 1), 0);
        assert_eq!(count, 8);
    }

    #[test]
    fn test_pump_at_most_respects_limit() {
        let mut timer = FixedTimer::new(40);
        timer.start();
        let mut count = 0;
        assert_eq!(timer.pump_at_most(200.0, 2, || count += 1), 2);
        assert_eq!(timer.pump_at_most(200.0, 0, || count += 1), 0);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_non_finite_elapsed_is_ignored() {
        let mut timer = FixedTimer::new(40);
        timer.start();
        let mut count = 0;
        assert_eq!(timer.pump(f64::INFINITY, || count += 1), 0);
        assert_eq!(timer.pump(f64::NAN, || count += 1), 0);
        // Still healthy afterwards
        assert_eq!(timer.pump(40.0, || count += 1), 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_stop_discards_partial_period() {
        let mut timer = FixedTimer::default();
        timer.start();
        timer.pump(30.0, || {});
        timer.stop();
        timer.start();
        assert_eq!(timer.pump(30.0, || {}), 0);
        assert!(timer.is_running());
    }
}
