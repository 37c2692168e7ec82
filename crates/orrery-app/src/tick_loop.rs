//! Fixed-rate tick pacing for realtime runs.
//!
//! Wall-clock frame time is fed into an accumulator and drained in whole
//! ticks, so the simulation advances at the configured rate regardless of how
//! often frames come in.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time clamp to prevent spiral of death.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Tick rate used when the configured one is zero.
pub const FALLBACK_TICK_RATE: u32 = 60;

/// Accumulator-driven tick pacer.
pub struct TickLoop {
    tick_dt: f64,
    previous_time: Instant,
    accumulator: f64,
    frame_count: u64,
    tick_count: u64,
}

impl TickLoop {
    /// A loop running `tick_rate` ticks per second, starting now.
    pub fn new(tick_rate: u32) -> Self {
        let rate = if tick_rate == 0 {
            FALLBACK_TICK_RATE
        } else {
            tick_rate
        };
        Self {
            tick_dt: 1.0 / f64::from(rate),
            previous_time: Instant::now(),
            accumulator: 0.0,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Seconds per tick.
    pub fn tick_dt(&self) -> f64 {
        self.tick_dt
    }

    /// Measure the time since the previous frame and run the ticks it covers.
    pub fn frame(&mut self, update_fn: impl FnMut()) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Run the ticks covered by an explicit frame time. Returns how many ran.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut()) -> u32 {
        let mut frame_time = frame_time;
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.tick_dt {
            update_fn();
            self.accumulator -= self.tick_dt;
            self.tick_count += 1;
            steps += 1;
        }

        self.frame_count += 1;
        steps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_dt() {
        let loop_ = TickLoop::new(50);
        assert!((loop_.tick_dt() - 0.02).abs() < 1e-15);
        let fallback = TickLoop::new(0);
        assert!((fallback.tick_dt() - 1.0 / 60.0).abs() < 1e-15);
    }

    #[test]
    fn test_single_step() {
        let mut loop_ = TickLoop::new(60);
        let mut updates = 0u32;
        let dt = loop_.tick_dt();
        assert_eq!(loop_.advance(dt, || updates += 1), 1);
        assert_eq!(updates, 1);
        assert!(loop_.accumulator.abs() < 1e-12);
    }

    #[test]
    fn test_multiple_steps() {
        let mut loop_ = TickLoop::new(10);
        let mut updates = 0u32;
        loop_.advance(0.35, || updates += 1);
        assert_eq!(updates, 3);
        assert_eq!(loop_.tick_count(), 3);
        assert!((loop_.accumulator - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_partial_frame_runs_nothing() {
        let mut loop_ = TickLoop::new(60);
        let dt = loop_.tick_dt();
        assert_eq!(loop_.advance(0.5 * dt, || {}), 0);
        assert_eq!(loop_.frame_count(), 1);
        assert!((loop_.accumulator - 0.5 * dt).abs() < 1e-12);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut loop_ = TickLoop::new(60);
        let mut updates = 0u32;
        loop_.advance(1.0, || updates += 1);
        let max_updates = (MAX_FRAME_TIME / loop_.tick_dt()).ceil() as u32;
        assert!(updates <= max_updates, "{updates} > {max_updates}");
        assert!(updates > 0);
    }
}
