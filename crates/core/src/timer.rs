//! Frame timing: rolling average of recent frame durations and the sleep
//! budget for fixed-rate pacing.

use std::time::Duration;

use crate::types::{FRAME_HISTORY, TARGET_FPS};

/// Ring buffer of the last `FRAME_HISTORY` frame times, in milliseconds.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    samples: [f64; FRAME_HISTORY],
    next: usize,
    len: usize,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            samples: [0.0; FRAME_HISTORY],
            next: 0,
            len: 0,
        }
    }

    /// Record one frame, overwriting the oldest sample once full.
    pub fn record(&mut self, frame: Duration) {
        self.samples[self.next] = frame.as_secs_f64() * 1000.0;
        self.next = (self.next + 1) % FRAME_HISTORY;
        if self.len < FRAME_HISTORY {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mean of the retained samples; `0.0` before the first frame.
    pub fn average_ms(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        // Until the ring wraps, the filled slots are exactly 0..len.
        self.samples[..self.len].iter().sum::<f64>() / self.len as f64
    }
}

/// Target duration of one frame.
pub fn frame_period() -> Duration {
    Duration::from_secs(1) / TARGET_FPS
}

/// Time left to sleep in a frame of length `target`, zero if rendering
/// overran.
pub fn frame_budget(target: Duration, elapsed: Duration) -> Duration {
    target.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_timer_averages_zero() {
        let t = FrameTimer::new();
        assert!(t.is_empty());
        assert_eq!(t.average_ms(), 0.0);
    }

    #[test]
    fn averages_recorded_frames() {
        let mut t = FrameTimer::new();
        t.record(Duration::from_millis(2));
        t.record(Duration::from_millis(4));
        assert_eq!(t.len(), 2);
        assert!((t.average_ms() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn old_samples_fall_out_of_the_window() {
        let mut t = FrameTimer::new();
        for _ in 0..FRAME_HISTORY {
            t.record(Duration::from_millis(10));
        }
        for _ in 0..FRAME_HISTORY {
            t.record(Duration::from_millis(1));
        }
        assert_eq!(t.len(), FRAME_HISTORY);
        assert!((t.average_ms() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn budget_clamps_to_zero_on_overrun() {
        let target = frame_period();
        assert_eq!(target, Duration::from_nanos(16_666_666));
        assert_eq!(
            frame_budget(target, Duration::from_millis(6)),
            target - Duration::from_millis(6)
        );
        assert_eq!(frame_budget(target, Duration::from_millis(40)), Duration::ZERO);
    }
}
