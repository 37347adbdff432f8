//! Spin animation state for the frame loop.

use std::time::Duration;

use crate::math::Vec3;
use crate::types::{INITIAL_ANGLE, ROTATION_SPEED, SPIN_AXES};

/// Rotation angle that advances linearly with elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f64,
    /// Radians per second.
    speed: f64,
    paused: bool,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(INITIAL_ANGLE, ROTATION_SPEED)
    }
}

impl Spin {
    pub fn new(angle: f64, speed: f64) -> Self {
        Self {
            angle,
            speed,
            paused: false,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance by `elapsed`. No-op while paused.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.paused {
            self.angle += elapsed.as_secs_f64() * self.speed;
        }
    }

    /// Euler rotation for the current angle: a slow X tumble, a full-speed
    /// reverse Y spin, and a fixed Z tilt.
    pub fn rotation(&self) -> Vec3 {
        let [ax, ay, tilt] = SPIN_AXES;
        Vec3::new(self.angle * ax, self.angle * ay, tilt)
    }
}
