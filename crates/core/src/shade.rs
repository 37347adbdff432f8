//! Single-light Lambertian shading with an ambient floor.

use crate::math::Vec3;
use crate::types::{AMBIENT_INTENSITY, LIGHT_DIRECTION};

/// Lighting parameters for flat face shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Unit vector.
    direction: Vec3,
    ambient: f64,
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::from_array(LIGHT_DIRECTION), AMBIENT_INTENSITY)
    }
}

impl Light {
    /// `direction` must be non-zero; it is normalized here.
    pub fn new(direction: Vec3, ambient: f64) -> Self {
        Self {
            direction: direction.normalize(),
            ambient,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    /// Brightness in `[0, 1]` for a surface with the given unit normal.
    ///
    /// Faces turned away from the light get exactly the ambient term.
    pub fn brightness(&self, normal: Vec3) -> f64 {
        let diffuse = normal.dot(self.direction).max(0.0);
        (self.ambient + diffuse * (1.0 - self.ambient)).clamp(0.0, 1.0)
    }
}
