//! Vector math for the cube pipeline.
//!
//! Both vector types are plain `Copy` values; every operation returns a new
//! vector.

use std::ops::{Add, Sub};

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn from_array(v: [f64; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length.
    ///
    /// The vector must be non-zero. Callers only normalize the fixed light
    /// direction and normals of a non-degenerate cube; use
    /// [`Vec3::try_normalize`] for anything else.
    pub fn normalize(self) -> Vec3 {
        let l = self.length();
        debug_assert!(l > 0.0, "normalize called on a zero-length vector");
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    /// Scale to unit length, or `None` for the zero vector.
    pub fn try_normalize(self) -> Option<Vec3> {
        let l = self.length();
        if l == 0.0 || !l.is_finite() {
            return None;
        }
        Some(Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        })
    }

    /// Rotate this point about `origin` by Euler angles (radians).
    ///
    /// The point is moved into origin-relative space, rotated about X, then Y,
    /// then Z, and moved back.
    pub fn rotate_about(self, origin: Vec3, rotation: Vec3) -> Vec3 {
        let p = self - origin;
        let p = rotate_x(p, rotation.x);
        let p = rotate_y(p, rotation.y);
        let p = rotate_z(p, rotation.z);
        p + origin
    }

    /// Orthographic projection: drop Z.
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

fn rotate_x(p: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3 {
        x: p.x,
        y: c * p.y - s * p.z,
        z: s * p.y + c * p.z,
    }
}

fn rotate_y(p: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3 {
        x: c * p.x + s * p.z,
        y: p.y,
        z: -s * p.x + c * p.z,
    }
}

fn rotate_z(p: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3 {
        x: c * p.x - s * p.y,
        y: s * p.x + c * p.y,
        z: p.z,
    }
}

/// 2D screen-space vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Barycentric weights `(s, t, u)` of `p` in triangle `(a, b, c)`.
///
/// Derived from the triangle's signed area, so the result does not depend on
/// winding or on which way the screen Y axis points. Returns `None` when the
/// triangle has zero area.
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<(f64, f64, f64)> {
    let area = 0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y));
    if area == 0.0 {
        return None;
    }

    let s = (a.y * c.x - a.x * c.y + (c.y - a.y) * p.x + (a.x - c.x) * p.y) / (2.0 * area);
    let t = (a.x * b.y - a.y * b.x + (a.y - b.y) * p.x + (b.x - a.x) * p.y) / (2.0 * area);
    Some((s, t, 1.0 - s - t))
}

/// Inclusive point-in-triangle test. Degenerate triangles contain nothing.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    match barycentric(p, a, b, c) {
        Some((s, t, u)) => s >= 0.0 && t >= 0.0 && u >= 0.0,
        None => false,
    }
}
