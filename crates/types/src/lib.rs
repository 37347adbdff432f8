//! Core types module - shared constants and plain data
//!
//! Everything here is dependency-free so it can be used from the pure geometry
//! crate, the terminal layer and the input layer alike.
//!
//! # Scene Constants
//!
//! The program has no runtime configuration surface. All tunables are
//! compile-time constants:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDING_X` | 50 | Columns between the terminal edge and the window |
//! | `PADDING_Y` | 10 | Rows between the terminal edge and the window |
//! | `ROTATION_SPEED` | 1.5 | Radians of spin per second |
//! | `SIDE_LENGTH` | 45.0 | Cube edge length in terminal columns |
//! | `ORIGIN_DEPTH` | 50.0 | Z coordinate of the cube centre |
//! | `INITIAL_ANGLE` | 0.5 | Spin angle at startup (radians) |
//! | `TARGET_FPS` | 60 | Frame pacing target |
//! | `AMBIENT_INTENSITY` | 0.3 | Brightness floor for lit faces |
//! | `LIGHT_DIRECTION` | (1, -1, 1) | Light vector, normalized before use |
//! | `VIEW_DIRECTION` | (0, 0, -1) | Orthographic camera direction |
//! | `Y_SCALE` | 0.45 | Vertical squash for tall terminal glyphs |
//! | `FRAME_HISTORY` | 100 | Frame-time samples kept for the average |
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{DriverEvent, Rgb, TEXTURE, TARGET_FPS};
//!
//! assert_eq!(TEXTURE, ['C', 'U', 'B', 'E']);
//! assert_eq!(TARGET_FPS, 60);
//!
//! let white = Rgb::new(255, 255, 255);
//! assert_eq!(white.g, 255);
//!
//! assert_ne!(DriverEvent::Quit, DriverEvent::TogglePause);
//! ```

/// Horizontal window padding in columns.
pub const PADDING_X: u16 = 50;

/// Vertical window padding in rows.
pub const PADDING_Y: u16 = 10;

/// Spin speed in radians per second.
pub const ROTATION_SPEED: f64 = 1.5;

/// Cube edge length in terminal columns.
pub const SIDE_LENGTH: f64 = 45.0;

/// Depth of the cube centre. Projection is orthographic so this only matters
/// for rotation, not for on-screen size.
pub const ORIGIN_DEPTH: f64 = 50.0;

/// Spin angle at startup (radians).
pub const INITIAL_ANGLE: f64 = 0.5;

/// Per-axis factors applied to the spin angle to build the Euler rotation
/// `(angle * x, angle * y, z)`. The Z component is a fixed tilt, not a factor.
pub const SPIN_AXES: [f64; 3] = [0.3, -1.0, 0.5];

/// Frame pacing target (frames per second).
pub const TARGET_FPS: u32 = 60;

/// Ambient light floor, in `[0, 1]`.
pub const AMBIENT_INTENSITY: f64 = 0.3;

/// Un-normalized light direction.
pub const LIGHT_DIRECTION: [f64; 3] = [1.0, -1.0, 1.0];

/// Direction the orthographic camera looks along.
pub const VIEW_DIRECTION: [f64; 3] = [0.0, 0.0, -1.0];

/// Vertical scale applied after projection. Terminal cells are roughly twice
/// as tall as they are wide.
pub const Y_SCALE: f64 = 0.45;

/// Number of frame-time samples kept for the rolling average.
pub const FRAME_HISTORY: usize = 100;

/// Glyphs cycled across columns when painting a face.
pub const TEXTURE: [char; 4] = ['C', 'U', 'B', 'E'];

/// Luminance ramp, darkest first.
pub const LUMINANCE_RAMP: [char; 11] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '$', '@'];

/// Red offset subtracted from `brightness * 255`.
pub const RED_OFFSET: i32 = 50;

/// Green offset subtracted from `brightness * 255`.
pub const GREEN_OFFSET: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_defaults() {
        assert_eq!(PADDING_X, 50);
        assert_eq!(PADDING_Y, 10);
        assert_eq!(TARGET_FPS, 60);
        assert_eq!(FRAME_HISTORY, 100);
        assert!((AMBIENT_INTENSITY - 0.3).abs() < f64::EPSILON);
        assert!((Y_SCALE - 0.45).abs() < f64::EPSILON);
    }

    #[test]
    fn ramp_runs_dark_to_bright() {
        assert_eq!(LUMINANCE_RAMP[0], ' ');
        assert_eq!(LUMINANCE_RAMP[LUMINANCE_RAMP.len() - 1], '@');
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Notifications delivered to the frame loop between frames.
///
/// Keyboard, OS signals and terminal resizes are merged into this one type so
/// the driver only has a single queue to drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    /// Stop the frame loop and restore the terminal.
    Quit,
    /// Freeze or resume the spin.
    TogglePause,
    /// The terminal changed size (columns, rows).
    Resize { width: u16, height: u16 },
}
