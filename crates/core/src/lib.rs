//! Core cube renderer - pure, deterministic, and testable
//!
//! This crate contains the whole per-frame pipeline that turns a rotating cube
//! into terminal cells. It has **zero dependencies** on terminal I/O: output is
//! written through the [`Canvas`] trait, which the terminal crate implements
//! for its framebuffer.
//!
//! # Module Structure
//!
//! - [`math`]: `Vec2`/`Vec3`, Euler rotation about an origin, point-in-triangle
//! - [`cube`]: vertex generation, face table, backface culling, projection
//! - [`shade`]: Lambertian shading with an ambient floor
//! - [`raster`]: bounding-box scan, face coverage, glyph and color selection
//! - [`spin`]: time-driven rotation angle with pause
//! - [`timer`]: rolling frame-time average and frame pacing budget
//!
//! # Pipeline
//!
//! 1. Build the eight corners around the origin and rotate them (X, Y, Z).
//! 2. Mark faces whose normal points toward the viewer (`n · (0,0,-1) < 0`).
//! 3. Drop Z and squash Y toward the anchor row to correct for tall glyphs.
//! 4. Scan every cell of the projected bounding box; paint the last visible
//!    face covering it, or a blank.
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{Canvas, Cube, Glyph, Vec3};
//!
//! struct Count(usize);
//! impl Canvas for Count {
//!     fn paint(&mut self, _x: i32, _y: i32, _g: Glyph) { self.0 += 1; }
//!     fn blank(&mut self, _x: i32, _y: i32) {}
//! }
//!
//! let mut cube = Cube::new(10.0);
//! cube.set_origin(Vec3::new(40.0, 12.0, 50.0));
//! cube.set_rotation(Vec3::new(0.3, -1.0, 0.5));
//!
//! let mut canvas = Count(0);
//! cube.draw(12.0, &mut canvas);
//! assert!(canvas.0 > 0);
//! assert!(!cube.visible_faces().is_empty());
//! ```

pub mod cube;
pub mod math;
pub mod raster;
pub mod shade;
pub mod spin;
pub mod timer;

pub use tui_cube_types as types;

// Re-export commonly used types for convenience
pub use cube::{Cube, Face, FaceMask, VERTEX_COUNT};
pub use math::{point_in_triangle, Vec2, Vec3};
pub use raster::{BoundingBox, Canvas, Glyph, GlyphStyle};
pub use shade::Light;
pub use spin::Spin;
pub use timer::{frame_budget, frame_period, FrameTimer};
