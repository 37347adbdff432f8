//! Terminal output for the cube renderer.
//!
//! Frames are composed into a plain framebuffer (pure, testable) and then
//! flushed to the terminal by [`TerminalRenderer`], which only emits the cells
//! that changed since the previous frame.
//!
//! - [`fb`]: styled cells; implements `core::Canvas` so the rasterizer can
//!   paint into it directly
//! - [`cube_view`]: frame layout (window border, cube, frame-time line)
//! - [`window`]: border geometry
//! - [`renderer`]: crossterm backend, raw mode and alternate screen

pub mod cube_view;
pub mod fb;
pub mod renderer;
pub mod window;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use cube_view::{CubeView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use window::Window;
