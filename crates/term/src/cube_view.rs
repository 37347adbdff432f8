//! CubeView: maps a `core::Cube` and frame stats into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{BoundingBox, Cube, FrameTimer, Vec3};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, ORIGIN_DEPTH, PADDING_X, PADDING_Y};
use crate::window::Window;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Centre of the viewport at the cube's depth.
    pub fn cube_origin(&self) -> Vec3 {
        Vec3::new(
            self.width as f64 / 2.0,
            self.height as f64 / 2.0,
            ORIGIN_DEPTH,
        )
    }

    /// Row the vertical squash is anchored to.
    pub fn y_anchor(&self) -> f64 {
        self.height as f64 / 2.0
    }
}

/// Frame layout: bordered window, the cube, and an average frame time line.
pub struct CubeView {
    pad_x: u16,
    pad_y: u16,
    border: CellStyle,
    label: CellStyle,
    value: CellStyle,
}

impl Default for CubeView {
    fn default() -> Self {
        Self::new(PADDING_X, PADDING_Y)
    }
}

impl CubeView {
    pub fn new(pad_x: u16, pad_y: u16) -> Self {
        Self {
            pad_x,
            pad_y,
            border: CellStyle::fg(Rgb::new(100, 140, 255)),
            label: CellStyle::default(),
            value: CellStyle::fg(Rgb::new(100, 240, 120)),
        }
    }

    /// Window for `viewport`, if the terminal is large enough for one.
    pub fn layout(&self, viewport: Viewport) -> Option<Window> {
        Window::inset(viewport, self.pad_x, self.pad_y)
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// The buffer is cleared first, so cells the cube left since the previous
    /// frame come back blank. Reusing one buffer across frames keeps this
    /// allocation-free once the size settles.
    ///
    /// Returns the bounding box scanned for the cube.
    pub fn render_into(
        &self,
        cube: &Cube,
        timer: &FrameTimer,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> BoundingBox {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let window = self.layout(viewport);
        if let Some(w) = window {
            w.draw_border(fb, self.border);
        }

        let bounds = cube.draw(viewport.y_anchor(), fb);

        let status = match window {
            Some(w) => Some((w.x, w.status_row())),
            None => viewport.height.checked_sub(1).map(|y| (0, y)),
        };
        if let Some((x, y)) = status {
            self.draw_frame_time(fb, x, y, timer);
        }

        bounds
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, cube: &Cube, timer: &FrameTimer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(cube, timer, viewport, &mut fb);
        fb
    }

    fn draw_frame_time(&self, fb: &mut FrameBuffer, x: u16, y: u16, timer: &FrameTimer) {
        let x = fb.put_str(x, y, "Avg frame time: ", self.label);
        fb.put_fmt(x, y, format_args!("{:.1}ms", timer.average_ms()), self.value);
    }
}
