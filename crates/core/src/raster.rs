//! Rasterizer: turns projected cube faces into terminal cells.
//!
//! For every integer cell inside the bounding box of the projected points the
//! rasterizer decides whether a visible face covers it and paints either that
//! face's shaded glyph or a blank. Every cell in the box is written each call.
//!
//! Output goes through the [`Canvas`] trait so this module stays free of any
//! terminal I/O.

use arrayvec::ArrayVec;

use crate::cube::{Face, FaceMask, VERTEX_COUNT};
use crate::math::{point_in_triangle, Vec2};
use crate::types::{Rgb, GREEN_OFFSET, LUMINANCE_RAMP, RED_OFFSET, TEXTURE};

/// A printable character with a 24-bit foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
}

/// Destination for rasterized cells.
///
/// Coordinates are signed: the cube may extend past the edges of the target,
/// and implementations are expected to clip.
pub trait Canvas {
    /// Paint a face glyph at `(x, y)`.
    fn paint(&mut self, x: i32, y: i32, glyph: Glyph);

    /// Paint an empty cell at `(x, y)`.
    fn blank(&mut self, x: i32, y: i32);
}

/// How a brightness value picks its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Cycle the `CUBE` texture across columns; brightness only affects color.
    #[default]
    Texture,
    /// Pick from a dark-to-bright luminance ramp.
    Ramp,
}

/// Inclusive integer bounds of the scan region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Floor of the minimum and ceiling of the maximum, per axis.
    ///
    /// An empty slice yields an empty box.
    pub fn from_points(points: &[Vec2]) -> Self {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        // Float-to-int casts saturate, so infinities land on i32::MAX/MIN.
        Self {
            min_x: min_x.floor() as i32,
            max_x: max_x.ceil() as i32,
            min_y: min_y.floor() as i32,
            max_y: max_y.ceil() as i32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn width(&self) -> u32 {
        (self.max_x as i64 - self.min_x as i64 + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y as i64 - self.min_y as i64 + 1).max(0) as u32
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x as f64
            && p.x <= self.max_x as f64
            && p.y >= self.min_y as f64
            && p.y <= self.max_y as f64
    }
}

/// Map a brightness in `[0, 1]` to the face color.
///
/// Channels are `round(b * 255)` minus a fixed per-channel offset, clamped to
/// `0..=255`; blue has no offset.
pub fn brightness_to_rgb(brightness: f64) -> Rgb {
    let base = (brightness * 255.0).round() as i32;
    let channel = |offset: i32| (base - offset).clamp(0, 255) as u8;
    Rgb::new(channel(RED_OFFSET), channel(GREEN_OFFSET), channel(0))
}

/// Character and color for a face cell at `column`.
pub fn shade_glyph(brightness: f64, column: i32, style: GlyphStyle) -> Glyph {
    let ch = match style {
        GlyphStyle::Texture => TEXTURE[column.rem_euclid(TEXTURE.len() as i32) as usize],
        GlyphStyle::Ramp => {
            let last = LUMINANCE_RAMP.len() - 1;
            let idx = (brightness.clamp(0.0, 1.0) * last as f64).round() as usize;
            LUMINANCE_RAMP[idx.min(last)]
        }
    };
    Glyph {
        ch,
        fg: brightness_to_rgb(brightness),
    }
}

/// A visible face split along its 0-2 diagonal.
#[derive(Debug, Clone, Copy)]
struct FaceQuad {
    tris: [[Vec2; 3]; 2],
    brightness: f64,
}

impl FaceQuad {
    fn new(face: Face, points: &[Vec2; VERTEX_COUNT], brightness: f64) -> Self {
        let [i0, i1, i2, i3] = face.vertex_indices();
        Self {
            tris: [
                [points[i0], points[i2], points[i3]],
                [points[i0], points[i1], points[i2]],
            ],
            brightness,
        }
    }

    fn covers(&self, p: Vec2) -> bool {
        self.tris
            .iter()
            .any(|[a, b, c]| point_in_triangle(p, *a, *b, *c))
    }
}

/// Rasterize the visible faces of a projected cube into `canvas`.
///
/// `brightness` is indexed by face. When several visible faces cover a cell
/// the one latest in face order is painted; there is no depth test.
///
/// Returns the scanned bounding box.
pub fn rasterize<C: Canvas + ?Sized>(
    points: &[Vec2; VERTEX_COUNT],
    visible: FaceMask,
    brightness: &[f64; Face::COUNT],
    style: GlyphStyle,
    canvas: &mut C,
) -> BoundingBox {
    let bounds = BoundingBox::from_points(points);

    let quads: ArrayVec<FaceQuad, { Face::COUNT }> = Face::ALL
        .iter()
        .filter(|face| visible.contains(**face))
        .map(|face| FaceQuad::new(*face, points, brightness[face.index()]))
        .collect();

    for x in bounds.min_x..=bounds.max_x {
        for y in bounds.min_y..=bounds.max_y {
            let p = Vec2::new(x as f64, y as f64);
            match quads.iter().rev().find(|q| q.covers(p)) {
                Some(quad) => canvas.paint(x, y, shade_glyph(quad.brightness, x, style)),
                None => canvas.blank(x, y),
            }
        }
    }

    bounds
}
