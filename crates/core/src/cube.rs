//! Cube geometry: vertices, face table, backface culling, shading, projection.
//!
//! Nothing here is cached. Each call rebuilds the eight vertices from the
//! current origin and rotation, so there is no derived state to go stale.

use crate::math::{Vec2, Vec3};
use crate::raster::{rasterize, BoundingBox, Canvas, GlyphStyle};
use crate::shade::Light;
use crate::types::{VIEW_DIRECTION, Y_SCALE};

/// Number of cube corners.
pub const VERTEX_COUNT: usize = 8;

/// Vertex indices of each face, in [`Face`] order.
///
/// The first three entries of a row define the face normal
/// `(v1 - v0) x (v2 - v0)`; the quad is split along the `v0`-`v2` diagonal.
const FACE_VERTICES: [[usize; 4]; Face::COUNT] = [
    [0, 1, 2, 3], // front
    [4, 5, 6, 7], // back
    [4, 7, 1, 0], // left
    [3, 2, 6, 5], // right
    [4, 0, 3, 5], // top
    [1, 7, 6, 2], // bottom
];

/// Corner offsets in units of the half side, in vertex index order.
const CORNERS: [[f64; 3]; VERTEX_COUNT] = [
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// One of the six cube faces.
///
/// Names follow the unrotated cube: `Front` sits at `-Z`, `Top` at `-Y`
/// (screen rows grow downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const COUNT: usize = 6;

    /// All faces in table order. Rasterization relies on this order.
    pub const ALL: [Face; Face::COUNT] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn vertex_indices(self) -> [usize; 4] {
        FACE_VERTICES[self.index()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

/// Six-bit set of faces; bit `i` is `Face::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceMask(u8);

impl FaceMask {
    pub const EMPTY: FaceMask = FaceMask(0);

    pub fn from_faces(faces: &[Face]) -> Self {
        let mut mask = Self::EMPTY;
        for face in faces {
            mask.insert(*face);
        }
        mask
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face.index();
    }

    pub fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

/// Un-normalized outward normal of `face`.
pub fn face_normal(vertices: &[Vec3; VERTEX_COUNT], face: Face) -> Vec3 {
    let [i0, i1, i2, _] = face.vertex_indices();
    let edge1 = vertices[i1] - vertices[i0];
    let edge2 = vertices[i2] - vertices[i0];
    edge1.cross(edge2)
}

/// Backface test against the fixed orthographic view direction.
pub fn faces_viewer(normal: Vec3) -> bool {
    normal.dot(Vec3::from_array(VIEW_DIRECTION)) < 0.0
}

/// Visibility mask for a set of world-space vertices.
pub fn visible_faces(vertices: &[Vec3; VERTEX_COUNT]) -> FaceMask {
    let mut mask = FaceMask::EMPTY;
    for face in Face::ALL {
        if faces_viewer(face_normal(vertices, face)) {
            mask.insert(face);
        }
    }
    mask
}

/// Squash `y` toward `anchor` by `factor`.
pub fn scale_y(y: f64, anchor: f64, factor: f64) -> f64 {
    anchor + (y - anchor) * factor
}

/// Inverse of [`scale_y`]. `factor` must be non-zero.
pub fn unscale_y(y: f64, anchor: f64, factor: f64) -> f64 {
    anchor + (y - anchor) / factor
}

/// Orthographic projection followed by the vertical squash.
pub fn project(vertices: &[Vec3; VERTEX_COUNT], y_anchor: f64, y_scale: f64) -> [Vec2; VERTEX_COUNT] {
    vertices.map(|v| {
        let p = v.xy();
        Vec2::new(p.x, scale_y(p.y, y_anchor, y_scale))
    })
}

/// An axis-aligned cube spun about its own centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    side_length: f64,
    origin: Vec3,
    rotation: Vec3,
    light: Light,
    y_scale: f64,
    glyph_style: GlyphStyle,
}

impl Cube {
    pub fn new(side_length: f64) -> Self {
        Self {
            side_length,
            origin: Vec3::ZERO,
            rotation: Vec3::ZERO,
            light: Light::default(),
            y_scale: Y_SCALE,
            glyph_style: GlyphStyle::default(),
        }
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.light = light;
        self
    }

    pub fn with_y_scale(mut self, y_scale: f64) -> Self {
        self.y_scale = y_scale;
        self
    }

    pub fn with_glyph_style(mut self, glyph_style: GlyphStyle) -> Self {
        self.glyph_style = glyph_style;
        self
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn light(&self) -> Light {
        self.light
    }

    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    pub fn glyph_style(&self) -> GlyphStyle {
        self.glyph_style
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Euler angles in radians, applied X then Y then Z.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// World-space corners in vertex index order:
    ///
    /// | idx | corner (relative to origin, `d = side / 2`) |
    /// |-----|------|
    /// | 0 | (-d, -d, -d) |
    /// | 1 | (-d, +d, -d) |
    /// | 2 | (+d, +d, -d) |
    /// | 3 | (+d, -d, -d) |
    /// | 4 | (-d, -d, +d) |
    /// | 5 | (+d, -d, +d) |
    /// | 6 | (+d, +d, +d) |
    /// | 7 | (-d, +d, +d) |
    ///
    /// Each corner is rotated about the origin by the current rotation.
    pub fn vertices(&self) -> [Vec3; VERTEX_COUNT] {
        let d = self.side_length / 2.0;
        let o = self.origin;
        CORNERS.map(|[x, y, z]| {
            Vec3::new(o.x + x * d, o.y + y * d, o.z + z * d).rotate_about(o, self.rotation)
        })
    }

    pub fn visible_faces(&self) -> FaceMask {
        visible_faces(&self.vertices())
    }

    /// Flat brightness of `face` under the cube's light.
    pub fn brightness(&self, face: Face) -> f64 {
        self.brightness_of(&self.vertices(), face)
    }

    fn brightness_of(&self, vertices: &[Vec3; VERTEX_COUNT], face: Face) -> f64 {
        // A zero normal only occurs for a zero-sized cube; no diffuse term then.
        match face_normal(vertices, face).try_normalize() {
            Some(n) => self.light.brightness(n),
            None => self.light.ambient(),
        }
    }

    /// Screen-space corners with the vertical squash about `y_anchor`.
    pub fn project(&self, y_anchor: f64) -> [Vec2; VERTEX_COUNT] {
        project(&self.vertices(), y_anchor, self.y_scale)
    }

    /// Run the full pipeline into `canvas`: vertices, projection, culling,
    /// shading and rasterization.
    ///
    /// Returns the bounding box that was scanned.
    pub fn draw<C: Canvas + ?Sized>(&self, y_anchor: f64, canvas: &mut C) -> BoundingBox {
        let vertices = self.vertices();
        let points = project(&vertices, y_anchor, self.y_scale);
        let visible = visible_faces(&vertices);

        let mut brightness = [0.0; Face::COUNT];
        for face in visible.iter() {
            brightness[face.index()] = self.brightness_of(&vertices, face);
        }

        rasterize(&points, visible, &brightness, self.glyph_style, canvas)
    }
}
