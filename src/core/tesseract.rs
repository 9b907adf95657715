// Tesseract (4D hypercube) tables and the per-frame 4D → 3D projection.
//
// Vertex `i` has coordinate `+h` on axis `k` when bit `k` of `i` is set and
// `-h` otherwise (bit 0 → x, 1 → y, 2 → z, 3 → w). Two vertices share an edge
// when their indices differ in exactly one bit.

use super::constants::{
    TESSERACT_ANGLE_RATE, TESSERACT_HALF_EXTENT, TESSERACT_PROJECTION_LIMIT,
    TESSERACT_VIEW_DISTANCE, TESSERACT_XW_RATE, TESSERACT_YZ_RATE,
};
use glam::{Vec3, Vec4};

pub const VERTEX_COUNT: usize = 16;
pub const EDGE_COUNT: usize = 32;
/// Two endpoints per edge, laid out for a line-list draw.
pub const SEGMENT_POINT_COUNT: usize = EDGE_COUNT * 2;

pub struct Tesseract {
    vertices: [Vec4; VERTEX_COUNT],
    edges: [(usize, usize); EDGE_COUNT],
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::new()
    }
}

impl Tesseract {
    pub fn new() -> Self {
        Self {
            vertices: build_vertices(TESSERACT_HALF_EXTENT),
            edges: build_edges(),
        }
    }

    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize); EDGE_COUNT] {
        &self.edges
    }

    /// Rotation angles `(xw, yz)` at elapsed time `t` seconds.
    #[inline]
    pub fn angles_at(t: f32) -> (f32, f32) {
        let angle = t * TESSERACT_ANGLE_RATE;
        (angle * TESSERACT_XW_RATE, angle * TESSERACT_YZ_RATE)
    }

    /// Project every vertex for time `t` (vertex order).
    pub fn project_vertices(&self, t: f32) -> [Vec3; VERTEX_COUNT] {
        let (xw, yz) = Self::angles_at(t);
        let mut out = [Vec3::ZERO; VERTEX_COUNT];
        for (dst, v) in out.iter_mut().zip(self.vertices.iter()) {
            *dst = project_vertex(*v, xw, yz);
        }
        out
    }

    /// Line-segment endpoints for time `t`, two per edge in edge order.
    pub fn project(&self, t: f32) -> [Vec3; SEGMENT_POINT_COUNT] {
        let projected = self.project_vertices(t);
        let mut out = [Vec3::ZERO; SEGMENT_POINT_COUNT];
        for (k, &(i, j)) in self.edges.iter().enumerate() {
            out[2 * k] = projected[i];
            out[2 * k + 1] = projected[j];
        }
        out
    }
}

fn build_vertices(h: f32) -> [Vec4; VERTEX_COUNT] {
    let sign = |i: usize, bit: usize| if i & (1 << bit) != 0 { h } else { -h };
    let mut out = [Vec4::ZERO; VERTEX_COUNT];
    for (i, v) in out.iter_mut().enumerate() {
        *v = Vec4::new(sign(i, 0), sign(i, 1), sign(i, 2), sign(i, 3));
    }
    out
}

fn build_edges() -> [(usize, usize); EDGE_COUNT] {
    let mut out = [(0usize, 0usize); EDGE_COUNT];
    let mut n = 0;
    for i in 0..VERTEX_COUNT {
        for j in (i + 1)..VERTEX_COUNT {
            if (i ^ j).is_power_of_two() {
                out[n] = (i, j);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, EDGE_COUNT);
    out
}

/// Rotate the pair `(a, b)` by `theta` radians.
#[inline]
pub fn rotate_plane(a: f32, b: f32, theta: f32) -> (f32, f32) {
    let (s, c) = theta.sin_cos();
    (a * c - b * s, a * s + b * c)
}

/// Perspective factor for a rotated `w`, clamped near the singularity.
#[inline]
pub fn projection_factor(w: f32) -> f32 {
    (1.0 / (TESSERACT_VIEW_DISTANCE - w))
        .clamp(-TESSERACT_PROJECTION_LIMIT, TESSERACT_PROJECTION_LIMIT)
}

/// Rotate in the xw plane, then in the yz plane (using the rotated values),
/// then project to 3D.
#[inline]
pub fn project_vertex(v: Vec4, xw_angle: f32, yz_angle: f32) -> Vec3 {
    let (x, w) = rotate_plane(v.x, v.w, xw_angle);
    let (y, z) = rotate_plane(v.y, v.z, yz_angle);
    let k = projection_factor(w);
    Vec3::new(x * k, y * k, z * k)
}
