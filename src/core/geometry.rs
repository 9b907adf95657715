// Static local-space geometry for the scene objects, plus the transform type
// the frame loop animates.

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Position, XYZ Euler rotation and scale, composed as `T * R * S`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

/// Vertices plus line-list index pairs.
#[derive(Clone, Debug, Default)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(u32, u32)>,
}

impl Wireframe {
    /// Flatten into line-list endpoints.
    pub fn segments(&self) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(self.edges.len() * 2);
        for &(a, b) in &self.edges {
            out.push(self.vertices[a as usize]);
            out.push(self.vertices[b as usize]);
        }
        out
    }
}

/// Regular icosahedron with circumradius `radius`: 12 vertices, 30 edges.
pub fn icosahedron(radius: f32) -> Wireframe {
    let t = (1.0 + 5f32.sqrt()) * 0.5;
    let raw = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let vertices: Vec<Vec3> = raw
        .iter()
        .map(|p| Vec3::from(*p).normalize() * radius)
        .collect();

    // Neighbours are exactly the pairs at the minimum separation.
    let mut min_d = f32::MAX;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            min_d = min_d.min(vertices[i].distance(vertices[j]));
        }
    }
    let tol = min_d * 1e-3;
    let mut edges = Vec::with_capacity(30);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if (vertices[i].distance(vertices[j]) - min_d).abs() <= tol {
                edges.push((i as u32, j as u32));
            }
        }
    }
    Wireframe { vertices, edges }
}

/// Torus in the xy plane. Each quad of the grid contributes its ring edge,
/// its tube edge and one diagonal, matching a triangle wireframe.
pub fn torus(radius: f32, tube: f32, radial_segments: usize, tubular_segments: usize) -> Wireframe {
    let mut vertices = Vec::with_capacity((radial_segments + 1) * (tubular_segments + 1));
    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let v = j as f32 / radial_segments as f32 * TAU;
            vertices.push(Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            ));
        }
    }
    let row = tubular_segments as u32 + 1;
    let mut edges = Vec::with_capacity(radial_segments * tubular_segments * 3);
    for j in 1..=radial_segments as u32 {
        for i in 1..=tubular_segments as u32 {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            edges.push((a, b));
            edges.push((b, c));
            edges.push((a, c));
        }
    }
    Wireframe { vertices, edges }
}

/// `count` points uniformly distributed in an axis-aligned cube of side `extent`.
pub fn particle_field<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}

/// Endpoints of a streak of `length` trailing behind a point moving along `velocity`.
pub fn trail_segment(position: Vec3, velocity: Vec3, length: f32) -> [Vec3; 2] {
    let dir = velocity.normalize_or_zero();
    [position, position - dir * length]
}
