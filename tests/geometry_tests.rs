// Host-side tests for static wireframe geometry, transforms and the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
}

use glam::{Mat4, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::camera::*;
use scene_core::geometry::*;

#[test]
fn icosahedron_has_twelve_vertices_on_the_sphere() {
    let ico = icosahedron(2.0);
    assert_eq!(ico.vertices.len(), 12);
    for v in &ico.vertices {
        assert!((v.length() - 2.0).abs() < 1e-5);
    }
}

#[test]
fn icosahedron_has_thirty_equal_edges_five_per_vertex() {
    let ico = icosahedron(2.0);
    assert_eq!(ico.edges.len(), 30);
    let first = ico.vertices[ico.edges[0].0 as usize].distance(ico.vertices[ico.edges[0].1 as usize]);
    for &(a, b) in &ico.edges {
        let d = ico.vertices[a as usize].distance(ico.vertices[b as usize]);
        assert!((d - first).abs() < 1e-4);
    }
    for v in 0..12u32 {
        let degree = ico.edges.iter().filter(|&&(a, b)| a == v || b == v).count();
        assert_eq!(degree, 5);
    }
    assert_eq!(ico.segments().len(), 60);
}

#[test]
fn torus_counts_match_its_segments() {
    let t = torus(0.4, 0.1, 16, 100);
    assert_eq!(t.vertices.len(), 17 * 101);
    assert_eq!(t.edges.len(), 16 * 100 * 3);
    for v in &t.vertices {
        let ring = (v.x * v.x + v.y * v.y).sqrt();
        let tube = ((ring - 0.4).powi(2) + v.z * v.z).sqrt();
        assert!((tube - 0.1).abs() < 1e-5);
    }
    let n = t.vertices.len() as u32;
    assert!(t.edges.iter().all(|&(a, b)| a < n && b < n));
}

#[test]
fn particle_field_stays_inside_its_cube() {
    let mut rng = StdRng::seed_from_u64(4);
    let pts = particle_field(&mut rng, 5000, 25.0);
    assert_eq!(pts.len(), 5000);
    assert!(pts.iter().all(|p| p.abs().max_element() <= 12.5));
}

#[test]
fn trail_points_back_along_velocity() {
    let [head, tail] = trail_segment(Vec3::new(1.0, 2.0, 0.0), Vec3::new(-0.3, -0.4, 0.0), 1.2);
    assert_eq!(head, Vec3::new(1.0, 2.0, 0.0));
    assert!((tail - Vec3::new(1.72, 2.96, 0.0)).length() < 1e-5);
    let [h, t] = trail_segment(Vec3::ONE, Vec3::ZERO, 1.2);
    assert_eq!(h, t);
}

#[test]
fn transform_composes_translation_rotation_scale() {
    let tr = Transform {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        scale: Vec3::splat(2.0),
    };
    let p = tr.matrix().transform_point3(Vec3::X);
    // scale to (2,0,0), rotate about y to (0,0,-2), then translate
    assert!((p - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-5);
    assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
}

#[test]
fn camera_looks_down_negative_z_from_five_units() {
    let mut cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    cam.set_viewport(1920.0, 1080.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(0.0, 1080.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);

    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
