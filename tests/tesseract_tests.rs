// Host-side tests for the tesseract tables and 4D -> 3D projection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod tesseract {
        include!("../src/core/tesseract.rs");
    }
}

use glam::{Vec3, Vec4};
use scene_core::tesseract::*;

fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-6
}

#[test]
fn vertex_coordinates_follow_index_bits() {
    let t = Tesseract::new();
    for (i, v) in t.vertices().iter().enumerate() {
        let expect = |bit: usize| if i & (1 << bit) != 0 { 0.5 } else { -0.5 };
        assert_eq!(*v, Vec4::new(expect(0), expect(1), expect(2), expect(3)), "vertex {i}");
    }
}

#[test]
fn edges_connect_indices_one_bit_apart() {
    let t = Tesseract::new();
    let edges = t.edges();
    assert_eq!(edges.len(), 32);
    for &(i, j) in edges {
        assert!(i < j);
        assert!((i ^ j).is_power_of_two(), "({i}, {j}) differ in more than one bit");
    }
    // every vertex has exactly four neighbours
    for v in 0..VERTEX_COUNT {
        let degree = edges.iter().filter(|&&(i, j)| i == v || j == v).count();
        assert_eq!(degree, 4, "vertex {v}");
    }
}

#[test]
fn zero_time_applies_only_the_projection_factor() {
    assert_eq!(Tesseract::angles_at(0.0), (0.0, 0.0));
    let t = Tesseract::new();
    let projected = t.project_vertices(0.0);
    for (v, p) in t.vertices().iter().zip(projected.iter()) {
        let k = 1.0 / (2.0 - v.w);
        assert!(approx_eq(*p, Vec3::new(v.x * k, v.y * k, v.z * k)), "{v:?} -> {p:?}");
    }
    // concrete value: (+h, +h, +h, +h) -> 0.5 / 1.5
    let third = 0.5 / 1.5;
    assert!(approx_eq(projected[15], Vec3::splat(third)));
}

#[test]
fn projection_factor_is_clamped_near_the_singularity() {
    for w in [2.0, 1.999_999, 2.000_001, 1.9999, 2.0001] {
        let k = projection_factor(w);
        assert!(k.abs() <= 1000.0, "w={w} gave {k}");
    }
    assert_eq!(projection_factor(2.0), 1000.0);
    let p = project_vertex(Vec4::new(0.5, 0.5, 0.5, 2.0), 0.0, 0.0);
    assert!(p.abs().max_element() <= 500.0 + 1e-3);
}

#[test]
fn plane_rotation_preserves_length() {
    let (a, b) = rotate_plane(0.3, -0.4, 1.234);
    assert!(((a * a + b * b).sqrt() - 0.5).abs() < 1e-6);
    let (a, b) = rotate_plane(1.0, 0.0, std::f32::consts::FRAC_PI_2);
    assert!(a.abs() < 1e-6 && (b - 1.0).abs() < 1e-6);
}

#[test]
fn projection_is_a_pure_function_of_time() {
    let t = Tesseract::new();
    for time in [0.0, 0.016, 1.5, 42.0, 1234.5] {
        assert_eq!(t.project(time), t.project(time));
        assert_eq!(t.project(time), Tesseract::new().project(time));
    }
}

#[test]
fn segments_follow_edge_order() {
    let t = Tesseract::new();
    let time = 3.7;
    let verts = t.project_vertices(time);
    let segs = t.project(time);
    assert_eq!(segs.len(), SEGMENT_POINT_COUNT);
    for (k, &(i, j)) in t.edges().iter().enumerate() {
        assert_eq!(segs[2 * k], verts[i]);
        assert_eq!(segs[2 * k + 1], verts[j]);
    }
}

#[test]
fn yz_rotation_uses_the_xw_rotated_vertex() {
    // xw rotation leaves y/z alone, yz rotation leaves x/w alone
    let v = Vec4::new(0.5, -0.5, 0.5, -0.5);
    let (xw, yz) = Tesseract::angles_at(2.0);
    let p = project_vertex(v, xw, yz);
    let (x, w) = rotate_plane(v.x, v.w, xw);
    let (y, z) = rotate_plane(v.y, v.z, yz);
    let k = 1.0 / (2.0 - w);
    assert!(approx_eq(p, Vec3::new(x * k, y * k, z * k)));
}
