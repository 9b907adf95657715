// Host-side tests for procedural galaxy generation and color helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod galaxy {
        include!("../src/core/galaxy.rs");
    }
}

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::color::*;
use scene_core::galaxy::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn thousand_galaxies_respect_generation_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let galaxies = generate_field(&mut rng, 1000);
    assert_eq!(galaxies.len(), 1000);
    for g in &galaxies {
        let n = g.point_count();
        assert!((200..700).contains(&n), "point count {n}");
        assert!(g.radius >= 0.4 && g.radius < 1.2, "radius {}", g.radius);
        assert_eq!(g.colors.len(), n);
        for p in &g.positions {
            assert!(p.y.abs() <= 0.15 * g.radius + 1e-6, "y={} radius={}", p.y, g.radius);
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            assert!(planar <= g.radius + 1e-5);
        }
        assert!(g.spin_speed.abs() <= 0.0025);
        assert_eq!(g.rotation.z, 0.0);
    }
}

#[test]
fn field_positions_sit_behind_the_camera_target() {
    let mut rng = StdRng::seed_from_u64(99);
    for g in generate_field(&mut rng, 500) {
        assert!(g.position.x.abs() <= 125.0);
        assert!(g.position.y.abs() <= 75.0);
        assert!(g.position.z >= -305.0 && g.position.z <= -55.0, "z={}", g.position.z);
    }
}

#[test]
fn point_color_fades_from_core_to_rim() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = Galaxy::generate(&mut rng);
    let core = hex_rgb(0xfff8e7);
    for (p, c) in g.positions.iter().zip(&g.colors) {
        let r = (p.x * p.x + p.z * p.z).sqrt();
        let expect = core.lerp(g.rim_color, r / g.radius);
        assert!(close(*c, expect), "{c:?} vs {expect:?}");
    }
}

#[test]
fn spin_only_turns_about_z() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut g = Galaxy::generate(&mut rng);
    let before = g.rotation;
    for _ in 0..10 {
        g.spin();
    }
    assert_eq!(g.rotation.x, before.x);
    assert_eq!(g.rotation.y, before.y);
    assert!((g.rotation.z - 10.0 * g.spin_speed).abs() < 1e-6);
}

#[test]
fn same_seed_same_field() {
    let a = generate_field(&mut StdRng::seed_from_u64(5), 4);
    let b = generate_field(&mut StdRng::seed_from_u64(5), 4);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.positions, y.positions);
        assert_eq!(x.position, y.position);
    }
}

#[test]
fn hsl_matches_known_colors() {
    assert!(close(hsl_rgb(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
    assert!(close(hsl_rgb(1.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
    assert!(close(hsl_rgb(2.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
    assert!(close(hsl_rgb(0.5, 0.0, 0.25), Vec3::splat(0.25)));
    assert!(close(hsl_rgb(0.0, 0.8, 0.5), Vec3::new(0.9, 0.1, 0.1)));
}

#[test]
fn hex_and_linear_conversions() {
    assert!(close(hex_rgb(0x00ffff), Vec3::new(0.0, 1.0, 1.0)));
    assert!(close(hex_rgb(0xff00ff), Vec3::new(1.0, 0.0, 1.0)));
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-5);
    assert!((srgb_to_linear(0.5) - 0.214_041).abs() < 1e-4);
}
