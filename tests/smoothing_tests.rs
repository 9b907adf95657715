// Host-side tests for per-frame exponential smoothing and the bass scale.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
}

use glam::Vec2;
use scene_core::smoothing::*;

#[test]
fn approach_converges_monotonically_without_overshoot() {
    for (start, target) in [(1.0_f32, 1.4_f32), (1.4, 1.0), (1.0, 1.0001), (0.0, -3.0)] {
        let mut cur = start;
        let mut prev_gap = (target - cur).abs();
        for _ in 0..500 {
            cur = approach(cur, target, 0.1);
            let gap = (target - cur).abs();
            assert!(gap <= prev_gap, "gap grew: {prev_gap} -> {gap}");
            if start < target {
                assert!(cur <= target);
            } else {
                assert!(cur >= target);
            }
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-5, "settled {prev_gap} away from {target}");
    }
}

#[test]
fn bass_energy_averages_the_lowest_bins() {
    assert_eq!(bass_energy(&[]), 0.0);
    assert_eq!(bass_energy(&[100]), 100.0);
    assert_eq!(bass_energy(&[0, 100, 200, 100, 255, 255]), 100.0);
    assert!((bass_target(&[255; 64]) - 1.4).abs() < 1e-6);
    assert_eq!(bass_target(&[0; 64]), 1.0);
}

#[test]
fn bass_scale_tracks_a_constant_target() {
    let mut s = BassScale::default();
    let bins = [255u8; 64];
    let mut prev = s.current;
    for _ in 0..200 {
        assert!(s.step(Some(&bins)));
        assert!(s.current >= prev);
        assert!(s.current <= 1.4 + 1e-6);
        prev = s.current;
    }
    assert!((s.current - 1.4).abs() < 1e-4);
}

#[test]
fn bass_scale_relaxes_to_exactly_one() {
    let mut s = BassScale { current: 1.3 };
    let mut frames = 0;
    while s.step(None) {
        assert!(s.current >= 1.0);
        frames += 1;
        assert!(frames < 1000, "never settled");
    }
    assert_eq!(s.current, 1.0);
    // settled: further steps report no change
    assert!(!s.step(None));
}

#[test]
fn pointer_eases_toward_its_target() {
    let mut p = SmoothedPointer::default();
    p.set_target(Vec2::new(10.0, -4.0));
    let first = p.step();
    assert!((first - Vec2::new(0.2, -0.08)).length() < 1e-6);
    for _ in 0..2000 {
        p.step();
    }
    assert!((p.current - p.target).length() < 1e-3);
    assert_eq!(p.target, Vec2::new(10.0, -4.0));
}
