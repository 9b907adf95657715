// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_converge_without_overshoot() {
    for f in [POINTER_SMOOTHING, BASS_SMOOTHING] {
        assert!(f > 0.0 && f <= 1.0);
    }
    assert!(BASS_REST_EPSILON > 0.0 && BASS_REST_EPSILON < 1e-3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn galaxy_ranges_are_well_formed() {
    assert!(GALAXY_MIN_POINTS < GALAXY_MAX_POINTS);
    assert!(GALAXY_MIN_RADIUS > 0.0 && GALAXY_MIN_RADIUS < GALAXY_MAX_RADIUS);
    assert!(GALAXY_FLATTENING > 0.0 && GALAXY_FLATTENING < 1.0);
    // the whole field lies in front of the far plane
    assert!(GALAXY_FIELD_DEPTH_OFFSET - GALAXY_FIELD_EXTENT[2] * 0.5 > -1000.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_lifetime_is_shorter_than_spawn_interval() {
    assert!(STAR_LIFETIME_SEC * 1000.0 < STAR_SPAWN_INTERVAL_MS as f32);
    // so the renderer's star batch never overflows
    assert!(MAX_ACTIVE_STARS >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tesseract_never_reaches_the_projection_singularity() {
    // the largest |w| after any rotation is the vertex's xw radius
    let max_w = (2.0 * TESSERACT_HALF_EXTENT * TESSERACT_HALF_EXTENT).sqrt();
    assert!(max_w < TESSERACT_VIEW_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_constants() {
    assert!(DRAW_UNIFORM_STRIDE >= 256 && DRAW_UNIFORM_STRIDE % 256 == 0);
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(BLOOM_RADIUS >= 0.0 && BLOOM_RADIUS <= 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(ANALYSER_FFT_SIZE.is_power_of_two() && ANALYSER_FFT_SIZE as usize / 2 >= BASS_BINS);
}

#[test]
fn palette_matches_the_neon_scheme() {
    assert_eq!(SOLID_COLOR, 0x00ffff);
    assert_eq!(TESSERACT_COLOR, 0xff00ff);
    assert_eq!(TORUS_COLOR, 0xff00ff);
}
