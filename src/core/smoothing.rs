// Exponential smoothing used by the frame loop.
//
// Every step is `current += (target - current) * factor`, applied once per
// frame. Factors in `(0, 1]` converge monotonically without overshoot.

use super::constants::{
    BASS_BINS, BASS_MAX_BOOST, BASS_REST_EPSILON, BASS_SMOOTHING, POINTER_SMOOTHING,
};
use glam::Vec2;

#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Pointer / tilt offset: `target` jumps on input, `current` eases toward it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothedPointer {
    pub target: Vec2,
    pub current: Vec2,
}

impl SmoothedPointer {
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * POINTER_SMOOTHING;
        self.current
    }
}

/// Scale the main solid follows while the bass effect is active.
#[derive(Clone, Copy, Debug)]
pub struct BassScale {
    pub current: f32,
}

impl Default for BassScale {
    fn default() -> Self {
        Self { current: 1.0 }
    }
}

impl BassScale {
    /// Advance one frame. `bins` is the analyser's byte spectrum when the
    /// effect is enabled and an analyser is attached, `None` otherwise.
    ///
    /// Returns `true` when the scale changed this frame.
    pub fn step(&mut self, bins: Option<&[u8]>) -> bool {
        match bins {
            Some(bins) => {
                self.current = approach(self.current, bass_target(bins), BASS_SMOOTHING);
                true
            }
            None => self.relax(),
        }
    }

    fn relax(&mut self) -> bool {
        if self.current == 1.0 {
            return false;
        }
        self.current = approach(self.current, 1.0, BASS_SMOOTHING);
        if (self.current - 1.0).abs() < BASS_REST_EPSILON {
            self.current = 1.0;
        }
        true
    }
}

/// Average of the lowest bass bins, in `0..=255`. Empty input reads as silence.
pub fn bass_energy(bins: &[u8]) -> f32 {
    let low = &bins[..bins.len().min(BASS_BINS)];
    if low.is_empty() {
        return 0.0;
    }
    low.iter().map(|&b| b as f32).sum::<f32>() / low.len() as f32
}

/// Target scale `1 + boost` with `boost` in `[0, BASS_MAX_BOOST]`.
#[inline]
pub fn bass_target(bins: &[u8]) -> f32 {
    1.0 + (bass_energy(bins) / 255.0) * BASS_MAX_BOOST
}
