// Shooting stars: short-lived streaks spawned on a timer.
//
// `StarPool` owns the active stars. The web frontend spawns into it from an
// interval timer and removes each star by id from a one-shot timeout, while
// the frame loop advances whatever is currently active.

use super::constants::{
    STAR_LIFETIME_SEC, STAR_SPAWN_X_SPREAD, STAR_SPAWN_Y_MIN, STAR_SPAWN_Y_SPAN,
    STAR_SPAWN_Z_SPREAD,
};
use fnv::FnvHashMap;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(u64);

#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub position: Vec3,
    /// World units per frame.
    pub velocity: Vec3,
    /// Scene time (seconds) at creation.
    pub created_at: f32,
}

impl ShootingStar {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, created_at: f32) -> Self {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * STAR_SPAWN_X_SPREAD,
            rng.gen::<f32>() * STAR_SPAWN_Y_SPAN + STAR_SPAWN_Y_MIN,
            (rng.gen::<f32>() - 0.5) * STAR_SPAWN_Z_SPREAD,
        );
        let velocity = Vec3::new(
            -0.1 - rng.gen::<f32>() * 0.1,
            -0.05 - rng.gen::<f32>() * 0.05,
            0.0,
        );
        Self {
            position,
            velocity,
            created_at,
        }
    }

    /// Whether the star is within its lifetime at scene time `now`.
    #[inline]
    pub fn is_live_at(&self, now: f32) -> bool {
        now >= self.created_at && now - self.created_at < STAR_LIFETIME_SEC
    }
}

#[derive(Default)]
pub struct StarPool {
    stars: FnvHashMap<StarId, ShootingStar>,
    next_id: u64,
}

impl StarPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, star: ShootingStar) -> StarId {
        let id = StarId(self.next_id);
        self.next_id += 1;
        self.stars.insert(id, star);
        id
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f32) -> StarId {
        self.insert(ShootingStar::random(rng, now))
    }

    /// Remove a star; returns it if it was still active.
    pub fn remove(&mut self, id: StarId) -> Option<ShootingStar> {
        self.stars.remove(&id)
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.stars.contains_key(&id)
    }

    pub fn get(&self, id: StarId) -> Option<&ShootingStar> {
        self.stars.get(&id)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StarId, &ShootingStar)> {
        self.stars.iter().map(|(id, s)| (*id, s))
    }

    /// Move every active star by one frame of velocity.
    pub fn advance(&mut self) {
        for star in self.stars.values_mut() {
            star.position += star.velocity;
        }
    }

    pub fn clear(&mut self) {
        self.stars.clear();
    }
}
