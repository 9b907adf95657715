// Host-side tests for the shooting-star pool and its timer-driven lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod stars {
        include!("../src/core/stars.rs");
    }
}

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::constants::{STAR_LIFETIME_SEC, STAR_SPAWN_INTERVAL_MS};
use scene_core::stars::*;

/// Stand-in for the browser's timers: spawns on an interval and one-shot
/// removals, both fired in time order.
struct FakeTimers {
    pool: StarPool,
    rng: StdRng,
    now: f32,
    next_spawn: f32,
    removals: Vec<(f32, StarId)>,
}

impl FakeTimers {
    fn new() -> Self {
        let interval = STAR_SPAWN_INTERVAL_MS as f32 / 1000.0;
        Self {
            pool: StarPool::new(),
            rng: StdRng::seed_from_u64(1),
            now: 0.0,
            next_spawn: interval,
            removals: Vec::new(),
        }
    }

    fn run_until(&mut self, t: f32) {
        let interval = STAR_SPAWN_INTERVAL_MS as f32 / 1000.0;
        loop {
            let due_removal = self
                .removals
                .iter()
                .enumerate()
                .filter(|(_, (at, _))| *at <= t)
                .min_by(|a, b| a.1 .0.total_cmp(&b.1 .0))
                .map(|(i, (at, _))| (i, *at));
            let spawn_first = match due_removal {
                Some((_, at)) => self.next_spawn <= t && self.next_spawn < at,
                None => self.next_spawn <= t,
            };
            if spawn_first {
                self.now = self.next_spawn;
                let id = self.pool.spawn(&mut self.rng, self.now);
                self.removals.push((self.now + STAR_LIFETIME_SEC, id));
                self.next_spawn += interval;
            } else if let Some((i, at)) = due_removal {
                self.now = at;
                let (_, id) = self.removals.swap_remove(i);
                self.pool.remove(id);
            } else {
                break;
            }
        }
        self.now = t;
    }
}

#[test]
fn star_is_active_for_exactly_its_lifetime() {
    let mut timers = FakeTimers::new();
    timers.run_until(29.9);
    assert!(timers.pool.is_empty());

    timers.run_until(30.0);
    assert_eq!(timers.pool.len(), 1);
    let (id, star) = timers.pool.iter().next().map(|(id, s)| (id, s.clone())).unwrap();
    assert_eq!(star.created_at, 30.0);

    for t in [30.0, 31.0, 35.0, 39.99] {
        timers.run_until(t);
        assert!(timers.pool.contains(id), "missing at t={t}");
        assert!(star.is_live_at(t));
    }
    for t in [40.0, 45.0, 59.9] {
        timers.run_until(t);
        assert!(!timers.pool.contains(id), "still present at t={t}");
        assert!(!star.is_live_at(t));
    }
}

#[test]
fn at_most_one_star_at_a_time_with_default_timing() {
    let mut timers = FakeTimers::new();
    let mut seen = 0;
    let mut t = 0.0;
    while t < 300.0 {
        timers.run_until(t);
        assert!(timers.pool.len() <= 1, "t={t}");
        seen = seen.max(timers.pool.len());
        t += 0.5;
    }
    assert_eq!(seen, 1);
}

#[test]
fn removal_is_idempotent_and_ids_are_unique() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut pool = StarPool::new();
    let a = pool.spawn(&mut rng, 0.0);
    let b = pool.spawn(&mut rng, 0.0);
    assert_ne!(a, b);
    assert!(pool.remove(a).is_some());
    assert!(pool.remove(a).is_none());
    assert!(pool.contains(b));
    assert_eq!(pool.len(), 1);
    pool.clear();
    assert!(pool.is_empty());
    let c = pool.spawn(&mut rng, 1.0);
    assert_ne!(c, a);
    assert_ne!(c, b);
}

#[test]
fn advance_moves_every_star_by_its_velocity() {
    let mut pool = StarPool::new();
    let id = pool.insert(ShootingStar {
        position: Vec3::new(1.0, 10.0, 0.0),
        velocity: Vec3::new(-0.15, -0.07, 0.0),
        created_at: 0.0,
    });
    for _ in 0..10 {
        pool.advance();
    }
    let s = pool.get(id).unwrap();
    assert!((s.position - Vec3::new(-0.5, 9.3, 0.0)).abs().max_element() < 1e-4);
}

#[test]
fn random_stars_start_high_and_head_down_left() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..500 {
        let s = ShootingStar::random(&mut rng, 0.0);
        assert!(s.position.x.abs() <= 15.0);
        assert!(s.position.y >= 5.0 && s.position.y <= 15.0);
        assert!(s.position.z.abs() <= 5.0);
        assert!(s.velocity.x <= -0.1 && s.velocity.x >= -0.2);
        assert!(s.velocity.y <= -0.05 && s.velocity.y >= -0.1);
        assert_eq!(s.velocity.z, 0.0);
    }
}
