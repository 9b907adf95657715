// Scene model: every animated object and the per-frame update.
//
// `SceneState::update` is the whole frame step minus rendering. It is a
// function of elapsed time, the smoothed pointer and (optionally) the bass
// spectrum, so it runs the same on the host as in the browser.

use super::camera::Camera;
use super::constants::*;
use super::galaxy::{generate_field, Galaxy};
use super::geometry::{self, Transform, Wireframe};
use super::input::{
    is_single_touch, orientation_target, pointer_target, InputEvent, InputListener, Viewport,
};
use super::smoothing::{BassScale, SmoothedPointer};
use super::stars::{StarId, StarPool};
use super::tesseract::{Tesseract, SEGMENT_POINT_COUNT};
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build-time knobs for the scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub galaxy_count: usize,
    pub particle_count: usize,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            galaxy_count: GALAXY_COUNT,
            particle_count: PARTICLE_COUNT,
            seed: None,
        }
    }
}

pub struct SceneState {
    pub camera: Camera,
    pub viewport: Viewport,
    pub pointer: SmoothedPointer,
    pub bass: BassScale,
    /// Set by the bass toggle; only effective with analyser data.
    pub bass_enabled: bool,

    pub solid: Transform,
    pub solid_mesh: Wireframe,

    pub tesseract: Transform,
    tesseract_shape: Tesseract,
    pub tesseract_points: [Vec3; SEGMENT_POINT_COUNT],

    pub torus: Transform,
    pub torus_mesh: Wireframe,

    pub particles: Transform,
    pub particle_positions: Vec<Vec3>,

    pub galaxy_group: Transform,
    pub galaxies: Vec<Galaxy>,

    pub stars: StarPool,

    elapsed: f32,
    frame_count: u64,
    rng: StdRng,
}

impl SceneState {
    pub fn new(params: SceneParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particle_positions =
            geometry::particle_field(&mut rng, params.particle_count, PARTICLE_SPREAD);
        let galaxies = generate_field(&mut rng, params.galaxy_count);
        let tesseract_shape = Tesseract::new();
        let tesseract_points = tesseract_shape.project(0.0);

        Self {
            camera: Camera::default(),
            viewport: Viewport::default(),
            pointer: SmoothedPointer::default(),
            bass: BassScale::default(),
            bass_enabled: false,
            solid: Transform::default(),
            solid_mesh: geometry::icosahedron(SOLID_RADIUS),
            tesseract: Transform::default(),
            tesseract_shape,
            tesseract_points,
            torus: Transform::default(),
            torus_mesh: geometry::torus(
                TORUS_RADIUS,
                TORUS_TUBE,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            particles: Transform::default(),
            particle_positions,
            galaxy_group: Transform::default(),
            galaxies,
            stars: StarPool::new(),
            elapsed: 0.0,
            frame_count: 0,
            rng,
        }
    }

    /// Scene time of the last update, in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one frame. `bass_bins` is the analyser spectrum when one is
    /// attached; it is ignored unless the bass effect is enabled.
    pub fn update(&mut self, elapsed: f32, bass_bins: Option<&[u8]>) {
        self.elapsed = elapsed;
        self.frame_count += 1;
        let t = elapsed;

        let p = self.pointer.step();

        self.solid.rotation.x += SOLID_SPIN_PER_FRAME + p.y * SOLID_POINTER_SPIN;
        self.solid.rotation.y += SOLID_SPIN_PER_FRAME + p.x * SOLID_POINTER_SPIN;

        self.tesseract_points = self.tesseract_shape.project(t);
        self.tesseract.position = Vec3::new(
            (t * 0.3).cos() * TESSERACT_ORBIT_RADIUS,
            (t * 0.5).sin() * TESSERACT_ORBIT_LIFT,
            (t * 0.2).sin() * TESSERACT_ORBIT_RADIUS,
        );

        let a = t * TORUS_ANGLE_RATE;
        self.torus.position = Vec3::new(
            a.cos() * TORUS_ORBIT_RADIUS,
            (a * 1.5).sin() * TORUS_ORBIT_LIFT,
            (a * 0.8).sin() * TORUS_ORBIT_RADIUS,
        );
        self.torus.rotation.x += TORUS_SPIN_X_PER_FRAME;
        self.torus.rotation.y += TORUS_SPIN_Y_PER_FRAME;

        self.particles.rotation.y = -p.x * PARTICLE_PARALLAX + t * DRIFT_Y_PER_SEC;
        self.particles.rotation.x = -p.y * PARTICLE_PARALLAX + t * DRIFT_X_PER_SEC;
        self.galaxy_group.rotation.y = -p.x * GALAXY_GROUP_PARALLAX + t * DRIFT_Y_PER_SEC;
        self.galaxy_group.rotation.x = -p.y * GALAXY_GROUP_PARALLAX + t * DRIFT_X_PER_SEC;

        for g in &mut self.galaxies {
            g.spin();
        }

        let bins = if self.bass_enabled { bass_bins } else { None };
        if self.bass.step(bins) {
            self.solid.scale = Vec3::splat(self.bass.current);
        }

        self.stars.advance();
    }

    /// Spawn a shooting star at the current scene time.
    pub fn spawn_star(&mut self) -> StarId {
        let now = self.elapsed;
        self.stars.spawn(&mut self.rng, now)
    }

    pub fn remove_star(&mut self, id: StarId) -> bool {
        self.stars.remove(id).is_some()
    }

    /// World matrix of galaxy `index` (group rotation applied on top).
    pub fn galaxy_matrix(&self, index: usize) -> Option<Mat4> {
        let g = self.galaxies.get(index)?;
        Some(self.galaxy_group.matrix() * g.local_matrix())
    }

    /// Whether the next frame reads the analyser at all.
    pub fn samples_spectrum(&self) -> bool {
        self.bass_enabled
    }

    pub fn toggle_bass(&mut self) -> bool {
        self.bass_enabled = !self.bass_enabled;
        self.bass_enabled
    }
}

impl InputListener for SceneState {
    fn on_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove { x, y } => {
                self.pointer.set_target(pointer_target(&self.viewport, x, y));
            }
            InputEvent::TouchMove { x, y, touches } => {
                if is_single_touch(touches) {
                    self.pointer.set_target(pointer_target(&self.viewport, x, y));
                }
            }
            InputEvent::Orientation { beta, gamma } => {
                if let Some(target) = orientation_target(beta, gamma) {
                    self.pointer.set_target(target);
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.camera.set_viewport(width, height);
            }
        }
    }
}
