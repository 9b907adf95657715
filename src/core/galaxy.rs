// Procedurally generated distant galaxies.
//
// Each galaxy is a flattened, center-weighted disc of points whose color fades
// from a warm core to a random-hue rim. Galaxies are generated once and only
// ever spun about their own z axis afterwards.

use super::color::{hex_rgb, hsl_rgb};
use super::constants::{
    GALAXY_CORE_COLOR, GALAXY_FIELD_DEPTH_OFFSET, GALAXY_FIELD_EXTENT, GALAXY_FLATTENING,
    GALAXY_MAX_POINTS, GALAXY_MAX_RADIUS, GALAXY_MAX_SPIN, GALAXY_MIN_POINTS, GALAXY_MIN_RADIUS,
    GALAXY_RIM_LIGHTNESS, GALAXY_RIM_SATURATION,
};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct Galaxy {
    /// Disc radius the points were sampled within.
    pub radius: f32,
    /// Local-space point positions.
    pub positions: Vec<Vec3>,
    /// Per-point sRGB color, parallel to `positions`.
    pub colors: Vec<Vec3>,
    pub rim_color: Vec3,
    /// Offset inside the galaxy group.
    pub position: Vec3,
    /// Euler angles (XYZ order); only `z` changes after creation.
    pub rotation: Vec3,
    /// Radians added to `rotation.z` every frame.
    pub spin_speed: f32,
}

impl Galaxy {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let count = rng.gen_range(GALAXY_MIN_POINTS..GALAXY_MAX_POINTS);
        let radius = rng.gen_range(GALAXY_MIN_RADIUS..GALAXY_MAX_RADIUS);

        let core = hex_rgb(GALAXY_CORE_COLOR);
        let rim_color = hsl_rgb(rng.gen::<f32>(), GALAXY_RIM_SATURATION, GALAXY_RIM_LIGHTNESS);

        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            // Squaring the sample packs points toward the core.
            let u: f32 = rng.gen();
            let r = u * u * radius;
            let angle = rng.gen::<f32>() * TAU;
            let y = (rng.gen::<f32>() - 0.5) * r * GALAXY_FLATTENING;
            positions.push(Vec3::new(angle.cos() * r, y, angle.sin() * r));
            colors.push(core.lerp(rim_color, r / radius));
        }

        let [ex, ey, ez] = GALAXY_FIELD_EXTENT;
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * ex,
            (rng.gen::<f32>() - 0.5) * ey,
            (rng.gen::<f32>() - 0.5) * ez + GALAXY_FIELD_DEPTH_OFFSET,
        );
        let rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
        let spin_speed = (rng.gen::<f32>() - 0.5) * 2.0 * GALAXY_MAX_SPIN;

        Self {
            radius,
            positions,
            colors,
            rim_color,
            position,
            rotation,
            spin_speed,
        }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn spin(&mut self) {
        self.rotation.z += self.spin_speed;
    }

    /// Transform from galaxy space into galaxy-group space.
    pub fn local_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_rotation_translation(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z), self.position)
    }
}

/// Generate `count` independent galaxies.
pub fn generate_field<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Galaxy> {
    (0..count).map(|_| Galaxy::generate(rng)).collect()
}
