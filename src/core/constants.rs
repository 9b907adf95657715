// Scene tuning constants shared by the pure scene model and the web frontend.
// All smoothing factors are applied once per frame, not scaled by delta time.

// Pointer / orientation input
pub const POINTER_GAIN: f32 = 0.02; // client px offset from center -> target
pub const ORIENTATION_GAIN: f32 = 0.08; // degrees of tilt -> target
pub const ORIENTATION_BETA_BASELINE: f32 = 60.0; // comfortable "zero" front-to-back tilt
pub const POINTER_SMOOTHING: f32 = 0.02;

// Main solid
pub const SOLID_RADIUS: f32 = 2.0;
pub const SOLID_SPIN_PER_FRAME: f32 = 0.002;
pub const SOLID_POINTER_SPIN: f32 = 0.05;

// Tesseract
pub const TESSERACT_HALF_EXTENT: f32 = 0.5;
pub const TESSERACT_ANGLE_RATE: f32 = 0.5;
pub const TESSERACT_XW_RATE: f32 = 1.1;
pub const TESSERACT_YZ_RATE: f32 = 1.3;
pub const TESSERACT_VIEW_DISTANCE: f32 = 2.0;
pub const TESSERACT_PROJECTION_LIMIT: f32 = 1000.0;
pub const TESSERACT_ORBIT_RADIUS: f32 = 3.8;
pub const TESSERACT_ORBIT_LIFT: f32 = 1.0;

// Orbiting torus
pub const TORUS_RADIUS: f32 = 0.4;
pub const TORUS_TUBE: f32 = 0.1;
pub const TORUS_RADIAL_SEGMENTS: usize = 16;
pub const TORUS_TUBULAR_SEGMENTS: usize = 100;
pub const TORUS_ANGLE_RATE: f32 = 0.4;
pub const TORUS_ORBIT_RADIUS: f32 = 4.2;
pub const TORUS_ORBIT_LIFT: f32 = 1.8;
pub const TORUS_SPIN_X_PER_FRAME: f32 = 0.01;
pub const TORUS_SPIN_Y_PER_FRAME: f32 = 0.02;

// Particle field and galaxy group parallax
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_SPREAD: f32 = 25.0;
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const PARTICLE_PARALLAX: f32 = 0.1;
pub const GALAXY_GROUP_PARALLAX: f32 = 0.03;
pub const DRIFT_Y_PER_SEC: f32 = 0.005;
pub const DRIFT_X_PER_SEC: f32 = 0.002;

// Distant galaxies
pub const GALAXY_COUNT: usize = 25;
pub const GALAXY_MIN_POINTS: usize = 200;
pub const GALAXY_MAX_POINTS: usize = 700; // exclusive
pub const GALAXY_MIN_RADIUS: f32 = 0.4;
pub const GALAXY_MAX_RADIUS: f32 = 1.2; // exclusive
pub const GALAXY_FLATTENING: f32 = 0.3;
pub const GALAXY_CORE_COLOR: u32 = 0xfff8e7;
pub const GALAXY_RIM_SATURATION: f32 = 0.8;
pub const GALAXY_RIM_LIGHTNESS: f32 = 0.5;
pub const GALAXY_FIELD_EXTENT: [f32; 3] = [250.0, 150.0, 250.0];
pub const GALAXY_FIELD_DEPTH_OFFSET: f32 = -180.0;
pub const GALAXY_MAX_SPIN: f32 = 0.0025; // rad per frame, either direction

// Shooting stars
pub const STAR_SPAWN_INTERVAL_MS: i32 = 30_000;
pub const STAR_LIFETIME_SEC: f32 = 10.0;
pub const STAR_SPAWN_X_SPREAD: f32 = 30.0;
pub const STAR_SPAWN_Y_MIN: f32 = 5.0;
pub const STAR_SPAWN_Y_SPAN: f32 = 10.0;
pub const STAR_SPAWN_Z_SPREAD: f32 = 10.0;
pub const STAR_TRAIL_LENGTH: f32 = 1.2;

// Bass-reactive scale
pub const BASS_BINS: usize = 4;
pub const BASS_MAX_BOOST: f32 = 0.4;
pub const BASS_SMOOTHING: f32 = 0.1;
pub const BASS_REST_EPSILON: f32 = 1e-5;

// Palette (sRGB hex)
pub const SOLID_COLOR: u32 = 0x00ffff; // neon cyan
pub const TESSERACT_COLOR: u32 = 0xff00ff; // neon magenta
pub const TORUS_COLOR: u32 = 0xff00ff;
pub const PARTICLE_COLOR: u32 = 0xffffff;
pub const STAR_COLOR: u32 = 0xffffff;
