// Renderer and page tuning constants.
//
// Scene-model constants live in `core::constants`; these cover the GPU
// pipeline, canvas sizing and the DOM hooks the page provides.

// Post-processing (bloom)
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_THRESHOLD: f32 = 0.0;
pub const BLOOM_RADIUS: f32 = 0.5;

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Per-draw uniform slots are addressed with dynamic offsets; 256 is the
// WebGPU minimum uniform offset alignment.
pub const DRAW_UNIFORM_STRIDE: u64 = 256;
pub const MAX_ACTIVE_STARS: usize = 8;

// Audio analyser
pub const ANALYSER_FFT_SIZE: u32 = 128;

// DOM hooks
pub const CONTAINER_ID: &str = "three-js-container";
pub const CANVAS_ID: &str = "backdrop-canvas";
pub const AUDIO_ID: &str = "background-audio";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const NEXT_TRACK_ID: &str = "next-track-btn";
pub const VOLUME_SLIDER_ID: &str = "volume-slider";
pub const BASS_TOGGLE_ID: &str = "bass-toggle-btn";
pub const FULLSCREEN_ID: &str = "fullscreen-btn";
pub const WELCOME_ID: &str = "welcome-screen";
pub const ENTER_ID: &str = "enter-btn";
pub const SITE_WRAPPER_ID: &str = "site-wrapper";
pub const COPYRIGHT_ID: &str = "copyright-year";
