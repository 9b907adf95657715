pub mod camera;
pub mod color;
pub mod constants;
pub mod galaxy;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod prefs;
pub mod scene;
pub mod smoothing;
pub mod stars;
pub mod tesseract;

pub use camera::Camera;
pub use input::{InputBus, InputEvent, InputListener, Viewport};
pub use lifecycle::LifecycleAction;
pub use prefs::{AudioPrefs, MemoryStore, PreferenceStore};
pub use scene::{SceneParams, SceneState};
pub use stars::StarId;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
