pub mod controls;
pub mod pointer;

pub use controls::{wire_audio_controls, AudioControls};
pub use pointer::{wire_input_handlers, InputWiring};
