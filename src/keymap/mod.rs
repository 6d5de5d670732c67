//! 키 + 제스처 해석

pub mod gesture;
pub mod keys;
mod mapper;

pub use gesture::{classify_drag, Gesture, DEFAULT_DEADZONE};
pub use keys::{Command, KeyId, Layout};
pub use mapper::{down_swipe_shift, GestureKeyMapper, KeyOutput, Resolution};
