//! 한글 조합 코어

pub mod composer;
pub mod glyph;
pub mod mode;
pub mod unicode;

pub use composer::{ComposeResult, SyllableComposer};
pub use glyph::{classify, classify_in, GlyphClass, Slot};
pub use mode::{CompositionMode, CompositionModeController, ModeShift};
