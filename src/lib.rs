pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod keymap;
pub mod replay;
pub mod session;

pub use crate::core::{ComposeResult, CompositionMode, SyllableComposer};
pub use error::KyboardError;
pub use host::{MemoryHost, TextHost};
pub use session::{Effect, InputEvent, InputSession};
