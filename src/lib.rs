//! Debug Noises - audible feedback for debugger events
//!
//! Loads a handful of short clips at startup and plays a random one
//! whenever a breakpoint is hit, a step is taken, and so on.

pub mod audio;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use audio::{AudioBackend, KiraBackend, NoiseBank, NoiseConfig, SoundCategory};
pub use error::{BackendError, NoiseError};
