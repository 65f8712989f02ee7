//! Audio system
//!
//! Preloads debugger noises and plays them through Kira.

pub mod backend;
pub mod bank;
pub mod config;
pub mod picker;
pub mod sounds;

pub use backend::{AudioBackend, KiraBackend};
pub use bank::{AudioAsset, NoiseBank, default_base_path};
pub use config::{NoiseConfig, config_path};
pub use picker::{RandomPicker, SoundPicker};
pub use sounds::SoundCategory;
