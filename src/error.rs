//! Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::audio::SoundCategory;

/// Errors raised while loading configuration or building a noise bank
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A configured clip is missing, unreadable or not valid audio
    #[error("failed to load sound {}: {reason}", .path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// A category has no clips configured
    #[error("no sounds configured for {0:?}")]
    EmptyCategory(SoundCategory),

    /// Noise config file could not be parsed or written
    #[error("bad noise config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failure reported by an audio backend
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct BackendError(pub String);
