//! Audio backends
//!
//! The noise bank only needs two things from an audio system: decode a file
//! into memory, and start playing a decoded clip without waiting for it.

use std::path::Path;

use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::StaticSoundData,
};

use crate::error::BackendError;

/// Capabilities the noise bank needs from an audio system
pub trait AudioBackend {
    /// Decoded, ready-to-play clip
    type Handle;

    /// Load and decode a clip. Missing, unreadable or malformed files fail.
    fn load(&mut self, path: &Path) -> Result<Self::Handle, BackendError>;

    /// Start playback and return immediately.
    fn trigger(&mut self, handle: &Self::Handle) -> Result<(), BackendError>;
}

/// Backend that plays clips through Kira
pub struct KiraBackend {
    /// Kira audio manager, `None` when no output device could be opened
    manager: Option<AudioManager>,
}

impl KiraBackend {
    /// Open the default output device, falling back to a silent backend
    pub fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => {
                log::info!("Audio manager initialized successfully");
                Some(m)
            }
            Err(e) => {
                log::warn!("Failed to initialize audio manager: {}. Audio disabled.", e);
                None
            }
        };

        Self { manager }
    }

    /// Backend that decodes clips but never opens an output device
    pub fn silent() -> Self {
        Self { manager: None }
    }

    /// Check if an output device is attached
    pub fn is_available(&self) -> bool {
        self.manager.is_some()
    }
}

impl Default for KiraBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for KiraBackend {
    type Handle = StaticSoundData;

    fn load(&mut self, path: &Path) -> Result<StaticSoundData, BackendError> {
        if !path.exists() {
            return Err(BackendError(format!("Sound file not found: {}", path.display())));
        }

        StaticSoundData::from_file(path)
            .map_err(|e| BackendError(format!("Failed to decode {}: {}", path.display(), e)))
    }

    fn trigger(&mut self, handle: &StaticSoundData) -> Result<(), BackendError> {
        let Some(manager) = &mut self.manager else {
            return Ok(());
        };

        // Kira mixes on its own thread; the returned handle is only needed to
        // control the sound later, which we never do.
        manager
            .play(handle.clone())
            .map(|_| ())
            .map_err(|e| BackendError(format!("{:?}", e)))
    }
}

// Note: Kira's manager isn't Send/Sync on every platform, so the backend is
// meant to stay on the thread that created it.
