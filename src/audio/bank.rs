//! Noise bank
//!
//! Preloads every configured clip up front and plays a random one per
//! category on request.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::backend::{AudioBackend, KiraBackend};
use super::config::NoiseConfig;
use super::picker::{RandomPicker, SoundPicker};
use super::sounds::SoundCategory;
use crate::error::NoiseError;

/// One decoded clip, owned by the bank that loaded it
#[derive(Debug)]
pub struct AudioAsset<H> {
    /// File the clip was decoded from
    pub path: PathBuf,
    /// Backend handle used to play it
    pub handle: H,
}

/// Preloaded clips grouped by category.
///
/// Construction either loads every configured clip or fails; a bank that
/// exists always has at least one clip for every [`SoundCategory`].
pub struct NoiseBank<B: AudioBackend = KiraBackend, P = RandomPicker> {
    /// Directory the clips were loaded from
    sound_dir: PathBuf,
    /// Loaded clips, never empty for any category
    sounds: HashMap<SoundCategory, Vec<AudioAsset<B::Handle>>>,
    backend: Mutex<B>,
    picker: Mutex<P>,
}

impl<B: AudioBackend> NoiseBank<B, RandomPicker> {
    /// Load the default clips from `<base_path>/debugNoises`
    pub fn new(base_path: impl AsRef<Path>, backend: B) -> Result<Self, NoiseError> {
        Self::with_config(
            base_path,
            &NoiseConfig::default(),
            backend,
            RandomPicker::from_entropy(),
        )
    }
}

impl<B: AudioBackend, P: SoundPicker> NoiseBank<B, P> {
    /// Load the clips named by `config` from `<base_path>/<config.directory>`
    pub fn with_config(
        base_path: impl AsRef<Path>,
        config: &NoiseConfig,
        mut backend: B,
        picker: P,
    ) -> Result<Self, NoiseError> {
        config.validate()?;

        let sound_dir = base_path.as_ref().join(&config.directory);
        let mut sounds = HashMap::with_capacity(SoundCategory::ALL.len());

        for category in SoundCategory::ALL {
            let mut assets = Vec::new();
            for file in config.files(category) {
                let path = sound_dir.join(file);
                let handle = backend.load(&path).map_err(|e| NoiseError::AssetLoad {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                log::debug!("Loaded {:?} sound {}", category, path.display());
                assets.push(AudioAsset { path, handle });
            }
            sounds.insert(category, assets);
        }

        log::info!(
            "Noise bank ready: {} sounds from {}",
            sounds.values().map(Vec::len).sum::<usize>(),
            sound_dir.display()
        );

        Ok(Self {
            sound_dir,
            sounds,
            backend: Mutex::new(backend),
            picker: Mutex::new(picker),
        })
    }

    /// Play a random clip from `category` without waiting for it to finish.
    ///
    /// Playback failures are logged and otherwise ignored.
    pub fn play(&self, category: SoundCategory) {
        let assets = self.assets(category);
        if assets.is_empty() {
            return;
        }

        let index = self.picker.lock().pick(assets.len());
        let Some(asset) = assets.get(index) else {
            log::warn!("Picker chose clip {} of {} for {:?}", index, assets.len(), category);
            return;
        };

        log::debug!("Playing {:?} sound {}", category, asset.path.display());
        if let Err(e) = self.backend.lock().trigger(&asset.handle) {
            log::debug!("Failed to play sound {}: {}", asset.path.display(), e);
        }
    }

    /// Clips loaded for a category
    pub fn assets(&self, category: SoundCategory) -> &[AudioAsset<B::Handle>] {
        self.sounds.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of clips loaded for a category
    pub fn count(&self, category: SoundCategory) -> usize {
        self.assets(category).len()
    }

    /// Directory the clips were loaded from
    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }
}

/// Directory containing the running executable
pub fn default_base_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))
}
