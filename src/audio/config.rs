//! Noise configuration
//!
//! Maps each category to the clip filenames it may play. Loads an override
//! from a RON file, with fallback to the built-in table.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::sounds::SoundCategory;
use crate::error::NoiseError;

/// Subdirectory, next to the executable, holding the clips
pub const DEFAULT_SOUND_DIR: &str = "debugNoises";

/// Name of the optional override file in the user's config directory
pub const CONFIG_FILE_NAME: &str = "noises.ron";

/// Which clips belong to which category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Directory, relative to the base path, the filenames live in
    pub directory: String,
    /// Clip filenames per category
    pub sounds: BTreeMap<SoundCategory, Vec<String>>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        let sounds = SoundCategory::ALL
            .iter()
            .map(|c| (*c, c.default_files().iter().map(|f| f.to_string()).collect()))
            .collect();

        Self {
            directory: DEFAULT_SOUND_DIR.to_string(),
            sounds,
        }
    }
}

impl NoiseConfig {
    /// Clip filenames for a category (empty if unconfigured)
    pub fn files(&self, category: SoundCategory) -> &[String] {
        self.sounds.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check every category has at least one usable filename
    pub fn validate(&self) -> Result<(), NoiseError> {
        for category in SoundCategory::ALL {
            let files = self.files(category);
            if files.is_empty() || files.iter().any(|f| f.trim().is_empty()) {
                return Err(NoiseError::EmptyCategory(category));
            }
        }
        Ok(())
    }

    /// Parse a config from a RON file
    pub fn load(path: &Path) -> Result<Self, NoiseError> {
        let content = fs::read_to_string(path).map_err(|e| NoiseError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: NoiseConfig = ron::from_str(&content).map_err(|e| NoiseError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load a config from file, or use the defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No noise config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded noise config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}. Using default noises.", e);
                Self::default()
            }
        }
    }

    /// Write this config as pretty RON, creating parent directories
    pub fn export(&self, path: &Path) -> Result<(), NoiseError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| NoiseError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Location of the user's override file, if the platform has a config dir
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "debug-noises")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
