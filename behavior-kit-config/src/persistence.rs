//! Binding config file I/O and path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::BindingsConfig;

const APP_DIR: &str = "behavior-kit";
const FILE_NAME: &str = "bindings.yaml";

impl BindingsConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, or return an empty config if no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Binding config path: {:?}", config_path);

        if !config_path.exists() {
            log::info!("No binding config at {:?}, using built-in bindings only", config_path);
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load and validate a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        // Anyone who can write this file can rebind the user's input
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(metadata) = fs::metadata(path) {
                let mode = metadata.permissions().mode();
                if mode & 0o022 != 0 {
                    log::warn!(
                        "Binding config {:?} is writable by group or others (mode {:04o}). \
                         Run: chmod 644 {:?}",
                        path,
                        mode & 0o777,
                        path,
                    );
                }
            }
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_yaml_str(&contents)?;
        log::info!(
            "Loaded {} binding override(s) from {:?}",
            config.bindings.len(),
            path
        );
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(|e| ConfigError::io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| ConfigError::io(path, e))?;

        Ok(())
    }

    /// Default config file path (`<config dir>/behavior-kit/bindings.yaml`).
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(FILE_NAME)
    }

    /// Default config directory.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all other platforms: ~/.config/behavior-kit
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
    }
}
