//! Persisted user configuration
//!
//! Remembers the last photo folder the user loaded so the app reopens on
//! their pictures instead of the placeholder cards. Stored as JSON in the
//! platform config directory:
//! - Linux: ~/.config/parallax-gallery/config.json
//! - macOS: ~/Library/Application Support/parallax-gallery/config.json
//! - Windows: %APPDATA%\parallax-gallery\config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Folder of the most recently loaded gallery, if any
    pub photo_folder: Option<PathBuf>,
}

impl AppConfig {
    /// Load the config from disk, falling back to defaults if the file is
    /// missing or unreadable. A broken config is never fatal.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the config to disk, creating the config directory if needed.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no config directory on this platform",
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = self
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Convert to JSON for storage
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from stored JSON
    fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Where the config file lives on this platform
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("parallax-gallery");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_folder() {
        assert!(AppConfig::default().photo_folder.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            photo_folder: Some(PathBuf::from("/home/me/Pictures")),
        };

        let json = config.to_json().unwrap();
        let restored = AppConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let restored = AppConfig::from_json("{}").unwrap();
        assert_eq!(restored, AppConfig::default());
    }
}
