use crate::config::{DisplayConfig, SimConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// User settings from `<config_dir>/voxlife/config.toml`
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub simulation: SimConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Missing file gives defaults; unreadable or malformed files are logged and ignored
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring malformed settings");
                Self::default()
            }),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not read settings");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("voxlife")
            .join("config.toml")
    }
}
