use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted user settings. Only the palette name and zoom factor are
/// core-visible state; the window size is shell-only.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: String,
    pub zoom_factor: f64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: "Gray".to_string(),
            zoom_factor: 1.0,
            window_width: 800.0,
            window_height: 600.0,
        }
    }
}

impl Settings {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("grayview").join("settings.toml"))
    }

    /// Load from the config file, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("no config directory"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
