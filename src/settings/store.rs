use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::common::paths;

/// Contents of ~/.config/antergos/welcome/welcome.toml
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeSettings {
    /// Directory holding index.html and img/, tried before the built-in candidates
    pub data_dir: Option<PathBuf>,
    pub width: i32,
    pub height: i32,
    /// Help viewer for GNOME-style desktops
    pub gnome_help: String,
    /// Help viewer for KDE
    pub kde_help: String,
    /// Browser used for links; xdg-open when unset
    pub browser: Option<String>,
    /// Desktop entry the autostart symlink points to
    pub desktop_entry: PathBuf,
}

impl Default for WelcomeSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            width: 768,
            height: 496,
            gnome_help: "yelp".to_string(),
            kde_help: "khelpcenter".to_string(),
            browser: None,
            desktop_entry: PathBuf::from(paths::DESKTOP_ENTRY),
        }
    }
}

impl WelcomeSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading settings file from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("parsing settings file at {}", path.display()))
    }
}
