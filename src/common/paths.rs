use anyhow::{Context, Result};
use std::path::PathBuf;

/// Marker that only exists when booted from the live media
pub const LIVE_MARKER: &str = "/bootmnt/antergos";

/// Data directory used by packaged installs
pub const SYSTEM_DATA_DIR: &str = "/usr/share/antergos-welcome/";

/// Desktop entry the autostart symlink points at
pub const DESKTOP_ENTRY: &str = "/usr/share/applications/antergos-welcome.desktop";

pub const AUTOSTART_FILE_NAME: &str = "antergos-welcome.desktop";

fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir().context("Unable to determine user config directory")
}

/// Get the welcome config directory (~/.config/antergos/welcome)
pub fn welcome_config_dir() -> Result<PathBuf> {
    let config_dir = user_config_dir()?.join("antergos").join("welcome");

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating config directory at {}", config_dir.display()))?;

    Ok(config_dir)
}

/// Get the path of the settings file inside the welcome config directory
pub fn settings_path() -> Result<PathBuf> {
    Ok(user_config_dir()?
        .join("antergos")
        .join("welcome")
        .join("welcome.toml"))
}

/// Get the autostart symlink location (~/.config/autostart/antergos-welcome.desktop)
pub fn autostart_link_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("autostart").join(AUTOSTART_FILE_NAME))
}
