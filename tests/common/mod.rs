use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory for one test
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        std::fs::create_dir_all(temp_dir.path().join(".config"))?;
        Ok(Self { temp_dir })
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_home(&self) -> PathBuf {
        self.home().join(".config")
    }

    pub fn autostart_link(&self) -> PathBuf {
        self.config_home()
            .join("autostart")
            .join("antergos-welcome.desktop")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_home()
            .join("antergos")
            .join("welcome")
            .join("welcome.toml")
    }

    pub fn write_settings(&self, contents: &str) -> Result<()> {
        let path = self.settings_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
