//! Host state the welcome page displays and mutates

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use crate::common::paths;
use crate::common::system::{self, Architecture};
use crate::ui::prelude::*;

/// Where the autostart symlink lives and what it points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutostartPaths {
    pub link: PathBuf,
    pub target: PathBuf,
}

impl AutostartPaths {
    pub fn user_default(target: &Path) -> Result<Self> {
        Ok(Self {
            link: paths::autostart_link_path()?,
            target: target.to_path_buf(),
        })
    }

    /// A dangling link still counts, so it can be removed again.
    fn link_present(&self) -> bool {
        fs::symlink_metadata(&self.link).is_ok()
    }

    fn create_link(&self) -> io::Result<()> {
        if let Some(parent) = self.link.parent() {
            fs::create_dir_all(parent)?;
        }
        symlink(&self.target, &self.link)
    }
}

#[derive(Debug, Clone)]
pub struct WelcomeConfig {
    arch: Architecture,
    live: bool,
    autostart: bool,
    paths: AutostartPaths,
}

impl WelcomeConfig {
    /// Probe the running system
    pub fn detect(force_live: bool, desktop_entry: &Path) -> Result<Self> {
        if let Err(e) = paths::welcome_config_dir() {
            emit(
                Level::Debug,
                "welcome.config.dir",
                &format!("Could not create config directory: {:#}", e),
                None,
            );
        }

        let live = force_live || system::is_live_session(Path::new(paths::LIVE_MARKER));
        let paths = AutostartPaths::user_default(desktop_entry)?;
        Ok(Self::new(Architecture::detect(), live, paths))
    }

    pub fn new(arch: Architecture, live: bool, paths: AutostartPaths) -> Self {
        let autostart = paths.link_present();
        Self {
            arch,
            live,
            autostart,
            paths,
        }
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    pub fn live(&self) -> bool {
        self.live
    }

    pub fn autostart(&self) -> bool {
        self.autostart
    }

    pub fn autostart_paths(&self) -> &AutostartPaths {
        &self.paths
    }

    /// Create or remove the autostart symlink. Filesystem errors are not
    /// reported; the returned state is re-read from disk.
    pub fn set_autostart(&mut self, state: bool) -> bool {
        let present = self.paths.link_present();

        let result = if state && !present {
            self.paths.create_link()
        } else if !state && present {
            fs::remove_file(&self.paths.link)
        } else {
            Ok(())
        };

        if let Err(e) = result {
            emit(
                Level::Debug,
                "welcome.autostart.error",
                &format!(
                    "Could not update autostart link {}: {}",
                    self.paths.link.display(),
                    e
                ),
                None,
            );
        }

        self.autostart = self.paths.link_present();
        self.autostart
    }

    pub fn toggle_autostart(&mut self) -> bool {
        let next = !self.autostart;
        self.set_autostart(next)
    }
}
