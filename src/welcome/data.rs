//! Location of the bundled page and its assets

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use crate::common::paths;
use crate::ui::prelude::*;

#[derive(Error, Debug)]
pub enum DataDirError {
    #[error("Data directory {} is not a directory", .0.display())]
    MissingOverride(PathBuf),

    #[error("Unable to source the antergos-welcome data directory (tried {})", format_candidates(.0))]
    NotFound(Vec<PathBuf>),
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|c| c.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Override,
    Relative,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataDir {
    pub root: PathBuf,
    pub source: DataSource,
}

impl DataDir {
    /// Resolve using the executable's `data/` sibling and the system share path
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, DataDirError> {
        let relative = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("data")));
        Self::resolve_from(override_dir, relative.as_deref(), Path::new(paths::SYSTEM_DATA_DIR))
    }

    pub fn resolve_from(
        override_dir: Option<&Path>,
        relative: Option<&Path>,
        system: &Path,
    ) -> Result<Self, DataDirError> {
        if let Some(dir) = override_dir {
            if !dir.is_dir() {
                return Err(DataDirError::MissingOverride(dir.to_path_buf()));
            }
            return Ok(Self::found(dir, DataSource::Override));
        }

        if let Some(dir) = relative
            && dir.is_dir()
        {
            emit(
                Level::Info,
                "welcome.data.relative",
                "Using relative path for data source. Non-production testing.",
                None,
            );
            return Ok(Self::found(dir, DataSource::Relative));
        }

        if system.is_dir() {
            emit(
                Level::Info,
                "welcome.data.system",
                &format!("Using {} path.", system.display()),
                None,
            );
            return Ok(Self::found(system, DataSource::System));
        }

        let mut tried: Vec<PathBuf> = relative.map(Path::to_path_buf).into_iter().collect();
        tried.push(system.to_path_buf());
        Err(DataDirError::NotFound(tried))
    }

    fn found(dir: &Path, source: DataSource) -> Self {
        Self {
            root: absolute(dir),
            source,
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("index.html")
    }

    /// `file://` URI of the index page
    pub fn index_uri(&self) -> String {
        file_uri(&self.index_path())
    }

    pub fn icon_path(&self) -> PathBuf {
        self.root.join("img").join("antergos-icon.png")
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn file_uri(path: &Path) -> String {
    let mut uri = String::from("file://");
    for component in path.components() {
        if let Component::Normal(segment) = component {
            uri.push('/');
            uri.push_str(&urlencoding::encode(&segment.to_string_lossy()));
        }
    }
    if uri.len() == "file://".len() {
        uri.push('/');
    }
    uri
}
