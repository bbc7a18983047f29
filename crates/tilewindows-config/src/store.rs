//! Named layout CRUD over the layout file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tilewindows_common::{ConfigError, Target, TilewindowsError};
use tracing::{info, warn};

use crate::loader::{ensure_config, load_from_path, load_or_empty};
use crate::paths::project_config_path;
use crate::schema::LayoutFile;
use crate::writer::save_to_path;

/// Result of [`init_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Layouts persisted in a single JSON file.
///
/// Every operation re-reads the file; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    path: PathBuf,
}

impl LayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty layout file if none exists yet.
    pub fn ensure(&self) -> Result<(), ConfigError> {
        ensure_config(&self.path).map(|_| ())
    }

    /// Read all layouts. Missing or corrupt files read as empty.
    pub fn load(&self) -> LayoutFile {
        if let Err(e) = self.ensure() {
            warn!("{e}");
        }
        load_or_empty(&self.path)
    }

    /// Read all layouts before rewriting the file.
    ///
    /// Unlike [`load`](Self::load) a corrupt file is an error here, so a
    /// write never replaces a file that could not be parsed.
    fn load_for_update(&self) -> Result<LayoutFile, ConfigError> {
        match load_from_path(&self.path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(LayoutFile::default())
            }
            other => other,
        }
    }

    pub fn save(&self, file: &LayoutFile) -> Result<(), ConfigError> {
        save_to_path(file, &self.path)
    }

    pub fn list(&self) -> Vec<String> {
        self.load().names()
    }

    pub fn get(&self, name: &str) -> Result<Vec<Target>, TilewindowsError> {
        let file = self.load();
        if file.is_unreadable(name) {
            return Err(TilewindowsError::UnreadableLayout(name.to_string()));
        }
        file.get(name)
            .map(<[Target]>::to_vec)
            .ok_or_else(|| TilewindowsError::LayoutNotFound(name.to_string()))
    }

    /// Store `targets` under `name`, replacing any previous layout.
    pub fn put(&self, name: &str, targets: Vec<Target>) -> Result<(), ConfigError> {
        let mut file = self.load_for_update()?;
        let count = targets.len();
        let replaced = file.insert(name, targets).is_some();
        self.save(&file)?;
        info!(layout = name, count, replaced, "layout saved");
        Ok(())
    }

    /// Delete `name`, readable or not.
    pub fn remove(&self, name: &str) -> Result<(), TilewindowsError> {
        let mut file = self.load_for_update()?;
        if !file.remove(name) {
            return Err(TilewindowsError::LayoutNotFound(name.to_string()));
        }
        self.save(&file)?;
        info!(layout = name, "layout removed");
        Ok(())
    }
}

/// Create an empty project-local layout file in `dir`.
pub fn init_project(dir: &Path) -> Result<InitOutcome, ConfigError> {
    let path = project_config_path(dir);
    if ensure_config(&path)? {
        Ok(InitOutcome::Created(path))
    } else {
        Ok(InitOutcome::AlreadyExists(path))
    }
}
