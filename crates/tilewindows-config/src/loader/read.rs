//! Layout file reading, strict and recovering.

use std::io::ErrorKind;
use std::path::Path;

use tilewindows_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::LayoutFile;

/// Load the layout file at `path`.
///
/// An empty file counts as an empty layout set. Layouts that do not parse
/// are kept aside as raw JSON; see [`LayoutFile::from_value`].
pub fn load_from_path(path: &Path) -> Result<LayoutFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(LayoutFile::default());
    }

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let file = LayoutFile::from_value(value);
    debug!(path = %path.display(), layouts = file.len(), "loaded layout file");
    Ok(file)
}

/// Load the layout file, treating a missing or corrupt file as empty.
pub fn load_or_empty(path: &Path) -> LayoutFile {
    match load_from_path(path) {
        Ok(file) => file,
        Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no layout file yet");
            LayoutFile::default()
        }
        Err(e) => {
            warn!("{e}; continuing with no layouts");
            LayoutFile::default()
        }
    }
}
