//! Empty layout file creation.

use std::path::Path;

use tilewindows_common::ConfigError;
use tracing::info;

/// Contents of a freshly created layout file.
pub fn empty_config_json() -> &'static str {
    "{\n  \"layouts\": {}\n}\n"
}

/// Create the layout file (and its parent directories) if it is absent.
///
/// Returns `true` when a new file was written.
pub fn ensure_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, empty_config_json()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("created empty layout file at {}", path.display());
    Ok(true)
}
