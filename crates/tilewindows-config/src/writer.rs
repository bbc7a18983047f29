//! Write a LayoutFile to disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a
//! crash mid-write never leaves a truncated layout file behind.

use std::path::Path;

use tilewindows_common::ConfigError;

use crate::schema::LayoutFile;

/// Serialize as pretty JSON with a trailing newline.
pub fn to_pretty_json(file: &LayoutFile) -> Result<String, ConfigError> {
    let mut json = serde_json::to_string_pretty(file).map_err(|e| ConfigError::Parse {
        path: Default::default(),
        message: format!("failed to serialize layouts: {e}"),
    })?;
    json.push('\n');
    Ok(json)
}

/// Write the layout file to `path`, creating parent directories as needed.
pub fn save_to_path(file: &LayoutFile, path: &Path) -> Result<(), ConfigError> {
    let json = to_pretty_json(file)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json).map_err(|source| ConfigError::Write {
        path: tmp_path.clone(),
        source,
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        // Best effort; the direct write below is what matters.
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, &json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    tracing::debug!(path = %path.display(), "layouts saved to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tilewindows_common::{Rect, Target};

    fn sample() -> LayoutFile {
        let mut file = LayoutFile::default();
        file.insert(
            "home",
            vec![
                Target::new("zed", Rect::new(0, 25, 1437, 1415)).with_index(1),
                Target::new("ghostty", Rect::new(-1080, -262, 1079, 708)),
            ],
        );
        file
    }

    #[test]
    fn save_writes_pretty_json_with_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tilewindows.config.json");

        save_to_path(&sample(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("}\n"));
        assert!(contents.contains("\n  \"layouts\""));
    }

    #[test]
    fn save_round_trip_keeps_target_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tilewindows.config.json");

        save_to_path(&sample(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: LayoutFile = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, sample());
        let home = parsed.get("home").unwrap();
        assert_eq!(home[0].app, "zed");
        assert_eq!(home[1].app, "ghostty");
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join("nested")
            .join("deep")
            .join("tilewindows.config.json");

        save_to_path(&LayoutFile::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tilewindows.config.json");

        save_to_path(&sample(), &path).unwrap();

        let tmp_path = path.with_extension("json.tmp");
        assert!(
            !tmp_path.exists(),
            "tmp file should be cleaned up after rename"
        );
    }
}
