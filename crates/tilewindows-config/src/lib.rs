//! Layout storage for tilewindows.
//!
//! Layouts live in one JSON file, `tilewindows.config.json`, whose location
//! is resolved once at startup (see [`paths::resolve_config_path`]). A
//! missing or unreadable file behaves like an empty one; writes are atomic.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tilewindows_config::{paths, LayoutStore};
//!
//! let inputs = paths::PathInputs::from_env(None, false).expect("no working directory");
//! let resolved = paths::resolve_config_path(&inputs).expect("no config location");
//! let store = LayoutStore::new(resolved.path);
//! for name in store.list() {
//!     println!("{name}");
//! }
//! ```

pub mod loader;
pub mod paths;
pub mod schema;
pub mod store;
pub mod writer;

pub use schema::LayoutFile;
pub use store::{init_project, InitOutcome, LayoutStore};

/// Serialize a layout to a pretty-printed JSON string.
pub fn layout_to_json(targets: &[tilewindows_common::Target]) -> String {
    serde_json::to_string_pretty(targets)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize layout: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewindows_common::{Rect, Target};

    #[test]
    fn layout_to_json_is_array_of_entries() {
        let json = layout_to_json(&[Target::new("zed", Rect::new(0, 25, 1437, 1415))]);
        assert!(json.starts_with('['));
        assert!(json.contains("\"app\": \"zed\""));
        assert!(json.contains("\"width\": 1437"));
    }

    #[test]
    fn layout_to_json_empty() {
        assert_eq!(layout_to_json(&[]), "[]");
    }
}
