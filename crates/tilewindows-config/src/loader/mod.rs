//! Layout file loading and creation.

mod ensure;
mod read;


pub use ensure::{empty_config_json, ensure_config};
pub use read::{load_from_path, load_or_empty};
