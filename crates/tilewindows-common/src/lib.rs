pub mod errors;
pub mod types;

pub use errors::{AutomationError, ConfigError, TilewindowsError};
pub use types::{LiveWindow, Rect, Target};

pub type Result<T> = std::result::Result<T, TilewindowsError>;
