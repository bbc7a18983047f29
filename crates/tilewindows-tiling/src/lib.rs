//! Window layout engine: matching saved targets to live windows and moving
//! them into place through a platform automation backend.

pub mod apply;
pub mod assign;
pub mod platform;

pub use apply::{apply_app, apply_layout, AppReport, ApplyOptions, ApplyReport};
pub use assign::{assign, Assignment, MatchKind};
pub use platform::{create_automation, WindowAutomation, WindowMove};
