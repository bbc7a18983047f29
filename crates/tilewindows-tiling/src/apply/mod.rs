//! Geometry applier: moves live windows onto their assigned targets.
//!
//! Strictly sequential: one application at a time, one window at a time.
//! Failures are recorded per window and never stop the batch; nothing is
//! rolled back.

mod operations;
mod types;

pub use operations::{apply_app, apply_layout, group_by_app};
pub use types::*;
