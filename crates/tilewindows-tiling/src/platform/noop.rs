//! No-op WindowAutomation implementation.
//!
//! Used on platforms where window automation is not implemented. Every call
//! reports [`AutomationError::NotSupported`] so `get` and `save` fail loudly
//! instead of producing an empty snapshot.

use std::time::Duration;

use tilewindows_common::{AutomationError, LiveWindow};

use super::{Result, WindowAutomation, WindowMove};

/// Refuses every request on hosts without a window automation backend.
pub struct NoopAutomation;

fn unsupported<T>() -> Result<T> {
    Err(AutomationError::NotSupported(format!(
        "window automation on {}",
        std::env::consts::OS
    )))
}

impl WindowAutomation for NoopAutomation {
    fn all_windows(&self) -> Result<Vec<LiveWindow>> {
        unsupported()
    }

    fn app_windows(&self, _app: &str) -> Result<Vec<LiveWindow>> {
        unsupported()
    }

    fn move_windows(
        &self,
        _app: &str,
        _moves: &[WindowMove],
        _settle: Duration,
    ) -> Result<Vec<Result<()>>> {
        unsupported()
    }
}
