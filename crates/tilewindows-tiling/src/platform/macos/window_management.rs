//! macOS WindowAutomation trait implementation.

use std::time::Duration;

use tilewindows_common::LiveWindow;
use tracing::debug;

use crate::platform::{Result, WindowAutomation, WindowMove};

use super::records::{parse_move_results, parse_records};
use super::runner::ScriptRunner;
use super::scripts::{all_windows_script, app_windows_script, move_windows_script};
use super::MacOsAutomation;

impl<R: ScriptRunner> WindowAutomation for MacOsAutomation<R> {
    fn all_windows(&self) -> Result<Vec<LiveWindow>> {
        let output = self.runner.run(&all_windows_script())?;
        let windows = parse_records(&output)?;
        debug!(count = windows.len(), "enumerated all windows");
        Ok(windows)
    }

    fn app_windows(&self, app: &str) -> Result<Vec<LiveWindow>> {
        let output = self.runner.run(&app_windows_script(app))?;
        let mut windows = parse_records(&output)?;
        // System Events reports the process name, which can differ in case
        // from what the layout file says.
        for w in &mut windows {
            w.app = app.to_string();
        }
        windows.sort_by_key(|w| w.index);
        debug!(app, count = windows.len(), "enumerated app windows");
        Ok(windows)
    }

    fn move_windows(
        &self,
        app: &str,
        moves: &[WindowMove],
        settle: Duration,
    ) -> Result<Vec<Result<()>>> {
        if moves.is_empty() {
            return Ok(Vec::new());
        }
        debug!(app, count = moves.len(), "moving windows");
        let output = self.runner.run(&move_windows_script(app, moves, settle))?;
        parse_move_results(&output, moves.len())
    }
}
