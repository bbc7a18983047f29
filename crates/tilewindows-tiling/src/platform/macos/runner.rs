//! Script transport: hand a script to the OS, get text back.

use std::process::Command;

use tilewindows_common::AutomationError;
use tracing::debug;

use crate::platform::Result;

/// Runs one automation script and returns its standard output.
pub trait ScriptRunner {
    fn run(&self, script: &str) -> Result<String>;
}

/// Runs AppleScript through `osascript -e`.
///
/// A non-zero exit, or any text on stderr, is treated as failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsascriptRunner;

impl ScriptRunner for OsascriptRunner {
    fn run(&self, script: &str) -> Result<String> {
        debug!(bytes = script.len(), "running osascript");
        let output = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|source| AutomationError::Spawn {
                program: "osascript",
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(AutomationError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            return Err(AutomationError::Diagnostic(stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches(['\n', '\r']).to_string())
    }
}
