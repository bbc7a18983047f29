//! macOS WindowAutomation types and constructors.

use super::runner::{OsascriptRunner, ScriptRunner};

/// macOS window automation backed by System Events scripting.
pub struct MacOsAutomation<R: ScriptRunner = OsascriptRunner> {
    pub(super) runner: R,
}

impl MacOsAutomation {
    pub fn new() -> Self {
        Self {
            runner: OsascriptRunner,
        }
    }
}

impl<R: ScriptRunner> MacOsAutomation<R> {
    /// Use a custom script transport.
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl Default for MacOsAutomation {
    fn default() -> Self {
        Self::new()
    }
}
