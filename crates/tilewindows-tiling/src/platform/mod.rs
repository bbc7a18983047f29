use std::time::Duration;

use tilewindows_common::{AutomationError, LiveWindow, Rect};

pub mod macos;
pub mod noop;

pub type Result<T> = std::result::Result<T, AutomationError>;

/// A single geometry change for one window of an application.
///
/// The window is named by its enumeration index from the snapshot the
/// assignment was computed on. Backends resolve every index of a batch
/// before changing any window, so raising or un-minimizing one window never
/// redirects a later request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMove {
    pub index: u32,
    pub rect: Rect,
    /// Clear the minimized flag before moving.
    pub unminimize: bool,
}

/// Platform-agnostic access to other applications' windows.
///
/// Enumeration order must be stable for the duration of one call; indexes
/// are 1-based.
pub trait WindowAutomation {
    /// Every window of every foreground application.
    fn all_windows(&self) -> Result<Vec<LiveWindow>>;

    /// Windows of one application. An application that is not running has
    /// no windows.
    fn app_windows(&self, app: &str) -> Result<Vec<LiveWindow>>;

    /// Apply `moves` to the windows of `app`, in order.
    ///
    /// Before each move the application is brought to the front and
    /// `settle` elapses. Returns one result per request. The outer error
    /// means the batch could not run at all.
    fn move_windows(
        &self,
        app: &str,
        moves: &[WindowMove],
        settle: Duration,
    ) -> Result<Vec<Result<()>>>;
}

/// Create the platform-appropriate automation backend.
///
/// On macOS: System Events scripting through `osascript`.
/// On other platforms: a backend that reports every request as unsupported.
pub fn create_automation() -> Box<dyn WindowAutomation> {
    #[cfg(target_os = "macos")]
    {
        Box::new(macos::MacOsAutomation::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(noop::NoopAutomation)
    }
}
