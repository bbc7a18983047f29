//! Apply options and per-window/per-app/per-layout reports.

use std::time::Duration;

use tilewindows_common::{AutomationError, Target};

use crate::assign::MatchKind;

/// Default pause between activating an application and moving its window.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Wait after activation so focus changes and animations finish.
    pub settle: Duration,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            settle: DEFAULT_SETTLE,
        }
    }
}

/// What happened to one matched target.
#[derive(Debug)]
pub struct WindowOutcome {
    pub target: Target,
    /// Enumeration index of the window that was moved.
    pub window: u32,
    pub kind: MatchKind,
    pub result: Result<(), AutomationError>,
}

impl WindowOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything that happened while applying one application's targets.
#[derive(Debug)]
pub struct AppReport {
    pub app: String,
    /// Set when the application's windows could not be listed at all.
    pub collect_error: Option<AutomationError>,
    /// Number of live windows seen for the application.
    pub live_windows: usize,
    pub outcomes: Vec<WindowOutcome>,
    /// Targets that found no window.
    pub gaps: Vec<Target>,
}

impl AppReport {
    pub(crate) fn new(app: &str) -> Self {
        Self {
            app: app.to_string(),
            collect_error: None,
            live_windows: 0,
            outcomes: Vec::new(),
            gaps: Vec::new(),
        }
    }

    pub fn moved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.moved()
    }
}

/// The result of applying a whole layout.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub apps: Vec<AppReport>,
    /// Targets ignored because they name no application.
    pub skipped: usize,
}

impl ApplyReport {
    pub fn moved(&self) -> usize {
        self.apps.iter().map(AppReport::moved).sum()
    }

    pub fn failed(&self) -> usize {
        self.apps.iter().map(AppReport::failed).sum()
    }

    pub fn gaps(&self) -> usize {
        self.apps.iter().map(|a| a.gaps.len()).sum()
    }

    /// True when every matched window moved and no application failed to list.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0 && self.apps.iter().all(|a| a.collect_error.is_none())
    }
}
