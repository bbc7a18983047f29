//! Collect, assign, and move, one application at a time.

use tilewindows_common::{AutomationError, Target};
use tracing::{info, warn};

use crate::assign::assign;
use crate::platform::{WindowAutomation, WindowMove};

use super::types::{AppReport, ApplyOptions, ApplyReport, WindowOutcome};

/// Group targets by application.
///
/// Applications come out in order of first appearance; each keeps its
/// targets in stored order. Targets with an empty app name are dropped and
/// counted.
pub fn group_by_app(targets: &[Target]) -> (Vec<(String, Vec<Target>)>, usize) {
    let mut groups: Vec<(String, Vec<Target>)> = Vec::new();
    let mut skipped = 0;

    for target in targets {
        if target.app.trim().is_empty() {
            skipped += 1;
            continue;
        }
        match groups.iter_mut().find(|(app, _)| *app == target.app) {
            Some((_, group)) => group.push(target.clone()),
            None => groups.push((target.app.clone(), vec![target.clone()])),
        }
    }

    (groups, skipped)
}

/// Apply one application's targets to its live windows.
///
/// The window list is fetched fresh and every matched window is moved in one
/// batch against that same list. The backend activates the application and
/// waits `options.settle` before each move. A failure is recorded in that
/// window's outcome and the next window is still tried.
pub fn apply_app(
    automation: &dyn WindowAutomation,
    app: &str,
    targets: &[Target],
    options: &ApplyOptions,
) -> AppReport {
    let mut report = AppReport::new(app);

    let live = match automation.app_windows(app) {
        Ok(live) => live,
        Err(e) => {
            warn!(app, "could not list windows: {e}");
            report.collect_error = Some(e);
            return report;
        }
    };
    report.live_windows = live.len();

    if live.is_empty() {
        info!(app, "no windows, skipping");
        report.gaps = targets.to_vec();
        return report;
    }

    let assignment = assign(targets, &live);
    let requests: Vec<WindowMove> = assignment
        .pairs
        .iter()
        .map(|pair| WindowMove {
            index: pair.window,
            rect: targets[pair.target].rect,
            unminimize: live
                .iter()
                .find(|w| w.index == pair.window)
                .is_some_and(|w| w.minimized),
        })
        .collect();

    let results = match automation.move_windows(app, &requests, options.settle) {
        Ok(results) => results,
        Err(e) => {
            warn!(app, "could not move windows: {e}");
            requests
                .iter()
                .map(|_| Err(AutomationError::Diagnostic(e.to_string())))
                .collect()
        }
    };
    let mut results = results.into_iter();

    for pair in &assignment.pairs {
        let result = results.next().unwrap_or_else(|| {
            Err(AutomationError::MalformedRecord(
                "no result reported for window".into(),
            ))
        });
        if let Err(e) = &result {
            warn!(app, window = pair.window, "move failed: {e}");
        }
        report.outcomes.push(WindowOutcome {
            target: targets[pair.target].clone(),
            window: pair.window,
            kind: pair.kind,
            result,
        });
    }

    for &pos in &assignment.gaps {
        warn!(app, position = pos, rect = %targets[pos].rect, "no window for target");
        report.gaps.push(targets[pos].clone());
    }

    info!(
        app,
        moved = report.moved(),
        failed = report.failed(),
        gaps = report.gaps.len(),
        "applied"
    );
    report
}

/// Apply every application in a layout, in order of first appearance.
pub fn apply_layout(
    automation: &dyn WindowAutomation,
    targets: &[Target],
    options: &ApplyOptions,
) -> ApplyReport {
    let (groups, skipped) = group_by_app(targets);
    if skipped > 0 {
        warn!(skipped, "ignoring targets without an app name");
    }

    let apps = groups
        .iter()
        .map(|(app, group)| apply_app(automation, app, group, options))
        .collect();

    ApplyReport { apps, skipped }
}
