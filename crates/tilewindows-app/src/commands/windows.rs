//! Commands that talk to live windows.

use std::io::Write;

use tilewindows_common::{LiveWindow, TilewindowsError};
use tilewindows_tiling::{apply_layout, AppReport};
use tracing::info;

use super::Context;

/// Apply a saved layout. A layout that is missing or empty is an error;
/// individual window failures are printed and the run still ends with `Done.`.
pub fn apply(ctx: &Context<'_>, name: &str, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    let targets = ctx.store.get(name)?;
    if targets.is_empty() {
        return Err(TilewindowsError::LayoutNotFound(name.to_string()));
    }

    writeln!(out, "Arranging windows for \"{name}\"…")?;
    let report = apply_layout(ctx.automation, &targets, &ctx.options);
    for app in &report.apps {
        write_app_report(app, out)?;
    }
    if report.skipped > 0 {
        writeln!(out, "Skipped {} entries without an app name", report.skipped)?;
    }
    info!(
        layout = name,
        moved = report.moved(),
        failed = report.failed(),
        gaps = report.gaps(),
        "layout applied"
    );
    writeln!(out, "Done.")?;
    Ok(())
}

fn write_app_report(app: &AppReport, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    if let Some(e) = &app.collect_error {
        writeln!(out, "✗ {}: {e}", app.app)?;
        return Ok(());
    }
    if app.live_windows == 0 {
        writeln!(
            out,
            "✗ {}: no windows, {} rect(s) not applied",
            app.app,
            app.gaps.len()
        )?;
        return Ok(());
    }

    for outcome in &app.outcomes {
        match &outcome.result {
            Ok(()) => writeln!(
                out,
                "✓ {} #{} → {}",
                app.app, outcome.window, outcome.target.rect
            )?,
            Err(e) => writeln!(out, "✗ {} #{}: {e}", app.app, outcome.window)?,
        }
    }
    for gap in &app.gaps {
        writeln!(out, "  {}: no window for {}", app.app, gap.rect)?;
    }

    if app.failed() == 0 {
        writeln!(out, "✓ Applied {} rect(s) to {}", app.moved(), app.app)?;
    } else {
        writeln!(
            out,
            "✗ {}: {} of {} window(s) failed",
            app.app,
            app.failed(),
            app.outcomes.len()
        )?;
    }
    Ok(())
}

/// Print the live window snapshot as JSON.
pub fn get(ctx: &Context<'_>, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    let windows = ctx.automation.all_windows()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&windows)?)?;
    Ok(())
}

/// Snapshot standard windows into a named layout.
pub fn save(ctx: &Context<'_>, name: String, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    let targets: Vec<_> = ctx
        .automation
        .all_windows()?
        .iter()
        .filter(|w| w.standard)
        .map(LiveWindow::to_target)
        .collect();

    let count = targets.len();
    ctx.store.put(&name, targets)?;
    writeln!(out, "Saved {count} windows to layout \"{name}\".")?;
    Ok(())
}
