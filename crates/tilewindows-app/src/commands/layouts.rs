//! Commands that only touch the layout file.

use std::io::Write;

use tilewindows_common::TilewindowsError;
use tilewindows_config::{init_project, layout_to_json, InitOutcome};

use super::Context;

pub fn list(ctx: &Context<'_>, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    let names = ctx.store.list();
    if names.is_empty() {
        writeln!(out, "(no layouts saved yet)")?;
    }
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub fn rm(ctx: &Context<'_>, name: String, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    ctx.store.remove(&name)?;
    writeln!(out, "Removed layout \"{name}\".")?;
    Ok(())
}

pub fn print(ctx: &Context<'_>, name: String, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    let targets = ctx.store.get(&name)?;
    writeln!(out, "{}", layout_to_json(&targets))?;
    Ok(())
}

/// Make sure the layout file exists, then show where it is.
pub fn path(ctx: &Context<'_>, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    ctx.store.ensure()?;
    writeln!(out, "{}", ctx.store.path().display())?;
    Ok(())
}

pub fn init(ctx: &Context<'_>, out: &mut dyn Write) -> Result<(), TilewindowsError> {
    match init_project(&ctx.cwd)? {
        InitOutcome::Created(path) => writeln!(out, "Created {}", path.display())?,
        InitOutcome::AlreadyExists(path) => writeln!(out, "Already exists: {}", path.display())?,
    }
    Ok(())
}
