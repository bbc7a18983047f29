//! Command handlers.
//!
//! Each handler writes its user-facing output to the supplied writer and
//! returns an error only when the requested operation could not start or
//! could not be persisted. Partial window failures during apply are printed
//! and do not fail the command.

mod layouts;
mod windows;


use std::io::Write;
use std::path::PathBuf;

use tilewindows_common::TilewindowsError;
use tilewindows_config::LayoutStore;
use tilewindows_tiling::{ApplyOptions, WindowAutomation};

pub use layouts::{init, list, path, print, rm};
pub use windows::{apply, get, save};

/// Layout applied when `apply` is given no name.
pub const DEFAULT_LAYOUT: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(String),
    Save(Option<String>),
    Get,
    List,
    Rm(Option<String>),
    Print(Option<String>),
    Path,
    Init,
    Help,
}

/// Everything a command may touch.
pub struct Context<'a> {
    pub store: LayoutStore,
    pub automation: &'a dyn WindowAutomation,
    pub options: ApplyOptions,
    /// Directory `init` writes into.
    pub cwd: PathBuf,
}

pub fn run(
    command: Command,
    ctx: &Context<'_>,
    out: &mut dyn Write,
) -> Result<(), TilewindowsError> {
    match command {
        Command::Apply(name) => apply(ctx, &name, out),
        Command::Save(name) => save(ctx, required(name, "save")?, out),
        Command::Get => get(ctx, out),
        Command::List => list(ctx, out),
        Command::Rm(name) => rm(ctx, required(name, "rm")?, out),
        Command::Print(name) => print(ctx, required(name, "print")?, out),
        Command::Path => path(ctx, out),
        Command::Init => init(ctx, out),
        Command::Help => help(out),
    }
}

fn required(name: Option<String>, verb: &'static str) -> Result<String, TilewindowsError> {
    name.filter(|n| !n.is_empty())
        .ok_or(TilewindowsError::MissingLayoutName(verb))
}

pub const HELP: &str = "\
Usage:
  tilewindows <layout>         Apply a layout (alias of \"apply <layout>\")
  tilewindows apply [layout]   Apply a saved layout (default \"home\")
  tilewindows save <layout>    Save current windows to a named layout
  tilewindows get              Print current windows as JSON
  tilewindows list             List saved layouts
  tilewindows print <layout>   Show JSON for a saved layout
  tilewindows rm <layout>      Remove a saved layout
  tilewindows path             Show config file location
  tilewindows init             Create an empty tilewindows.config.json in the current directory
  tilewindows help             Show this help message

Project configs:
  If tilewindows.config.json exists in the current directory, it is used automatically.
  Use --here to force CWD/tilewindows.config.json (created on first save).

Environment:
  TILEWINDOWS_CONFIG=/path/to/tilewindows.config.json   Use a specific config file
  XDG_CONFIG_HOME=~/.config                             Standard XDG base dir (if set)
  RUST_LOG=tilewindows=debug                            Diagnostic logging on stderr

Flags:
  --config <path>      Explicit config location
  --here               Use CWD/tilewindows.config.json
  --delay-ms <ms>      Pause after activating an app (default 150)
  --log-level <level>  Log level (default warn)

Config resolution (highest to lowest):
  --config, TILEWINDOWS_CONFIG, --here or an existing CWD/tilewindows.config.json,
  next to the executable, $XDG_CONFIG_HOME, ~/Library/Application Support, ~/.config
";

pub fn help(out: &mut dyn Write) -> Result<(), TilewindowsError> {
    writeln!(out, "{HELP}")?;
    Ok(())
}
