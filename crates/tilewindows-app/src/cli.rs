use std::path::PathBuf;

use clap::Parser;

use crate::commands::{Command, DEFAULT_LAYOUT};

/// Save and restore macOS window layouts.
#[derive(Parser, Debug)]
#[command(name = "tilewindows", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use tilewindows.config.json in the current directory, creating it on
    /// first save.
    #[arg(long)]
    pub here: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Pause after activating an app before moving its window, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Command, or a layout name to apply.
    pub command: Option<String>,

    /// Layout name for apply, save, rm and print.
    pub name: Option<String>,
}

impl Args {
    /// Map the positional words onto a command.
    ///
    /// A word that is not a known command is a layout name to apply; no
    /// words at all shows help.
    pub fn command(&self) -> Command {
        let name = self.name.clone();
        let Some(word) = self.command.as_deref() else {
            return Command::Help;
        };

        match word {
            "apply" => Command::Apply(name.unwrap_or_else(|| DEFAULT_LAYOUT.to_string())),
            "save" => Command::Save(name),
            "get" => Command::Get,
            "list" => Command::List,
            "rm" => Command::Rm(name),
            "print" => Command::Print(name),
            "path" => Command::Path,
            "init" => Command::Init,
            "help" => Command::Help,
            layout => Command::Apply(layout.to_string()),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
