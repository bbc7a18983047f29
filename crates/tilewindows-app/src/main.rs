mod cli;
mod commands;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use tilewindows_config::paths::{resolve_config_path, PathInputs};
use tilewindows_config::LayoutStore;
use tilewindows_tiling::{create_automation, ApplyOptions};
use tracing_subscriber::EnvFilter;

use commands::{Command, Context};

const DEFAULT_LOG_DIRECTIVE: &str = "tilewindows=warn";

fn init_logging(log_level: Option<&str>) {
    let directive = log_level.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let mut filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => eprintln!("Ignoring invalid log level {directive:?}: {e}"),
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    let command = args.command();
    if command == Command::Help {
        println!("{}", commands::HELP);
        return ExitCode::SUCCESS;
    }

    let inputs = match PathInputs::from_env(args.config.clone(), args.here) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = match resolve_config_path(&inputs) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        path = %resolved.path.display(),
        source = ?resolved.source,
        "config resolved"
    );

    let mut options = ApplyOptions::default();
    if let Some(ms) = args.delay_ms {
        options.settle = Duration::from_millis(ms);
    }

    let automation = create_automation();
    let ctx = Context {
        store: LayoutStore::new(resolved.path),
        automation: automation.as_ref(),
        options,
        cwd: inputs.cwd,
    };

    let mut stdout = io::stdout().lock();
    match commands::run(command, &ctx, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
