//! eddy CLI entry point.

use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use eddy::cli::{Cli, CommandContext, CommandDispatcher};
use eddy::paths::EddyHome;
use eddy::shell::{RunnerOptions, ShellRunner};
use eddy::ui::create_ui;
use eddy::version::GithubReleases;
use eddy::{EddyError, EddyExit, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("eddy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eddy=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn build_context(cli: &Cli) -> Result<CommandContext> {
    let home = match &cli.home {
        Some(root) => EddyHome::at(root),
        None => EddyHome::resolve()?,
    };
    let shell = ShellRunner::new(RunnerOptions {
        debug: cli.debug,
        ..Default::default()
    });

    let mut context = CommandContext::new(home, Box::new(shell), Box::new(GithubReleases::new()?))
        .with_config_url(cli.config_url.clone())
        .with_package_manager(cli.package_manager)
        .with_no_color(cli.no_color);
    if let Some(path) = &cli.config {
        context = context.with_config_path(path);
    }
    Ok(context)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let exit = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EddyExit::Success,
                ErrorKind::InvalidSubcommand => {
                    let command = match e.get(ContextKind::InvalidSubcommand) {
                        Some(ContextValue::String(name)) => name.clone(),
                        _ => String::new(),
                    };
                    EddyError::UnknownCommand { command }.exit_code()
                }
                _ => EddyExit::Internal,
            };
            // Printing can only fail on a closed stream.
            let _ = e.print();
            return exit.into();
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("eddy starting with args: {:?}", cli);

    let mut ui = create_ui(cli.yes, cli.no_color);

    let result = build_context(&cli).and_then(|context| {
        CommandDispatcher::new(context).dispatch(cli.command.as_ref(), ui.as_mut())
    });

    match result {
        Ok(result) => result.exit.into(),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            e.exit_code().into()
        }
    }
}
