use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket::cli::{
    handle_allocate_command, handle_config_command, handle_rules_command,
    handle_validate_command, AllocateArgs, ConfigArgs, ValidateArgs,
};
use pocket::config::logging::{init_logging, LogTarget};
use pocket::config::{PocketPaths, Settings};
use pocket::error::PocketResult;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Split a net salary into needs, wants and savings",
    long_about = "Pocket Metrics applies a budget rule such as 50/30/20 to your \
                  net salary. Pick a preset or tune a custom split in 5% steps, \
                  from the command line or the interactive terminal UI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Split a net salary by a budget rule
    Allocate(AllocateArgs),

    /// Check whether a net salary is acceptable
    Validate(ValidateArgs),

    /// List the available budget rules
    Rules,

    /// Show current configuration and paths
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            paths.ensure_directories()?;
            warn_on_logging_error(init_logging(
                LogTarget::File(paths.log_file()),
                &settings.log_filter,
            ));
            pocket::tui::run_tui(&settings)?;
        }
        Commands::Allocate(args) => {
            warn_on_logging_error(init_logging(LogTarget::Stderr, &settings.log_filter));
            exit_on_rejected_income(handle_allocate_command(&settings, args), true)?;
        }
        Commands::Validate(args) => {
            warn_on_logging_error(init_logging(LogTarget::Stderr, &settings.log_filter));
            // the outcome is already on stdout
            exit_on_rejected_income(handle_validate_command(args), false)?;
        }
        Commands::Rules => handle_rules_command(&settings)?,
        Commands::Config(args) => {
            warn_on_logging_error(init_logging(LogTarget::Stderr, &settings.log_filter));
            handle_config_command(&paths, &settings, args)?;
        }
    }

    Ok(())
}

/// A rejected salary is a user error: exit with status 1 and at most the
/// validation message, other errors go through anyhow
fn exit_on_rejected_income(result: PocketResult<()>, report: bool) -> Result<()> {
    match result {
        Err(err) if err.is_validation() => {
            if let (true, Some(rejection)) = (report, err.validation_error()) {
                eprintln!("Error: {}", rejection.message());
            }
            std::process::exit(1);
        }
        other => Ok(other?),
    }
}

/// Logging is optional; a broken log target must not stop the command
fn warn_on_logging_error(result: PocketResult<()>) {
    if let Err(e) = result {
        eprintln!("Warning: {}", e);
    }
}
