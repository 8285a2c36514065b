//! Config and rules CLI commands

use clap::Args;

use crate::config::logging::LOG_ENV_VAR;
use crate::config::paths::{PocketPaths, DIR_ENV_VAR};
use crate::config::settings::Settings;
use crate::display::format_rule_list;
use crate::error::PocketResult;

/// Arguments for `pocket config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the current settings (defaults if none exist) to the config file
    #[arg(long)]
    pub init: bool,
}

/// Handle the config command
pub fn handle_config_command(
    paths: &PocketPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> PocketResult<()> {
    if args.init {
        settings.save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "settings written");
        println!("Wrote settings to {}", paths.settings_file().display());
        println!();
    }

    println!("Pocket Metrics Configuration");
    println!("============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    );
    println!("TUI log file:     {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Default rule:    {}", settings.default_preset.label());
    println!("  Log filter:      {}", settings.log_filter);
    println!("  Key hints:       {}", settings.show_key_hints);
    println!();
    println!("Override the directory with {} and the log filter with {}.", DIR_ENV_VAR, LOG_ENV_VAR);

    Ok(())
}

/// Handle the rules command
pub fn handle_rules_command(settings: &Settings) -> PocketResult<()> {
    print!("{}", format_rule_list(settings.default_preset));
    Ok(())
}
