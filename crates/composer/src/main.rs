//! Navigation generator CLI

use anyhow::Result;
use clap::Parser;
use composer::constants::CONFIG_SECTION;
use composer::errors::{print_error, print_error_with_suggestion};
use composer::GenerateOptions;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = match GenerateOptions::load(cli.config.as_deref(), &cli.overrides()) {
        Ok(options) => options,
        Err(e) => {
            print_error_with_suggestion(
                "Failed to load configuration",
                &anyhow::Error::new(e),
                &format!("Options go under the '{}' table; unknown keys are rejected", CONFIG_SECTION),
            );
            std::process::exit(1);
        }
    };

    // Execute the command
    let result = match cli.command {
        None | Some(Commands::Generate { .. }) => generate_navs(&options),
        Some(Commands::List { verbose }) => list_commands(&options, verbose),
        Some(Commands::Check) => check_commands(&options),
    };

    if let Err(e) = result {
        match e.downcast_ref::<composer::ScanError>().and_then(composer::errors::suggestion_for) {
            Some(hint) => print_error_with_suggestion("Command failed", &e, hint),
            None => print_error("Command failed", &e),
        }
        std::process::exit(1);
    }

    Ok(())
}
