//! Generate command implementation

use anyhow::Result;
use colored::*;
use composer::errors::print_warning;
use composer::{generate, theme, GenerateOptions};
use std::io;

pub fn generate_navs(options: &GenerateOptions) -> Result<()> {
    eprintln!(
        "{} Scanning {}",
        theme::arrow_symbol().cyan(),
        theme::path(&options.content_glob())
    );

    let stdout = io::stdout();
    let report = generate(options, &mut stdout.lock())?;

    if let Some(path) = &report.slugmap {
        eprintln!(
            "{} Generated slug map at: {}",
            theme::success_symbol().green().bold(),
            path.display()
        );
    }

    if options.dry_run {
        print_warning(&format!(
            "Dry run: {} command(s) found, navigation printed instead of written",
            report.commands
        ));
        return Ok(());
    }

    if let Some(path) = &report.command_navs {
        eprintln!(
            "{} Generated navigation at: {}",
            theme::success_symbol().green().bold(),
            path.display()
        );
    }
    eprintln!("{}", theme::success(&format!("{} command(s) in the navigation", report.commands)));

    Ok(())
}
