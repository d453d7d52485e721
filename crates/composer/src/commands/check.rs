//! Check command implementation

use anyhow::{bail, Result};
use colored::*;
use composer::errors::suggestion_for;
use composer::{generate, theme, GenerateOptions};

pub fn check_commands(options: &GenerateOptions) -> Result<()> {
    println!("\n{}\n", "Checking command files...".bold());

    let (candidates, problems) = generate::check(options)?;

    if problems.is_empty() {
        println!(
            "{} {} command file(s) follow the naming convention\n",
            theme::success_symbol().green().bold(),
            candidates
        );
        return Ok(());
    }

    for problem in &problems {
        println!("  {} {}", theme::error_symbol().red(), problem);
        if let Some(hint) = suggestion_for(problem) {
            println!("    {} {}", theme::arrow_symbol().cyan(), theme::info(hint));
        }
    }
    println!();

    bail!("{} problem(s) in {} command file(s)", problems.len(), candidates)
}
