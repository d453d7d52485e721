//! List command implementation

use anyhow::Result;
use colored::*;
use composer::generate::{convention, skeleton};
use composer::{theme, GenerateOptions};

pub fn list_commands(options: &GenerateOptions, verbose: bool) -> Result<()> {
    let skeleton = skeleton(options)?;
    let decoration = convention(options)?.decoration;

    println!("\n{}", "Commands".bold().underline());
    println!();

    for entry in &skeleton.entries {
        println!(
            "{} {} {}",
            theme::command_id(&entry.command_id),
            entry.slug_label,
            theme::path(&entry.path)
        );

        if verbose {
            println!("  Slug: {}", entry.display_slug);
            println!("  Nav:  {}", decoration.nav_title(&entry.command_id, &entry.display_slug));
            println!();
        }
    }

    println!("\nTotal: {} command(s)\n", skeleton.entries.len());
    Ok(())
}
