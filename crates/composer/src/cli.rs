//! CLI argument parsing

use clap::{Parser, Subcommand};
use composer::Overrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compose")]
#[command(about = "Command ebook navigation generator", long_about = None)]
#[command(after_help = "Use 'compose <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (YAML, or TOML with a .toml extension); defaults to ./config.yml if present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to docs directory (overrides generate_nav.docs_dir)
    #[arg(short, long, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Glob for content files, relative to the docs directory
    #[arg(short, long, global = true)]
    pub pattern: Option<String>,

    /// Only files ending with this are treated as command files
    #[arg(short, long, global = true)]
    pub suffix: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write slugmap.json and command_navs.yml (the default)
    #[command(visible_alias = "gen")]
    Generate {
        /// Print the navigation instead of writing any file
        #[arg(long)]
        dry_run: bool,

        /// Do not write the slug map
        #[arg(long)]
        no_slugmap: bool,
    },

    /// List the command files that would be included
    #[command(visible_alias = "ls")]
    List {
        /// Show the display slug and navigation title too
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report every command file that breaks the naming convention
    #[command(visible_alias = "validate")]
    Check,
}

impl Cli {
    /// Command-line overrides for the configuration
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            docs_dir: self.docs_dir.clone(),
            ebook_pattern: self.pattern.clone(),
            command_filename_endswith: self.suffix.clone(),
            ..Default::default()
        };

        if let Some(Commands::Generate { dry_run, no_slugmap }) = &self.command {
            // Flags can only switch these on; an unset flag leaves the file value alone
            if *dry_run {
                overrides.dry_run = Some(true);
            }
            if *no_slugmap {
                overrides.create_slugmap = Some(false);
            }
        }

        overrides
    }
}
