//! Navigation skeleton generator for the command ebook
//!
//! This library scans the ebook content directory for `NNN-<slug>-command.md`
//! files and produces the slug map (`slugmap.json`) and the mkdocs navigation
//! block (`command_navs.yml`) the documentation site is built from.

pub mod config;
pub mod constants;
pub mod errors;
pub mod generate;
pub mod nav;
pub mod render;
pub mod scanner;
pub mod slug;
pub mod theme;

pub use config::{ConfigError, GenerateOptions, Overrides};
pub use generate::{generate, Report};
pub use nav::{build_nav, NavLeaf, NavNode, NavSection, NavTemplate, NavTree};
pub use scanner::{audit, scan, CommandEntry, NamingConvention, ScanError, Skeleton, SlugMap};
pub use slug::Decoration;

/// Re-export common error types
pub use anyhow::{Error, Result};
