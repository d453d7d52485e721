//! Error reporting for the command line

use crate::scanner::ScanError;
use colored::*;

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
    }
}

/// Print an error with a suggestion
pub fn print_error_with_suggestion(context: &str, error: &anyhow::Error, suggestion: &str) {
    print_error(context, error);
    eprintln!("\n{} {}", "Suggestion:".cyan().bold(), suggestion);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// How to fix a naming problem, if there is an obvious fix
pub fn suggestion_for(error: &ScanError) -> Option<&'static str> {
    match error {
        ScanError::MalformedCommandFile(_) => {
            Some("Rename the file to NNN-<slug>-command.md (an optional 'the-' may follow the number)")
        }
        ScanError::DuplicateSlug { .. } => Some("Give one of the files a different slug"),
        ScanError::NoCommandFiles(_) => {
            Some("Check docs_dir and ebook_pattern in the generate_nav configuration")
        }
        ScanError::InvalidPattern(_) | ScanError::MissingCaptureGroup(_) => None,
    }
}
