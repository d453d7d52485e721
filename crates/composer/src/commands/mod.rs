//! Command implementations

pub mod check;
pub mod generate;
pub mod list;

pub use check::check_commands;
pub use generate::generate_navs;
pub use list::list_commands;
