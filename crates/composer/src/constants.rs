//! Constants used throughout the composer crate

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Table in the configuration file holding the generation options
pub const CONFIG_SECTION: &str = "generate_nav";

/// Default docs root, relative to the directory the tool runs from
pub const DEFAULT_DOCS_DIR: &str = "../docs";

/// Glob (relative to the docs root) selecting the ebook content files
pub const DEFAULT_EBOOK_PATTERN: &str = "ebook/en/content/*.md";

/// Only files whose path ends with this are treated as command files
pub const DEFAULT_COMMAND_SUFFIX: &str = "command.md";

/// Slug map artifact, written into the docs root
pub const DEFAULT_SLUGMAP_FILENAME: &str = "slugmap.json";

/// Navigation artifact, written into the docs root
pub const DEFAULT_COMMAND_NAVS_FILENAME: &str = "command_navs.yml";

/// Pattern a command file path must match. `command_id` keeps its leading zeros.
pub const COMMAND_FILE_PATTERN: &str =
    r"^.*(?P<command_id>\d{3})-(?:the-)?(?P<slug>.*?)-command\.md";

/// Key the navigation tree is nested under in mkdocs.yml
pub const NAV_ROOT_KEY: &str = "nav";
