//! Configuration with layered defaults
//!
//! Defaults are overridden by the `generate_nav` table of the configuration
//! file, which in turn is overridden by command-line flags. The file may be
//! YAML (`config.yml`, the default) or TOML (any `.toml` path).

use crate::constants::{
    DEFAULT_COMMAND_NAVS_FILENAME, DEFAULT_COMMAND_SUFFIX, DEFAULT_CONFIG_FILE,
    DEFAULT_DOCS_DIR, DEFAULT_EBOOK_PATTERN, DEFAULT_SLUGMAP_FILENAME,
};
use glob::Pattern;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Options driving a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Docs root; the glob and both artifacts are relative to it
    pub docs_dir: PathBuf,

    /// Print the navigation instead of writing any file
    pub dry_run: bool,

    /// Whether to write the slug map
    pub create_slugmap: bool,

    /// Glob selecting the content files, relative to `docs_dir`
    pub ebook_pattern: String,

    /// Only files ending with this are parsed as command files
    pub command_filename_endswith: String,

    pub slugmap_filename: String,

    pub command_navs_filename: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            dry_run: false,
            create_slugmap: true,
            ebook_pattern: DEFAULT_EBOOK_PATTERN.to_string(),
            command_filename_endswith: DEFAULT_COMMAND_SUFFIX.to_string(),
            slugmap_filename: DEFAULT_SLUGMAP_FILENAME.to_string(),
            command_navs_filename: DEFAULT_COMMAND_NAVS_FILENAME.to_string(),
        }
    }
}

/// Command-line values that win over the configuration file
///
/// Only `Some` fields override.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub docs_dir: Option<PathBuf>,
    pub dry_run: Option<bool>,
    pub create_slugmap: Option<bool>,
    pub ebook_pattern: Option<String>,
    pub command_filename_endswith: Option<String>,
}

impl GenerateOptions {
    /// Load options from all sources with proper precedence
    ///
    /// With no explicit `config_file` the default `config.yml` is used if it
    /// exists; an explicit path that does not exist is an error.
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut options = GenerateOptions::default();

        let partial = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(Self::load_from_file(path)?)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Some(Self::load_from_file(path)?)
                } else {
                    None
                }
            }
        };

        if let Some(partial) = partial {
            options.merge(partial);
        }
        options.apply(overrides);

        Ok(options)
    }

    /// Parse the `generate_nav` table of a configuration file
    fn load_from_file(path: &Path) -> Result<PartialOptions, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        let parse_error = |message: String| ConfigError::Parse { path: path.to_path_buf(), message };

        let file: ConfigFile = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        } else if contents.trim().is_empty() {
            // An empty YAML document deserializes to null
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        };

        Ok(file.generate_nav)
    }

    /// Merge partial options into these (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialOptions) {
        if let Some(val) = other.docs_dir {
            self.docs_dir = val;
        }
        if let Some(val) = other.dry_run {
            self.dry_run = val;
        }
        if let Some(val) = other.create_slugmap {
            self.create_slugmap = val;
        }
        if let Some(val) = other.ebook_pattern {
            self.ebook_pattern = val;
        }
        if let Some(val) = other.command_filename_endswith {
            self.command_filename_endswith = val;
        }
        if let Some(val) = other.slugmap_filename {
            self.slugmap_filename = val;
        }
        if let Some(val) = other.command_navs_filename {
            self.command_navs_filename = val;
        }
    }

    /// Apply command-line overrides
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(val) = &overrides.docs_dir {
            self.docs_dir = val.clone();
        }
        if let Some(val) = overrides.dry_run {
            self.dry_run = val;
        }
        if let Some(val) = overrides.create_slugmap {
            self.create_slugmap = val;
        }
        if let Some(val) = &overrides.ebook_pattern {
            self.ebook_pattern = val.clone();
        }
        if let Some(val) = &overrides.command_filename_endswith {
            self.command_filename_endswith = val.clone();
        }
    }

    /// Glob pattern for the content files
    ///
    /// The docs root is matched literally; only `ebook_pattern` is a pattern.
    pub fn content_glob(&self) -> String {
        let root = Pattern::escape(&self.docs_root());
        if root.is_empty() || root.ends_with('/') {
            format!("{}{}", root, self.ebook_pattern)
        } else {
            format!("{}/{}", root, self.ebook_pattern)
        }
    }

    /// Docs root as given, for messages and prefix stripping
    pub fn docs_root(&self) -> String {
        self.docs_dir.to_string_lossy().into_owned()
    }

    pub fn slugmap_path(&self) -> PathBuf {
        self.docs_dir.join(&self.slugmap_filename)
    }

    pub fn command_navs_path(&self) -> PathBuf {
        self.docs_dir.join(&self.command_navs_filename)
    }
}

/// Top level of the configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    generate_nav: PartialOptions,
}

/// Partial options for deserializing with optional fields; unknown keys are rejected
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialOptions {
    docs_dir: Option<PathBuf>,
    dry_run: Option<bool>,
    create_slugmap: Option<bool>,
    ebook_pattern: Option<String>,
    command_filename_endswith: Option<String>,
    slugmap_filename: Option<String>,
    command_navs_filename: Option<String>,
}
