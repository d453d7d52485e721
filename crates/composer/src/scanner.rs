//! Command file scanning
//!
//! Turns the sorted list of ebook content files into the slug map and the
//! ordered navigation entries for every `NNN-[the-]<slug>-command.md` file.
//! Nothing here touches the filesystem.

use crate::constants::COMMAND_FILE_PATTERN;
use crate::nav::NavLeaf;
use crate::slug::Decoration;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("Command file does not follow the NNN-<slug>-command.md convention: {0}")]
    MalformedCommandFile(String),

    #[error("Duplicate slug '{slug}': {second} collides with {first}")]
    DuplicateSlug { slug: String, first: String, second: String },

    #[error("No command files found under {0}")]
    NoCommandFiles(String),

    #[error("Invalid command file pattern: {0}")]
    InvalidPattern(String),

    #[error("Command file pattern is missing the '{0}' capture group")]
    MissingCaptureGroup(&'static str),
}

impl From<regex::Error> for ScanError {
    fn from(e: regex::Error) -> Self {
        ScanError::InvalidPattern(e.to_string())
    }
}

/// Rules for recognising command files and labelling them
#[derive(Debug, Clone)]
pub struct NamingConvention {
    /// Docs root; stripped (with its trailing slash) from every entry path
    pub docs_root: String,

    /// Files not ending with this are skipped without being parsed
    pub suffix: String,

    /// Must define the `command_id` and `slug` capture groups
    pub pattern: Regex,

    pub decoration: Decoration,
}

impl NamingConvention {
    /// Convention with the stock pattern and decoration
    pub fn new(docs_root: impl Into<String>, suffix: impl Into<String>) -> Result<Self, ScanError> {
        Ok(Self {
            docs_root: docs_root.into(),
            suffix: suffix.into(),
            pattern: Regex::new(COMMAND_FILE_PATTERN)?,
            decoration: Decoration::default(),
        })
    }

    /// Replace the filename pattern
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, ScanError> {
        let re = Regex::new(pattern)?;
        for group in ["command_id", "slug"] {
            if !re.capture_names().flatten().any(|name| name == group) {
                return Err(ScanError::MissingCaptureGroup(group));
            }
        }
        self.pattern = re;
        Ok(self)
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Whether the file should be parsed at all
    pub fn is_candidate(&self, file: &str) -> bool {
        file.ends_with(&self.suffix)
    }

    /// Path of `file` relative to the docs root, `file` itself when it is not under the root
    ///
    /// Compared component-wise, so `./docs`, `docs/.` and `docs` are the same root.
    pub fn relative_path(&self, file: &str) -> String {
        let root = without_cur_dirs(Path::new(&self.docs_root));
        let path = without_cur_dirs(Path::new(file));

        match path.strip_prefix(&root) {
            Ok(rel) if !rel.has_root() && rel.components().next().is_some() => rel
                .components()
                .map(|c| c.as_os_str().to_str())
                .collect::<Option<Vec<_>>>()
                .map(|parts| parts.join("/"))
                .unwrap_or_else(|| file.to_string()),
            _ => file.to_string(),
        }
    }

    /// Parse a single command file path
    pub fn parse(&self, file: &str) -> Result<CommandEntry, ScanError> {
        let caps = self
            .pattern
            .captures(file)
            .ok_or_else(|| ScanError::MalformedCommandFile(file.to_string()))?;

        let command_id = caps
            .name("command_id")
            .ok_or_else(|| ScanError::MalformedCommandFile(file.to_string()))?
            .as_str()
            .to_string();
        let slug_label = caps
            .name("slug")
            .ok_or_else(|| ScanError::MalformedCommandFile(file.to_string()))?
            .as_str()
            .to_string();

        Ok(CommandEntry {
            display_slug: self.decoration.display_slug(&slug_label),
            path: self.relative_path(file),
            command_id,
            slug_label,
        })
    }
}

/// Drop `.` components; glob output never carries them
fn without_cur_dirs(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

/// A parsed command file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Three digits, leading zeros kept
    pub command_id: String,
    /// Raw slug as found in the filename
    pub slug_label: String,
    /// Decorated slug shown in the navigation
    pub display_slug: String,
    /// Path relative to the docs root
    pub path: String,
}

impl CommandEntry {
    pub fn record(&self) -> SlugRecord {
        SlugRecord {
            command_id: self.command_id.clone(),
            slug: self.display_slug.clone(),
            path: self.path.clone(),
        }
    }

    pub fn nav_leaf(&self, decoration: &Decoration) -> NavLeaf {
        NavLeaf::new(decoration.nav_title(&self.command_id, &self.display_slug), self.path.clone())
    }
}

/// Value stored in the slug map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugRecord {
    pub command_id: String,
    pub slug: String,
    pub path: String,
}

/// Slug label to record mapping; serializes as a JSON object in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugMap {
    entries: Vec<(String, SlugRecord)>,
}

impl SlugMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; the label must not be present yet
    pub fn insert(&mut self, label: impl Into<String>, record: SlugRecord) -> Result<(), ScanError> {
        let label = label.into();
        if let Some(existing) = self.get(&label) {
            return Err(ScanError::DuplicateSlug {
                slug: label,
                first: existing.path.clone(),
                second: record.path,
            });
        }
        self.entries.push((label, record));
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&SlugRecord> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, r)| r)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlugRecord)> {
        self.entries.iter().map(|(l, r)| (l.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SlugMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, record) in &self.entries {
            map.serialize_entry(label, record)?;
        }
        map.end()
    }
}

/// Result of scanning the content files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skeleton {
    pub entries: Vec<CommandEntry>,
    pub slug_map: SlugMap,
    pub command_navs: Vec<NavLeaf>,
}

impl Skeleton {
    fn push(&mut self, entry: CommandEntry, decoration: &Decoration) -> Result<(), ScanError> {
        self.slug_map.insert(entry.slug_label.clone(), entry.record())?;
        self.command_navs.push(entry.nav_leaf(decoration));
        self.entries.push(entry);
        Ok(())
    }
}

/// Scan files (already sorted by the caller), stopping at the first problem
pub fn scan<S: AsRef<str>>(files: &[S], convention: &NamingConvention) -> Result<Skeleton, ScanError> {
    let mut skeleton = Skeleton::default();

    for file in files {
        let file = file.as_ref();
        if !convention.is_candidate(file) {
            continue;
        }
        let entry = convention.parse(file)?;
        skeleton.push(entry, &convention.decoration)?;
    }

    Ok(skeleton)
}

/// Scan files and collect every problem instead of stopping at the first one
pub fn audit<S: AsRef<str>>(files: &[S], convention: &NamingConvention) -> Vec<ScanError> {
    let mut problems = Vec::new();
    let mut seen: HashMap<String, String> = HashMap::new();

    for file in files {
        let file = file.as_ref();
        if !convention.is_candidate(file) {
            continue;
        }
        match convention.parse(file) {
            Ok(entry) => {
                if let Some(first) = seen.get(&entry.slug_label) {
                    problems.push(ScanError::DuplicateSlug {
                        slug: entry.slug_label.clone(),
                        first: first.clone(),
                        second: entry.path.clone(),
                    });
                } else {
                    seen.insert(entry.slug_label, entry.path);
                }
            }
            Err(e) => problems.push(e),
        }
    }

    problems
}
