//! Artifact rendering: the JSON slug map and the quoted YAML navigation

use crate::constants::NAV_ROOT_KEY;
use crate::nav::{NavLeaf, NavNode, NavTree};
use crate::scanner::SlugMap;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write the slug map as 2-space indented JSON
pub fn write_slug_map<W: Write>(map: &SlugMap, out: &mut W) -> Result<(), RenderError> {
    serde_json::to_writer_pretty(&mut *out, map)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write the navigation as block-style YAML with every scalar double-quoted
///
/// ```text
/// "nav":
///   - "Home": "index.md"
///   - "Commands":
///       - "<code>001:&nbsp;<strong>ls</strong></code>": "ebook/en/content/001-ls-command.md"
/// ```
pub fn write_nav_yaml<W: Write>(tree: &NavTree, out: &mut W) -> Result<(), RenderError> {
    writeln!(out, "{}:", quote(NAV_ROOT_KEY)?)?;

    for section in &tree.sections {
        match &section.node {
            NavNode::Page(path) => {
                writeln!(out, "  - {}: {}", quote(&section.title)?, quote(path)?)?;
            }
            // Block style has no empty sequence
            NavNode::Pages(pages) if pages.is_empty() => {
                writeln!(out, "  - {}: []", quote(&section.title)?)?;
            }
            NavNode::Pages(pages) => {
                writeln!(out, "  - {}:", quote(&section.title)?)?;
                for page in pages {
                    write_leaf(page, out)?;
                }
            }
        }
    }

    Ok(())
}

fn write_leaf<W: Write>(leaf: &NavLeaf, out: &mut W) -> Result<(), RenderError> {
    writeln!(out, "      - {}: {}", quote(&leaf.title)?, quote(&leaf.path)?)?;
    Ok(())
}

/// Double-quoted YAML scalar. JSON string escapes are valid YAML escapes.
fn quote(s: &str) -> Result<String, RenderError> {
    Ok(serde_json::to_string(s)?)
}

/// Render the slug map to a string
pub fn slug_map_to_string(map: &SlugMap) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    write_slug_map(map, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Render the navigation to a string
pub fn nav_to_string(tree: &NavTree) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    write_nav_yaml(tree, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
