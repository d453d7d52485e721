//! Navigation tree for mkdocs.yml

use crate::constants::NAV_ROOT_KEY;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single `title: path` entry of the navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLeaf {
    pub title: String,
    pub path: String,
}

impl NavLeaf {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self { title: title.into(), path: path.into() }
    }
}

impl Serialize for NavLeaf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.path)?;
        map.end()
    }
}

/// What a top-level section points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Section is itself a page
    Page(String),
    /// Section groups an ordered list of pages
    Pages(Vec<NavLeaf>),
}

/// A top-level navigation section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: String,
    pub node: NavNode,
}

impl Serialize for NavSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.node)?;
        map.end()
    }
}

/// The full `nav:` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    pub sections: Vec<NavSection>,
}

impl NavTree {
    /// Look up a section by its decorated title
    pub fn section(&self, title: &str) -> Option<&NavSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl Serialize for NavTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(NAV_ROOT_KEY, &self.sections)?;
        map.end()
    }
}

/// The fixed sections the command pages are embedded into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTemplate {
    pub home_title: String,
    pub home_page: String,
    pub commands_title: String,
    /// Always appended after the command pages
    pub wrap_up: NavLeaf,
    pub download_title: String,
    pub download_pages: Vec<NavLeaf>,
    pub about_title: String,
    pub about_pages: Vec<NavLeaf>,
}

impl Default for NavTemplate {
    fn default() -> Self {
        Self {
            home_title: "<p><i class='fas fa-home'>&nbsp;</i> Home</p>".to_string(),
            home_page: "index.md".to_string(),
            commands_title: "<p><i class='fas fa-terminal'>&nbsp;</i>Commands</p>".to_string(),
            wrap_up: NavLeaf::new("Wrap Up", "ebook/en/content/999-wrap-up.md"),
            download_title: "<p><i class='fas fa-download'>&nbsp;</i>Download</p>".to_string(),
            download_pages: vec![NavLeaf::new("Download eBook", "download.md")],
            about_title: "<p><i class='fas fa-info-circle'>&nbsp;</i>About</p>".to_string(),
            about_pages: vec![
                NavLeaf::new("Info", "about/index.md"),
                NavLeaf::new("License", "about/license.md"),
            ],
        }
    }
}

/// Embed the command pages into the template: Home, Commands, Download, About
pub fn build_nav(command_navs: Vec<NavLeaf>, template: &NavTemplate) -> NavTree {
    let mut commands = command_navs;
    commands.push(template.wrap_up.clone());

    NavTree {
        sections: vec![
            NavSection {
                title: template.home_title.clone(),
                node: NavNode::Page(template.home_page.clone()),
            },
            NavSection { title: template.commands_title.clone(), node: NavNode::Pages(commands) },
            NavSection {
                title: template.download_title.clone(),
                node: NavNode::Pages(template.download_pages.clone()),
            },
            NavSection {
                title: template.about_title.clone(),
                node: NavNode::Pages(template.about_pages.clone()),
            },
        ],
    }
}
