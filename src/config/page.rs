//! Page description files for the terminal host

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::types::TooltipOptions;
use crate::error::PageError;

const CONFIG_DIR: &str = "hovertip";
const PAGE_FILE: &str = "page.toml";

/// Page shown when no page file exists
pub const BUILTIN_PAGE: &str = r##"
[defaults]
theme = ".plain"
xOffset = 2
yOffset = 2

[tip]
left = "2px"
right = "2px"

[[panel]]
id = "shortcuts"
text = """
Shortcuts
  q / Esc   quit
  drag      touch mode"""

[[target]]
label = "Open"
x = 2
y = 2
width = 12
height = 3
attributes = { title = "Open a file" }

[[target]]
label = "Save"
x = 16
y = 2
width = 12
height = 3
attributes = { title = "Write changes to disk" }
tooltip = { position = "bottom" }

[[target]]
label = "Help"
x = 30
y = 2
width = 12
height = 3
tooltip = { contentSelector = "#shortcuts", theme = ".panel" }

[[target]]
label = "Status"
x = 2
y = 16
width = 40
height = 3
attributes = { "data-status" = "All systems nominal" }
tooltip = { contentAttr = "data-status", rightBoundary = 40 }

[[target]]
label = "Locked"
x = 44
y = 16
width = 12
height = 3
attributes = { title = "You should never see this" }
tooltip = { disable = true }
"##;

/// A detached fragment, referenced from targets by `#id`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelSpec {
    pub id: String,
    pub text: String,
}

/// A rectangular target on the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TargetSpec {
    pub label: String,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub tooltip: TooltipOptions,
}

/// Computed style of the overlay's `.tip` indicator
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TipStyle {
    pub left: Option<String>,
    pub right: Option<String>,
}

/// Root page structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub defaults: TooltipOptions,
    #[serde(default)]
    pub tip: TipStyle,
    #[serde(default, rename = "panel")]
    pub panels: Vec<PanelSpec>,
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetSpec>,
}

impl Page {
    /// Options for `target`, with page defaults filling the gaps
    pub fn options_for(&self, target: &TargetSpec) -> TooltipOptions {
        target.tooltip.or(&self.defaults)
    }
}

pub fn default_page_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(PAGE_FILE))
}

pub fn parse_page(content: &str) -> Result<Page, PageError> {
    Ok(toml::from_str(content)?)
}

pub fn load_page_from_path(path: &Path) -> Result<Page, PageError> {
    let content = fs::read_to_string(path).map_err(|source| PageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_page(&content)
}

/// Load an explicit page, else the user page, else the built-in one
pub fn load_page(explicit: Option<&Path>) -> Result<Page, PageError> {
    if let Some(path) = explicit {
        return load_page_from_path(path);
    }

    match default_page_path() {
        Some(path) if path.exists() => {
            log::debug!("Loading page from {}", path.display());
            load_page_from_path(&path)
        }
        _ => parse_page(BUILTIN_PAGE),
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod page_tests;
