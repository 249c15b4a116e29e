//! Tooltip option and settings type definitions

use std::time::Duration;

use serde::{Deserialize, Deserializer};

pub const DEFAULT_CONTENT_ATTR: &str = "title";
pub const DEFAULT_RIGHT_BOUNDARY: f64 = 70.0;
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_X_OFFSET: f64 = 13.0;
pub const DEFAULT_Y_OFFSET: f64 = 35.0;

/// Preferred vertical anchor
///
/// Anything other than `"top"` is bottom intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::from(value.as_str())
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        if value == "top" {
            Position::Top
        } else {
            Position::Bottom
        }
    }
}

/// Caller-supplied options; every field is optional
///
/// Keys use the camelCase spelling (`contentAttr`, `xOffset`, ...).
/// `rightBoundary` takes a percentage, or `false` to always right-align.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TooltipOptions {
    pub content_attr: Option<String>,
    pub content_selector: Option<String>,
    pub disable: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_boundary")]
    pub right_boundary: Option<Option<f64>>,
    pub position: Option<Position>,
    pub theme: Option<String>,
    pub timeout: Option<u64>,
    pub x_offset: Option<f64>,
    pub y_offset: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoundaryValue {
    Percent(f64),
    Flag(bool),
}

fn deserialize_boundary<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    match BoundaryValue::deserialize(deserializer)? {
        BoundaryValue::Percent(p) => Ok(Some(Some(p))),
        // `true` keeps the default boundary
        BoundaryValue::Flag(true) => Ok(None),
        BoundaryValue::Flag(false) => Ok(Some(None)),
    }
}

impl TooltipOptions {
    /// Fill unset fields from `fallback`
    pub fn or(&self, fallback: &TooltipOptions) -> TooltipOptions {
        TooltipOptions {
            content_attr: self
                .content_attr
                .clone()
                .or_else(|| fallback.content_attr.clone()),
            content_selector: self
                .content_selector
                .clone()
                .or_else(|| fallback.content_selector.clone()),
            disable: self.disable.or(fallback.disable),
            right_boundary: self.right_boundary.or(fallback.right_boundary),
            position: self.position.or(fallback.position),
            theme: self.theme.clone().or_else(|| fallback.theme.clone()),
            timeout: self.timeout.or(fallback.timeout),
            x_offset: self.x_offset.or(fallback.x_offset),
            y_offset: self.y_offset.or(fallback.y_offset),
        }
    }

    /// Resolve against `base`, field by field
    pub fn merge_onto(&self, base: &Settings) -> Settings {
        Settings {
            content_attr: self
                .content_attr
                .clone()
                .unwrap_or_else(|| base.content_attr.clone()),
            content_selector: self
                .content_selector
                .clone()
                .or_else(|| base.content_selector.clone()),
            disable: self.disable.unwrap_or(base.disable),
            right_boundary: self.right_boundary.unwrap_or(base.right_boundary),
            position: self.position.unwrap_or(base.position),
            theme: self.theme.clone().or_else(|| base.theme.clone()),
            timeout: self
                .timeout
                .map(Duration::from_millis)
                .unwrap_or(base.timeout),
            x_offset: self.x_offset.unwrap_or(base.x_offset),
            y_offset: self.y_offset.unwrap_or(base.y_offset),
        }
    }
}

/// Fully resolved per-target configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Attribute the text content is read from
    pub content_attr: String,
    /// Selector of a fragment shown instead of attribute text
    pub content_selector: Option<String>,
    pub disable: bool,
    /// Percentage of the viewport width past which the overlay right-aligns
    pub right_boundary: Option<f64>,
    pub position: Position,
    /// Class selector (`.name`) added to the overlay on show
    pub theme: Option<String>,
    /// Delay before a touch-leave hides the overlay
    pub timeout: Duration,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            content_attr: DEFAULT_CONTENT_ATTR.to_string(),
            content_selector: None,
            disable: false,
            right_boundary: Some(DEFAULT_RIGHT_BOUNDARY),
            position: Position::Top,
            theme: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            x_offset: DEFAULT_X_OFFSET,
            y_offset: DEFAULT_Y_OFFSET,
        }
    }
}

impl Settings {
    /// Theme class name, when the theme is a class selector
    pub fn theme_class(&self) -> Option<&str> {
        self.theme
            .as_deref()
            .and_then(|t| t.strip_prefix('.'))
            .filter(|class| !class.is_empty())
    }

    pub fn uses_fragment(&self) -> bool {
        self.content_selector.is_some()
    }
}

impl From<&TooltipOptions> for Settings {
    fn from(options: &TooltipOptions) -> Self {
        options.merge_onto(&Settings::default())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
