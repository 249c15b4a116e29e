use crate::error::DocumentError;

/// The simple selectors understood by the bundled host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, DocumentError> {
        let selector = selector.trim();

        let parsed = if let Some(name) = selector.strip_prefix('#') {
            is_ident(name).then(|| Selector::Id(name.to_string()))
        } else if let Some(name) = selector.strip_prefix('.') {
            is_ident(name).then(|| Selector::Class(name.to_string()))
        } else {
            // Tag names are case-insensitive
            is_ident(selector).then(|| Selector::Tag(selector.to_ascii_lowercase()))
        };

        parsed.ok_or_else(|| DocumentError::InvalidSelector(selector.to_string()))
    }
}

fn is_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
