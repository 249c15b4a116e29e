use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::config::Position;

#[test]
fn test_default_page_path_is_under_config() {
    let path = default_page_path().unwrap();
    assert!(path.to_string_lossy().contains(".config/hovertip"));
    assert!(path.to_string_lossy().ends_with("page.toml"));
}

#[test]
fn test_builtin_page_parses() {
    let page = parse_page(BUILTIN_PAGE).unwrap();
    assert_eq!(page.targets.len(), 5);
    assert_eq!(page.panels.len(), 1);
    assert_eq!(page.panels[0].id, "shortcuts");
    assert_eq!(page.tip.left.as_deref(), Some("2px"));
}

#[test]
fn test_empty_page_is_valid() {
    let page = parse_page("").unwrap();
    assert!(page.targets.is_empty());
    assert!(page.panels.is_empty());
    assert_eq!(page.defaults, TooltipOptions::default());
}

#[test]
fn test_target_options_fall_back_to_page_defaults() {
    let content = r#"
[defaults]
position = "bottom"
xOffset = 2

[[target]]
label = "A"
x = 0
y = 0
width = 4
height = 1
tooltip = { xOffset = 9 }
"#;

    let page = parse_page(content).unwrap();
    let options = page.options_for(&page.targets[0]);
    assert_eq!(options.x_offset, Some(9.0));
    assert_eq!(options.position, Some(Position::Bottom));
}

#[test]
fn test_target_attributes_parse() {
    let content = r#"
[[target]]
label = "A"
x = 1
y = 2
width = 3
height = 4
attributes = { title = "Hello", "data-x" = "y" }
"#;

    let page = parse_page(content).unwrap();
    let target = &page.targets[0];
    let attr = |name: &str| target.attributes.get(name).map(String::as_str);
    assert_eq!(attr("title"), Some("Hello"));
    assert_eq!(attr("data-x"), Some("y"));
}

#[test]
fn test_invalid_page_is_parse_error() {
    let result = parse_page("[[target]]\nlabel = 3");
    assert!(matches!(result, Err(PageError::Parse(_))));
}

#[test]
fn test_load_page_from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[[panel]]\nid = \"p\"\ntext = \"body\"").unwrap();

    let page = load_page_from_path(file.path()).unwrap();
    assert_eq!(page.panels[0].text, "body");
}

#[test]
fn test_load_page_missing_file_is_io_error() {
    let result = load_page(Some(Path::new("/nonexistent/hovertip/page.toml")));
    assert!(matches!(result, Err(PageError::Io { .. })));
}
