//! Configuration module
//!
//! Tooltip options (per target, merged onto defaults) and the page files
//! read by the terminal host.

mod page;
mod types;

pub use page::{
    BUILTIN_PAGE, Page, PanelSpec, TargetSpec, TipStyle, default_page_path, load_page,
    load_page_from_path, parse_page,
};
pub use types::{
    DEFAULT_CONTENT_ATTR, DEFAULT_RIGHT_BOUNDARY, DEFAULT_TIMEOUT_MS, DEFAULT_X_OFFSET,
    DEFAULT_Y_OFFSET, Position, Settings, TooltipOptions,
};
