//! HTML parsers for SerialGo pages
//!
//! One parser per page shape:
//! - `catalog`: the `/series` listing page
//! - `meta`: a show detail page
//! - `stream`: the player frames embedded in a detail page

pub mod catalog;
pub mod meta;
pub mod stream;

use scraper::{ElementRef, Selector};

use crate::error::{SerialgoError, Result};

// Re-export main parsing functions
pub use catalog::{parse_catalog, CATALOG_LIMIT};
pub use meta::parse_meta;
pub use stream::parse_streams;

/// Compile a CSS selector, mapping failures to a parse error.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SerialgoError::Parse(format!("Invalid selector {css:?}: {e:?}")))
}

/// Concatenated, trimmed text content of an element.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
