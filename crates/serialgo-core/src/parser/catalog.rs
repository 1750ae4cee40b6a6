//! Listing page parser
//!
//! Extracts show links from the `/series` page.

use scraper::Html;

use crate::error::Result;
use crate::types::{ContentType, ShowSummary, PLACEHOLDER_POSTER};

use super::{element_text, selector};

/// Maximum number of shows returned by the catalog
pub const CATALOG_LIMIT: usize = 50;

/// Parse show links from the listing page HTML.
///
/// Every anchor whose `href` starts with `/series/` is a candidate. Anchors
/// with an empty target or no visible text are dropped, and at most `limit`
/// entries are returned in document order.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
/// * `limit` - Maximum number of entries to return
///
/// # Returns
/// * `Ok(Vec<ShowSummary>)` with the parsed shows, possibly empty
/// * `Err(SerialgoError::Parse)` if the selector cannot be built
pub fn parse_catalog(html: &str, limit: usize) -> Result<Vec<ShowSummary>> {
    let document = Html::parse_document(html);
    let link_selector = selector("a[href^='/series/']")?;

    let shows = document
        .select(&link_selector)
        .filter_map(|link| {
            let href = link.value().attr("href")?;
            let name = element_text(&link);
            if href.is_empty() || name.is_empty() {
                return None;
            }

            Some(ShowSummary {
                id: href.to_string(),
                name,
                content_type: ContentType::Series,
                poster: PLACEHOLDER_POSTER.to_string(),
            })
        })
        .take(limit)
        .collect();

    Ok(shows)
}
