//! Data types for the SerialGo scraper
//!
//! Records are flat and built fresh per request. Field names follow the
//! addon protocol's JSON (camelCase, `type` instead of a Rust keyword).

use serde::{Deserialize, Serialize};

/// Poster used whenever the markup does not provide one
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/200";

/// Content type understood by the media client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    /// Name used in addon URLs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Series => "series",
        }
    }
}

/// One entry of the show listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// Link target on the site (e.g. `/series/some-show`)
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub poster: String,
}

/// Episode link found on a detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeLink {
    /// Link target on the site (e.g. `/episode/some-show-1x01`)
    pub id: String,
    pub name: String,
}

/// Descriptive record for a single show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
    /// Empty when the page has no description meta tag
    pub description: String,
    /// Falls back to [`PLACEHOLDER_POSTER`]
    pub poster: String,
    pub episodes: Vec<EpisodeLink>,
}

/// A playable source for an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEntry {
    pub title: String,
    pub url: String,
    /// Always `None`: the site only serves direct URLs
    pub info_hash: Option<String>,
}

impl StreamEntry {
    /// Create an entry pointing at a direct URL
    pub fn direct(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            info_hash: None,
        }
    }
}

/// `{"metas": [...]}` payload of the catalog endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<ShowSummary>,
}

/// `{"meta": ...}` payload of the meta endpoint; `null` on failure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaResponse {
    pub meta: Option<ItemDetail>,
}

/// `{"streams": [...]}` payload of the stream endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamResponse {
    pub streams: Vec<StreamEntry>,
}
