//! SerialGo Scraper Core Library
//!
//! Scrapes the SerialGo show listing site into flat records that the
//! media addon republishes.
//!
//! # Features
//! - List shows from the listing page
//! - Describe a show (title, synopsis, poster, episode links)
//! - Resolve embedded video players into playable URLs

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, SerialgoClient, SERIALGO_BASE_URL};
pub use error::{Result, SerialgoError};
pub use scraper::SerialgoScraper;
pub use types::{
    CatalogResponse, ContentType, EpisodeLink, ItemDetail, MetaResponse, ShowSummary,
    StreamEntry, StreamResponse, PLACEHOLDER_POSTER,
};
