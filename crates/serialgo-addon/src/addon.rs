//! The three addon resources: catalog, meta and stream.
//!
//! Each call scrapes the site once. Scrape failures are logged and turned
//! into the empty shape of the resource, so callers always get a payload.

use serialgo_core::{CatalogResponse, MetaResponse, SerialgoScraper, StreamResponse};

use crate::manifest::Manifest;

/// Scraper plus manifest: answers the addon resource requests.
pub struct Addon {
    scraper: SerialgoScraper,
    manifest: Manifest,
}

impl Addon {
    /// Wrap a scraper with the SerialGo manifest
    pub fn new(scraper: SerialgoScraper) -> Self {
        Self {
            scraper,
            manifest: Manifest::serialgo(),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// List shows for a catalog address.
    ///
    /// Only the declared catalog is scraped; other addresses get no entries.
    pub async fn catalog(&self, content_type: &str, catalog_id: &str) -> CatalogResponse {
        if !self.manifest.has_catalog(content_type, catalog_id) {
            tracing::debug!(content_type, catalog_id, "unknown catalog requested");
            return CatalogResponse::default();
        }

        match self.scraper.list_shows().await {
            Ok(metas) => {
                tracing::debug!(count = metas.len(), "catalog scraped");
                CatalogResponse { metas }
            }
            Err(e) => {
                tracing::error!("Catalog error: {}", e);
                CatalogResponse::default()
            }
        }
    }

    /// Describe a single item; `meta` is `None` when the scrape fails.
    pub async fn meta(&self, id: &str) -> MetaResponse {
        match self.scraper.get_meta(id).await {
            Ok(meta) => {
                tracing::debug!(id, episodes = meta.episodes.len(), "meta scraped");
                MetaResponse { meta: Some(meta) }
            }
            Err(e) => {
                tracing::error!(id, "Meta error: {}", e);
                MetaResponse::default()
            }
        }
    }

    /// Resolve playable sources; empty only when the scrape fails.
    pub async fn streams(&self, id: &str) -> StreamResponse {
        match self.scraper.get_streams(id).await {
            Ok(streams) => {
                tracing::debug!(id, count = streams.len(), "streams resolved");
                StreamResponse { streams }
            }
            Err(e) => {
                tracing::error!(id, "Stream error: {}", e);
                StreamResponse::default()
            }
        }
    }
}
