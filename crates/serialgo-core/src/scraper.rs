//! Main SerialGo scraper API
//!
//! Combines the HTTP client with the page parsers. Every call fetches the
//! page it needs; nothing is cached between calls.

use crate::client::SerialgoClient;
use crate::error::{SerialgoError, Result};
use crate::parser::{parse_catalog, parse_meta, parse_streams, CATALOG_LIMIT};
use crate::types::{ItemDetail, ShowSummary, StreamEntry};

/// Path of the show listing page
const LISTING_PATH: &str = "/series";

/// Scraper API for the SerialGo site
///
/// # Example
/// ```no_run
/// use serialgo_core::SerialgoScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = SerialgoScraper::new()?;
///
///     let shows = scraper.list_shows().await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct SerialgoScraper {
    client: SerialgoClient,
}

impl SerialgoScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = SerialgoClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// Used to point the scraper at another base URL or timeout.
    pub fn with_client(client: SerialgoClient) -> Self {
        Self { client }
    }

    /// List shows from the listing page, at most [`CATALOG_LIMIT`] of them.
    ///
    /// # Example
    /// ```no_run
    /// use serialgo_core::SerialgoScraper;
    ///
    /// # async fn example() -> Result<(), serialgo_core::SerialgoError> {
    /// let scraper = SerialgoScraper::new()?;
    /// for show in scraper.list_shows().await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_shows(&self) -> Result<Vec<ShowSummary>> {
        let html = self.client.fetch(LISTING_PATH).await?;
        parse_catalog(&html, CATALOG_LIMIT)
    }

    /// Get the descriptive record of a show.
    ///
    /// # Arguments
    /// * `id` - Path of the detail page, as found in the catalog (e.g. `/series/dark`)
    ///
    /// # Returns
    /// * `Ok(ItemDetail)` with title, description, poster and episodes
    /// * `Err(SerialgoError::InvalidId)` if id is not a site-relative path
    /// * `Err(SerialgoError::NotFound)` if the page doesn't exist
    pub async fn get_meta(&self, id: &str) -> Result<ItemDetail> {
        validate_id(id)?;

        let html = self.client.fetch(id).await?;
        parse_meta(&html, id)
    }

    /// Resolve playable sources for an item.
    ///
    /// Falls back to a single entry pointing at the detail page when the
    /// page embeds no video player.
    ///
    /// # Arguments
    /// * `id` - Path of the detail page (e.g. `/series/dark`)
    ///
    /// # Returns
    /// * `Ok(Vec<StreamEntry>)` with at least one entry
    /// * `Err(SerialgoError::InvalidId)` if id is not a site-relative path
    pub async fn get_streams(&self, id: &str) -> Result<Vec<StreamEntry>> {
        validate_id(id)?;

        let html = self.client.fetch(id).await?;
        parse_streams(&html, &self.client.url_for(id))
    }
}

/// Ids are site-relative paths: a single leading `/`, so appending them to
/// the base URL can never change the host.
fn validate_id(id: &str) -> Result<()> {
    let relative = id.starts_with('/') && !id.starts_with("//") && !id.starts_with("/\\");
    if id.trim().is_empty() || !relative {
        return Err(SerialgoError::InvalidId(id.to_string()));
    }
    Ok(())
}
