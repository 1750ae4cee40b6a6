//! Error types for the SerialGo scraper
//!
//! SerialgoError implements Serialize so it can be embedded in JSON payloads.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for SerialGo scraping operations
#[derive(Error, Debug)]
pub enum SerialgoError {
    /// HTTP request failed (transport error or non-success status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Requested page does not exist (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Item id that cannot address a page on the site
    #[error("Invalid item id: {0:?}")]
    InvalidId(String),
}

impl Serialize for SerialgoError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for SerialGo scraping operations
pub type Result<T> = std::result::Result<T, SerialgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = SerialgoError::Parse("missing element".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: missing element");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = SerialgoError::NotFound("https://www.serialgo.to/series/x".to_string());
        assert_eq!(
            error.to_string(),
            "Page not found: https://www.serialgo.to/series/x"
        );
    }

    #[test]
    fn test_error_display_invalid_id() {
        let error = SerialgoError::InvalidId(String::new());
        assert_eq!(error.to_string(), "Invalid item id: \"\"");
    }

    #[test]
    fn test_error_serialize() {
        let error = SerialgoError::Parse("bad selector".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Failed to parse HTML: bad selector\"");
    }
}
