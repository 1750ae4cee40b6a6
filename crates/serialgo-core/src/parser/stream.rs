//! Player frame parser
//!
//! Finds embedded players on a detail page that point at a video file.

use scraper::Html;

use crate::error::Result;
use crate::types::StreamEntry;

use super::selector;

/// Substring of a frame source that marks it as a video file
const VIDEO_MARKER: &str = "mp4";

/// Title of the entry returned when the page has no playable frame
const FALLBACK_TITLE: &str = "Episode";

/// Parse playable sources from a detail page.
///
/// Every `iframe` whose `src` contains `mp4` becomes an entry titled
/// `Episode N`, where N is the frame's 1-based position among all frames
/// on the page. When nothing matches, a single entry pointing at
/// `page_url` is returned instead, so a successful parse is never empty.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
/// * `page_url` - Absolute URL of the page, used for the fallback entry
///
/// # Returns
/// * `Ok(Vec<StreamEntry>)` with at least one entry
/// * `Err(SerialgoError::Parse)` if the selector cannot be built
pub fn parse_streams(html: &str, page_url: &str) -> Result<Vec<StreamEntry>> {
    let document = Html::parse_document(html);
    let frame_selector = selector("iframe")?;

    let mut streams: Vec<StreamEntry> = document
        .select(&frame_selector)
        .enumerate()
        .filter_map(|(i, frame)| {
            let src = frame.value().attr("src")?;
            src.contains(VIDEO_MARKER)
                .then(|| StreamEntry::direct(format!("Episode {}", i + 1), src))
        })
        .collect();

    if streams.is_empty() {
        streams.push(StreamEntry::direct(FALLBACK_TITLE, page_url));
    }

    Ok(streams)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://www.serialgo.to/series/dark";

    #[test]
    fn test_parse_streams_video_frames() {
        let html = r#"
            <iframe src="https://ads.example/banner.html"></iframe>
            <iframe src="https://cdn.example/dark-1x01.mp4"></iframe>
            <iframe></iframe>
            <iframe src="https://player.example/embed?file=dark-1x02.mp4&autoplay=1"></iframe>
        "#;
        let streams = parse_streams(html, PAGE_URL).unwrap();

        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].title, "Episode 2");
        assert_eq!(streams[0].url, "https://cdn.example/dark-1x01.mp4");
        assert_eq!(streams[1].title, "Episode 4");
        assert!(streams.iter().all(|s| s.info_hash.is_none()));
    }

    #[test]
    fn test_parse_streams_fallback_to_page() {
        let html = r#"<iframe src="https://player.example/embed/123"></iframe>"#;
        let streams = parse_streams(html, PAGE_URL).unwrap();

        assert_eq!(streams, vec![StreamEntry::direct("Episode", PAGE_URL)]);
    }

    #[test]
    fn test_parse_streams_empty_page() {
        let streams = parse_streams("", PAGE_URL).unwrap();

        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].url, PAGE_URL);
        assert_eq!(streams[0].title, "Episode");
    }

    #[test]
    fn test_parse_streams_marker_is_case_sensitive() {
        let html = r#"<iframe src="https://cdn.example/dark.MP4"></iframe>"#;
        let streams = parse_streams(html, PAGE_URL).unwrap();

        assert_eq!(streams[0].url, PAGE_URL);
    }
}
