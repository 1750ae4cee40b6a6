//! Detail page parser
//!
//! Builds the descriptive record for a show: title, synopsis, poster and
//! the list of episode links.

use scraper::Html;

use crate::error::Result;
use crate::types::{ContentType, EpisodeLink, ItemDetail, PLACEHOLDER_POSTER};

use super::{element_text, selector};

/// Parse a show detail page.
///
/// Missing markup never fails the parse: the title and description fall
/// back to empty strings and the poster to [`PLACEHOLDER_POSTER`].
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
/// * `id` - Item id the page was fetched for (echoed in the result)
///
/// # Returns
/// * `Ok(ItemDetail)` with parsed information
/// * `Err(SerialgoError::Parse)` if a selector cannot be built
pub fn parse_meta(html: &str, id: &str) -> Result<ItemDetail> {
    let document = Html::parse_document(html);

    let title_selector = selector("h1")?;
    let name = document
        .select(&title_selector)
        .next()
        .map(|h1| element_text(&h1))
        .unwrap_or_default();

    let description_selector = selector("meta[name='description']")?;
    let description = document
        .select(&description_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string();

    let image_selector = selector("img")?;
    let poster = document
        .select(&image_selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .unwrap_or(PLACEHOLDER_POSTER)
        .to_string();

    let episode_selector = selector("a[href^='/episode/']")?;
    let episodes = document
        .select(&episode_selector)
        .filter_map(|link| {
            Some(EpisodeLink {
                id: link.value().attr("href")?.to_string(),
                name: element_text(&link),
            })
        })
        .collect();

    Ok(ItemDetail {
        id: id.to_string(),
        content_type: ContentType::Series,
        name,
        description,
        poster,
        episodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = r#"
        <html>
          <head>
            <meta name="description" content="A family saga with a supernatural twist.">
          </head>
          <body>
            <img src="https://img.serialgo.to/dark.jpg" alt="Dark">
            <h1> Dark </h1>
            <h1>Related</h1>
            <ul>
              <li><a href="/episode/dark-1x01">Secrets</a></li>
              <li><a href="/episode/dark-1x02"> Lies </a></li>
              <li><a href="/series/lost">Lost</a></li>
            </ul>
          </body>
        </html>
    "#;

    #[test]
    fn test_parse_meta_full_page() {
        let meta = parse_meta(DETAIL_PAGE, "/series/dark").unwrap();

        assert_eq!(meta.id, "/series/dark");
        assert_eq!(meta.content_type, ContentType::Series);
        assert_eq!(meta.name, "Dark");
        assert_eq!(meta.description, "A family saga with a supernatural twist.");
        assert_eq!(meta.poster, "https://img.serialgo.to/dark.jpg");
        assert_eq!(
            meta.episodes,
            vec![
                EpisodeLink {
                    id: "/episode/dark-1x01".to_string(),
                    name: "Secrets".to_string(),
                },
                EpisodeLink {
                    id: "/episode/dark-1x02".to_string(),
                    name: "Lies".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_meta_bare_page_defaults() {
        let meta = parse_meta("<html><body><p>nothing</p></body></html>", "/series/x").unwrap();

        assert_eq!(meta.name, "");
        assert_eq!(meta.description, "");
        assert_eq!(meta.poster, "https://via.placeholder.com/200");
        assert!(meta.episodes.is_empty());
    }

    #[test]
    fn test_parse_meta_first_image_without_src() {
        let html = r#"<img alt="logo"><img src="/second.jpg">"#;
        let meta = parse_meta(html, "/series/x").unwrap();

        assert_eq!(meta.poster, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_parse_meta_empty_src_uses_placeholder() {
        let meta = parse_meta(r#"<img src="">"#, "/series/x").unwrap();
        assert_eq!(meta.poster, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_parse_meta_keeps_unnamed_episodes() {
        let html = r#"<a href="/episode/dark-1x03"><img src="thumb.jpg"></a>"#;
        let meta = parse_meta(html, "/series/dark").unwrap();

        assert_eq!(meta.episodes.len(), 1);
        assert_eq!(meta.episodes[0].id, "/episode/dark-1x03");
        assert_eq!(meta.episodes[0].name, "");
        // the episode thumbnail is still the first image
        assert_eq!(meta.poster, "thumb.jpg");
    }
}
