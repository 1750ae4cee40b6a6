use serialgo_core::SerialgoScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = SerialgoScraper::new()?;

    println!("Fetching show listing...\n");

    let shows = scraper.list_shows().await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, show.name, show.id);
    }

    if let Some(show) = shows.first() {
        println!("\nLoading detail for: {} ({})\n", show.name, show.id);

        let meta = scraper.get_meta(&show.id).await?;

        println!("Title: {}", meta.name);
        if !meta.description.is_empty() {
            println!("Description: {}", meta.description);
        }
        println!("Poster: {}", meta.poster);

        println!("\nEpisodes ({}):", meta.episodes.len());
        for ep in &meta.episodes {
            println!("  • {} ({})", ep.name, ep.id);
        }

        let streams = scraper.get_streams(&show.id).await?;
        println!("\nStreams ({}):", streams.len());
        for stream in &streams {
            println!("  {} -> {}", stream.title, stream.url);
        }
    }

    Ok(())
}
