//! SerialGo media addon
//!
//! Serves the SerialGo catalog to a media-browsing client over the addon
//! URL scheme:
//! - `/manifest.json` - addon description
//! - `/catalog/{type}/{id}.json` - show listing
//! - `/meta/{type}/{id}.json` - show detail with episodes
//! - `/stream/{type}/{id}.json` - playable sources
//!
//! Every resource request re-scrapes the site; failures produce empty payloads.

pub mod addon;
pub mod config;
pub mod handlers;
pub mod manifest;
pub mod router;
pub mod state;

pub use addon::Addon;
pub use config::{AddonConfig, ConfigError};
pub use manifest::Manifest;
pub use router::create_router;
pub use state::AppState;

/// Bind the configured port and serve until the process is stopped.
pub async fn run_server(config: AddonConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "SerialGo Addon running at http://localhost:{} (scraping {})",
        config.port,
        config.base_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
