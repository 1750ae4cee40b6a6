use std::sync::Arc;

use serialgo_core::{SerialgoClient, SerialgoScraper};

use crate::addon::Addon;
use crate::config::AddonConfig;

/// Shared handler state.
///
/// The addon holds no mutable state, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub addon: Arc<Addon>,
}

impl AppState {
    pub fn new(addon: Addon) -> Self {
        Self {
            addon: Arc::new(addon),
        }
    }

    /// Build the state from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &AddonConfig) -> serialgo_core::Result<Self> {
        let client = SerialgoClient::with_config(config.client_config())?;
        Ok(Self::new(Addon::new(SerialgoScraper::with_client(client))))
    }
}
