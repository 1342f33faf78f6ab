pub mod api;
pub mod config;
pub mod error;
pub mod images;
pub mod llm;
pub mod scenes;

use std::sync::Arc;
use config::Config;
use images::{ImageSearch, UnsplashClient};
use llm::{GroqClient, StoryGenerator};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn StoryGenerator>,
    pub images: Arc<dyn ImageSearch>,
}

impl AppState {
    /// Wires the Groq and Unsplash clients over one shared connection pool.
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::new();
        Self {
            generator: Arc::new(GroqClient::new(client.clone(), &config)),
            images: Arc::new(UnsplashClient::new(client, &config)),
            config: Arc::new(config),
        }
    }
}
