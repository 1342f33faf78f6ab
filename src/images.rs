use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, Result};

pub const IMAGES_PER_STORY: usize = 4;
const QUERY_TOKENS: usize = 3;

static STORY_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)story").expect("Failed to compile story pattern"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<Photo>>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    #[serde(default)]
    regular: Option<String>,
}

/// Looks up image URLs for a free-text search term, best match first.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// Turns a story topic into a short photo search term.
///
/// Every case-insensitive `story` is removed (also inside longer words), and the
/// first three remaining whitespace-separated tokens are kept.
pub fn derive_image_query(query: &str) -> String {
    STORY_WORD
        .replace_all(query, "")
        .split_whitespace()
        .take(QUERY_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            access_key: config.unsplash_access_key.clone(),
            base_url: config.unsplash_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let per_page = IMAGES_PER_STORY.to_string();
        // Error statuses are not rejected: an error body without `results` means no images.
        let res = self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("client_id", self.access_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ImageSearch(e.to_string()))?;

        let body: SearchResponse = res
            .json()
            .await
            .map_err(|e| AppError::ImageSearch(format!("Invalid response body: {}", e)))?;

        Ok(regular_urls(body))
    }
}

fn regular_urls(body: SearchResponse) -> Vec<String> {
    body.results
        .unwrap_or_default()
        .into_iter()
        .map(|photo| photo.urls.regular.unwrap_or_default())
        .collect()
}
