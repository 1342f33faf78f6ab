use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, Result};

pub const MAX_TOKENS: u32 = 900;
pub const TEMPERATURE: f64 = 0.7;

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
}

/// Produces the raw story text for a topic.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Returns `AppError::NoStory` when the service answers without usable text.
    async fn generate(&self, zone: &str, language: &str, query: &str) -> Result<String>;
}

pub fn build_system_prompt(zone: &str, language: &str) -> String {
    format!(
        "Write a {zone} cultural story in {language}.\n\
         Split the story into exactly 4 scenes.\n\
         Each scene must be ONE paragraph (5–7 lines).\n\
         Do not use bullet points."
    )
}

/// Chat-completion client for Groq's OpenAI-compatible API.
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.groq_api_key.clone(),
            base_url: config.groq_base_url.trim_end_matches('/').to_string(),
            model: config.groq_model.clone(),
        }
    }
}

#[async_trait]
impl StoryGenerator for GroqClient {
    async fn generate(&self, zone: &str, language: &str, query: &str) -> Result<String> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: build_system_prompt(zone, language),
                },
                Message {
                    role: "user".into(),
                    content: query.into(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| AppError::Generation(e.to_string()))?;

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Invalid response body: {}", e)))?;

        extract_story(&json)
    }
}

fn extract_story(json: &serde_json::Value) -> Result<String> {
    match json["choices"][0]["message"]["content"].as_str() {
        Some(story) if !story.is_empty() => Ok(story.to_string()),
        _ => Err(AppError::NoStory),
    }
}
