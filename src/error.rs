use axum::response::{IntoResponse, Response};

use crate::api::response;

pub const MISSING_TOPIC: &str = "Story topic missing";
pub const NO_STORY: &str = "No story generated";
pub const UPSTREAM_BUSY: &str = "AI is busy or API issue. Please wait and try again.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("story topic missing")]
    MissingTopic,

    #[error("generation service returned no story")]
    NoStory,

    #[error("Story generation failed: {0}")]
    Generation(String),

    #[error("Image search failed: {0}")]
    ImageSearch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// The message callers see. Upstream failures all collapse to one string.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingTopic => MISSING_TOPIC,
            AppError::NoStory => NO_STORY,
            AppError::Generation(_) | AppError::ImageSearch(_) | AppError::Config(_) => {
                UPSTREAM_BUSY
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::failure(self.public_message()).into_response()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
