use axum::{
    routing::post,
    Router,
    extract::{rejection::JsonRejection, Json, State},
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use std::time::Instant;

use crate::error::{Result, AppError};
use crate::api::models::{Scene, StoryRequest};
use crate::api::response;
use crate::images::derive_image_query;
use crate::scenes::{assemble_scenes, split_scenes};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/story", post(story_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn story_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<StoryRequest>, JsonRejection>,
) -> Response {
    // An unreadable body carries no topic.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected story request body");
            return AppError::MissingTopic.into_response();
        }
    };

    if req.query.trim().is_empty() {
        return AppError::MissingTopic.into_response();
    }

    tracing::info!(
        zone = %req.zone,
        language = %req.language,
        query = %req.query,
        model = %state.config.groq_model,
        "Story request"
    );
    let start_time = Instant::now();

    let result = process_story_request(&state, &req).await;
    tracing::info!("Request processing took: {:?}", start_time.elapsed());

    match result {
        Ok(scenes) => response::success(scenes).into_response(),
        Err(err) => {
            match &err {
                AppError::NoStory => tracing::warn!("Generation service returned no story"),
                other => tracing::error!(error = %other, "Backend error"),
            }
            err.into_response()
        }
    }
}

/// Generates the story, splits it, then looks up images. The image search only
/// runs once generation has succeeded.
async fn process_story_request(state: &AppState, req: &StoryRequest) -> Result<Vec<Scene>> {
    let llm_start = Instant::now();
    let story = state
        .generator
        .generate(&req.zone, &req.language, &req.query)
        .await?;
    tracing::debug!(chars = story.chars().count(), "Story generated in {:?}", llm_start.elapsed());

    let texts = split_scenes(&story);

    let image_query = derive_image_query(&req.query);
    tracing::debug!(image_query = %image_query, "Searching images");
    let images = state.images.search(&image_query).await?;
    tracing::debug!(found = images.len(), "Image search finished");

    Ok(assemble_scenes(texts, &images))
}
