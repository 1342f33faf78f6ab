use axum::Json;
use axum::http::StatusCode;

use crate::api::models::{Scene, StoryResponse};

// Failures are reported in the body; the status is always 200.

pub fn success(scenes: Vec<Scene>) -> (StatusCode, Json<StoryResponse>) {
    (StatusCode::OK, Json(StoryResponse::Scenes { scenes }))
}

pub fn failure(message: &str) -> (StatusCode, Json<StoryResponse>) {
    (
        StatusCode::OK,
        Json(StoryResponse::Error {
            error: message.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_body_only_carries_error() {
        let (status, Json(body)) = failure("Story topic missing");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "error": "Story topic missing" })
        );
    }

    #[test]
    fn success_body_only_carries_scenes() {
        let scene = Scene {
            text: "The tide came in slowly over the rocks.".into(),
            image: "https://images.example/1".into(),
        };
        let (status, Json(body)) = success(vec![scene]);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "scenes": [{
                "text": "The tide came in slowly over the rocks.",
                "image": "https://images.example/1"
            }] })
        );
    }
}
