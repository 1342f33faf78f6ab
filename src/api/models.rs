use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Incoming topic. Absent or `null` fields read as empty strings.
///
/// `zone` and `language` only end up in the prompt text, so numbers and
/// booleans are taken as written. `query` must be a string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoryRequest {
    #[serde(deserialize_with = "any_as_text")]
    pub zone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub query: String,
    #[serde(deserialize_with = "any_as_text")]
    pub language: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn any_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub text: String,
    pub image: String,
}

/// Body of every `/api/story` reply. Callers tell the two apart by which field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryResponse {
    Scenes { scenes: Vec<Scene> },
    Error { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_are_empty() {
        let req: StoryRequest =
            serde_json::from_str(r#"{"zone": null, "query": "A lighthouse"}"#).unwrap();
        assert_eq!(req.zone, "");
        assert_eq!(req.language, "");
        assert_eq!(req.query, "A lighthouse");
    }

    #[test]
    fn scalar_zone_and_language_are_kept_as_text() {
        let req: StoryRequest = serde_json::from_str(
            r#"{"zone": 5, "query": "A lighthouse", "language": true}"#,
        )
        .unwrap();
        assert_eq!(req.zone, "5");
        assert_eq!(req.language, "true");
        assert_eq!(req.query, "A lighthouse");
    }

    #[test]
    fn non_string_query_is_rejected() {
        assert!(serde_json::from_str::<StoryRequest>(r#"{"query": 42}"#).is_err());
    }
}
