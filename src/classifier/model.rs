//! Model API Client
//!
//! One chat-completion call per classification: deterministic decoding
//! (temperature 0), small output budget, strict-JSON prompt. Any failure
//! here is reported to the service layer, which falls back to the rule
//! engine instead of surfacing the error.

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::types::Classification;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}: {1}")]
    ApiStatus(u16, String),

    #[error("invalid JSON in completion: {0}")]
    InvalidJson(String),
}

const SYSTEM_PROMPT: &str =
    r#"Return only JSON {"category":"...","subcategory":"...","confidence":0..1}"#;

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Ask the model API to classify one application.
pub async fn model_classify(
    client: &Client,
    api_base: &str,
    api_key: &str,
    model: &str,
    title: &str,
    description: &str,
    major: &str,
) -> Result<Classification, ModelError> {
    let major = if major.is_empty() { "Unknown" } else { major };
    let description = if description.is_empty() {
        "(none)"
    } else {
        description
    };

    let body = json!({
        "model": model,
        "temperature": 0,
        "max_tokens": 40,
        "response_format": { "type": "json_object" },
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            {
                "role": "user",
                "content": format!("Major: {}\nTitle: {}\nDescription: {}", major, title, description),
            },
        ],
    });

    debug!("[model_classify] POST {}/chat/completions", api_base);

    let response = client
        .post(format!("{}/chat/completions", api_base))
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ModelError::ApiStatus(status.as_u16(), text));
    }

    let completion: ChatResponse = response.json().await?;
    let content = completion
        .choices
        .first()
        .and_then(|c| c.message.content.as_deref())
        .filter(|c| !c.is_empty())
        // Absent content counts as an empty object, not a failure
        .unwrap_or("{}");

    parse_content(content)
}

/// Parse the completion content into a classification. Missing fields
/// default independently: labels to "Other", confidence to 0.5.
fn parse_content(content: &str) -> Result<Classification, ModelError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ModelError::InvalidJson(e.to_string()))?;

    Ok(Classification {
        category: value
            .get("category")
            .and_then(|v| v.as_str())
            .unwrap_or("Other")
            .to_string(),
        subcategory: value
            .get("subcategory")
            .and_then(|v| v.as_str())
            .unwrap_or("Other")
            .to_string(),
        confidence: value
            .get("confidence")
            .and_then(|v| v.as_f64())
            .unwrap_or(0.5),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_content() {
        let result = parse_content(
            r#"{"category":"Data","subcategory":"Machine Learning","confidence":0.9}"#,
        )
        .unwrap();
        assert_eq!(result.category, "Data");
        assert_eq!(result.subcategory, "Machine Learning");
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_parse_defaults_apply_independently() {
        let result = parse_content(r#"{"category":"Data"}"#).unwrap();
        assert_eq!(result.category, "Data");
        assert_eq!(result.subcategory, "Other");
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_parse_non_numeric_confidence_defaults() {
        let result =
            parse_content(r#"{"category":"Data","subcategory":"ML","confidence":"high"}"#).unwrap();
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_parse_empty_object() {
        let result = parse_content("{}").unwrap();
        assert_eq!(result.category, "Other");
        assert_eq!(result.subcategory, "Other");
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_parse_malformed_json_is_an_error() {
        let err = parse_content("not json at all").unwrap_err();
        assert!(matches!(err, ModelError::InvalidJson(_)));
    }
}
