//! Classifier Types
//!
//! Core data structures shared by the rule engine, the model client and
//! the API layer.

use serde::{Deserialize, Serialize};

// ============================================================
// MODE
// ============================================================

/// Classification strategy, resolved once at process start and immutable
/// for the lifetime of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fixed canned result, ignores all inputs
    Mock,
    /// Local keyword rule engine
    Rules,
    /// Model API call with rules fallback
    Model,
}

impl Mode {
    /// Mode name as reported by the status endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mock => "MOCK",
            Mode::Rules => "RULES",
            Mode::Model => "OPENAI",
        }
    }
}

// ============================================================
// SOURCE
// ============================================================

/// Provenance tag: which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Mock,
    Rules,
    Ai,
    RulesFallback,
    NoApiKey,
}

// ============================================================
// CLASSIFICATION
// ============================================================

/// Two-level label with a confidence score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub subcategory: String,
    pub confidence: f64,
}

impl Classification {
    pub fn new(category: &str, subcategory: &str, confidence: f64) -> Self {
        Self {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            confidence,
        }
    }

    /// Deterministic zero-confidence result used when MODEL mode has no
    /// credential configured. Not an error.
    pub fn unclassified() -> Self {
        Self::new("Other", "Other", 0.0)
    }
}

/// Result of one classify call. `error` is populated only on the
/// `rules_fallback` path and carries the stringified upstream failure.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyOutcome {
    #[serde(flatten)]
    pub classification: Classification,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifyOutcome {
    pub fn new(classification: Classification, source: Source) -> Self {
        Self {
            classification,
            source,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Source::RulesFallback).unwrap(),
            "\"rules_fallback\""
        );
        assert_eq!(
            serde_json::to_string(&Source::NoApiKey).unwrap(),
            "\"no_api_key\""
        );
    }

    #[test]
    fn test_outcome_flattens_and_omits_absent_error() {
        let outcome = ClassifyOutcome::new(
            Classification::new("Data", "Machine Learning", 0.8),
            Source::Rules,
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["category"], "Data");
        assert_eq!(json["subcategory"], "Machine Learning");
        assert_eq!(json["source"], "rules");
        assert!(json.get("error").is_none());
    }
}
