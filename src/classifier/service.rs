//! Classifier Service
//!
//! Mode dispatch and the fallback chain. `classify` never fails: a model
//! failure degrades to the rule engine, a missing credential to a fixed
//! zero-confidence result.

use log::warn;
use reqwest::Client;

use super::model;
use super::rules::rules_classify;
use super::types::{Classification, ClassifyOutcome, Mode, Source};

/// Classifier configuration, read once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub mode: Mode,
    /// Model API credential; absence is a normal state, not an error
    pub api_key: Option<String>,
    pub model: String,
    /// Overridable for tests against a local mock server
    pub api_base: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Rules,
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Resolve the mode from the environment. Flag precedence is
    /// MOCK > RULES > model API.
    pub fn from_env() -> Self {
        let mode = if env_flag("USE_MOCK_AI") {
            Mode::Mock
        } else if env_flag("USE_RULES") {
            Mode::Rules
        } else {
            Mode::Model
        };

        Self {
            mode,
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "true").unwrap_or(false)
}

/// The classification service. Stateless across calls; holds only the
/// immutable config and a reusable HTTP client.
pub struct Classifier {
    config: ClassifierConfig,
    http: Client,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn has_key(&self) -> bool {
        self.config.has_key()
    }

    /// Classify one application. Every path yields a well-formed outcome.
    pub async fn classify(&self, title: &str, description: &str, major: &str) -> ClassifyOutcome {
        match self.config.mode {
            // MOCK mode: always return the same result
            Mode::Mock => ClassifyOutcome::new(
                Classification::new("Software Engineering", "Backend", 0.97),
                Source::Mock,
            ),
            // RULES mode: keyword-based classifier
            Mode::Rules => {
                ClassifyOutcome::new(rules_classify(title, description, major), Source::Rules)
            }
            // OPENAI mode (requires key)
            Mode::Model => self.classify_with_model(title, description, major).await,
        }
    }

    async fn classify_with_model(
        &self,
        title: &str,
        description: &str,
        major: &str,
    ) -> ClassifyOutcome {
        // No credential: deterministic short-circuit, no network call
        let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return ClassifyOutcome::new(Classification::unclassified(), Source::NoApiKey);
        };

        match model::model_classify(
            &self.http,
            &self.config.api_base,
            key,
            &self.config.model,
            title,
            description,
            major,
        )
        .await
        {
            Ok(classification) => ClassifyOutcome::new(classification, Source::Ai),
            Err(e) => {
                warn!("model classification failed, falling back to rules: {}", e);
                ClassifyOutcome {
                    classification: rules_classify(title, description, major),
                    source: Source::RulesFallback,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
