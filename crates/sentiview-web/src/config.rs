//! Server configuration

use sentiview_core::{Error, ModelEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bearer token for the hosted inference API
    #[serde(default)]
    pub api_token: Option<String>,

    /// Total time budget for one remote inference call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Selectable models, in the order they appear on the form
    #[serde(default = "default_models")]
    pub models: Vec<ModelEntry>,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::cli::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config: Self = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides (--token also picks up HF_API_TOKEN)
        if let Some(token) = &cli.token {
            config.api_token = Some(token.clone());
        }

        Ok(config)
    }

    /// The configured bearer token.
    ///
    /// Fails with [`Error::AuthConfig`] when no usable token is present, so
    /// startup aborts before any unauthenticated request could be sent.
    pub fn bearer_token(&self) -> sentiview_core::Result<&str> {
        self.api_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                Error::auth_config(
                    "no API token configured; set api_token in the config file, \
                     pass --token, or export HF_API_TOKEN",
                )
            })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            models: default_models(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// The models the original deployment shipped with
fn default_models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new(
            "RoBERTa",
            "https://api-inference.huggingface.co/models/siebert/sentiment-roberta-large-english",
        ),
        ModelEntry::new(
            "BERT",
            "https://api-inference.huggingface.co/models/nlptown/bert-base-multilingual-uncased-sentiment",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_the_stock_model_table() {
        let config = AppConfig::default();
        let names: Vec<&str> = config.models.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, vec!["RoBERTa", "BERT"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_yaml_overrides_and_field_defaults() {
        let yaml = r#"
api_token: "hf_secret"
models:
  - name: "DistilBERT"
    endpoint: "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.api_token.as_deref(), Some("hf_secret"));
        assert_eq!(config.models.len(), 1);
        assert_eq!(config.models[0].name, "DistilBERT");
        // Unspecified fields fall back to defaults
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_token_is_an_auth_config_error() {
        let config = AppConfig::default();

        assert!(matches!(
            config.bearer_token(),
            Err(Error::AuthConfig(_))
        ));
    }

    #[test]
    fn test_blank_token_is_an_auth_config_error() {
        let config = AppConfig {
            api_token: Some("   ".to_string()),
            ..AppConfig::default()
        };

        assert!(matches!(
            config.bearer_token(),
            Err(Error::AuthConfig(_))
        ));
    }

    #[test]
    fn test_present_token_is_returned_verbatim() {
        let config = AppConfig {
            api_token: Some("hf_secret".to_string()),
            ..AppConfig::default()
        };

        assert_eq!(config.bearer_token().unwrap(), "hf_secret");
    }
}
