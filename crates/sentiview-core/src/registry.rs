//! Model registry: the static table of selectable models
//!
//! Maps each human-readable model name to the hosted inference endpoint that
//! serves it. The table is built once at startup from configuration and is
//! read-only afterwards, so handlers can share it behind an `Arc` without
//! locking. Name order is part of the contract: `names()` yields entries in
//! registration order, which is what populates the selection control on the
//! form.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// A single registered model: display name plus its remote endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Human-readable name, unique within the registry
    pub name: String,

    /// Endpoint URL of the hosted model
    pub endpoint: String,
}

impl ModelEntry {
    /// Create a new model entry
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Immutable, insertion-ordered mapping from model name to endpoint URL
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<ModelEntry>,
}

impl ModelRegistry {
    /// Build a registry from configured entries.
    ///
    /// Rejects duplicate names and endpoints that do not parse as URLs, so a
    /// bad table fails startup instead of the first user request.
    pub fn new(entries: Vec<ModelEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::config("model registry is empty"));
        }

        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(Error::config("model entry with empty name"));
            }

            Url::parse(&entry.endpoint).map_err(|e| {
                Error::config(format!(
                    "invalid endpoint for model '{}': {}",
                    entry.name, e
                ))
            })?;

            if entries[..i].iter().any(|prior| prior.name == entry.name) {
                return Err(Error::config(format!(
                    "duplicate model name: {}",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Registered model names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Resolve a model name to its endpoint URL
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.endpoint.as_str())
            .ok_or_else(|| Error::unknown_model(name))
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no models
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<ModelEntry> {
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

    #[test]
    fn test_names_preserve_registration_order() {
        let registry = ModelRegistry::new(sample_entries()).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["RoBERTa", "BERT"]);
    }

    #[test]
    fn test_resolve_returns_configured_url() {
        let registry = ModelRegistry::new(sample_entries()).unwrap();

        let endpoint = registry.resolve("RoBERTa").unwrap();
        assert_eq!(
            endpoint,
            "https://api-inference.huggingface.co/models/siebert/sentiment-roberta-large-english"
        );

        // Stable across calls
        assert_eq!(registry.resolve("RoBERTa").unwrap(), endpoint);
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let registry = ModelRegistry::new(sample_entries()).unwrap();

        match registry.resolve("DistilBERT") {
            Err(Error::UnknownModel(name)) => assert_eq!(name, "DistilBERT"),
            other => panic!("expected UnknownModel, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut entries = sample_entries();
        entries.push(ModelEntry::new("RoBERTa", "https://example.com/other"));

        assert!(matches!(
            ModelRegistry::new(entries),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_malformed_endpoint_rejected() {
        let entries = vec![ModelEntry::new("Broken", "not a url")];

        assert!(matches!(
            ModelRegistry::new(entries),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(
            ModelRegistry::new(Vec::new()),
            Err(Error::Config(_))
        ));
    }
}
