//! Inference adapter for the hosted sentiment-scoring API
//!
//! Wraps the one remote call this system makes: POST the user's text to a
//! model endpoint from the registry, parse the per-class score list that
//! comes back, and pick the top-ranked class. The remote wire shape is
//! `[[{"label": ..., "score": ...}, ...]]`: the provider nests one inner
//! array per input example, and exactly one example is ever sent, so the
//! adapter always reads element 0 of the outer array.
//!
//! One outbound request per invocation. No retries, no caching, no fallback
//! model; every failure propagates to the caller.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

/// Default bound on the total time spent waiting for the remote service
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outbound request body for the hosted inference API
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// One per-class score as returned by the remote service
#[derive(Debug, Clone, Deserialize)]
pub struct RawScore {
    /// Class label, e.g. `POSITIVE`
    pub label: String,

    /// Class probability in `[0, 1]`
    pub score: f64,
}

/// The highest-scoring class for a single request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPrediction {
    /// Winning class label
    pub label: String,

    /// Probability of the winning class, in `[0, 1]`
    pub score: f64,
}

/// HTTP client for a hosted sentiment model
///
/// Holds the shared connection pool and the bearer credential. Cheap to
/// clone; endpoint URLs come from the [`ModelRegistry`](crate::ModelRegistry)
/// per call, so one client serves every registered model.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    token: String,
}

impl InferenceClient {
    /// Create a client with the given bearer token and request timeout.
    ///
    /// Fails with [`Error::AuthConfig`] when the token is blank, so a
    /// misconfigured process can never send an unauthenticated request.
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::auth_config("bearer token is missing or blank"));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, token })
    }

    /// Create a client with the default request timeout
    pub fn with_default_timeout(token: impl Into<String>) -> Result<Self> {
        Self::new(token, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Score `text` against the model served at `endpoint` and return the
    /// top-ranked (label, score) pair.
    ///
    /// `endpoint` should come from [`ModelRegistry::resolve`](crate::ModelRegistry::resolve).
    /// The text is forwarded as-is; length limits are the remote service's
    /// concern.
    pub async fn predict(&self, text: &str, endpoint: &str) -> Result<RankedPrediction> {
        debug!("Sending inference request to {}", endpoint);

        let response = self
            .http
            .post(endpoint)
            .bearer_auth(&self.token)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body = response.text().await?;
        let batches: Vec<Vec<RawScore>> = serde_json::from_str(&body)
            .map_err(|e| Error::inference(format!("malformed response body: {}", e)))?;

        // One inner array per input example; we only ever send one.
        let scores = batches.into_iter().next().unwrap_or_default();
        debug!("Received {} class scores", scores.len());

        rank(scores)
    }
}

/// Pick the entry with the maximum score.
///
/// The sort is stable and descending, so for tied scores the remote
/// service's first-listed entry wins.
fn rank(mut scores: Vec<RawScore>) -> Result<RankedPrediction> {
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let top = scores.into_iter().next().ok_or(Error::EmptyPrediction)?;

    Ok(RankedPrediction {
        label: top.label,
        score: top.score,
    })
}
