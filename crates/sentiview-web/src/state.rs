use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use sentiview_core::{InferenceClient, ModelRegistry, Result};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
///
/// Everything in here is read-only after startup, so handlers clone freely
/// and no locking is needed between concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Model name to endpoint table
    pub registry: Arc<ModelRegistry>,

    /// Client for the hosted inference API
    pub client: Arc<InferenceClient>,

    /// Prometheus render handle for the /metrics endpoint
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Build the process-wide state once from configuration.
    ///
    /// Fails fast on a missing credential or a bad model table, before the
    /// listener ever binds.
    pub fn from_config(config: &AppConfig, metrics_handle: PrometheusHandle) -> Result<Self> {
        let token = config.bearer_token()?;
        let registry = ModelRegistry::new(config.models.clone())?;
        let client =
            InferenceClient::new(token, Duration::from_secs(config.request_timeout_secs))?;

        Ok(Self {
            registry: Arc::new(registry),
            client: Arc::new(client),
            metrics_handle,
        })
    }
}
