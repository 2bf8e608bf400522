//! HTTP routes and handlers

use axum::{
    extract::{DefaultBodyLimit, Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::page;
use crate::state::AppState;

/// Upper bound on the submitted form size
const MAX_FORM_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/api/models", get(list_models))
        .route("/api/predict", post(predict))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES));

    // CORS stays off unless explicitly enabled for external API consumers.
    let allow_any_origin = std::env::var("SENTIVIEW_ALLOW_ANY_ORIGIN")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    if allow_any_origin {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

#[derive(Debug, Serialize)]
struct ModelsResponse {
    models: Vec<String>,
}

/// Model names for the form's selection control, in registration order
async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = state.registry.names().map(str::to_owned).collect();
    Json(ModelsResponse { models })
}

/// Form fields submitted by the prediction page
#[derive(Debug, Deserialize)]
struct PredictForm {
    message: String,
    model_choice: String,
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    label: String,
    score: f64,
}

/// Main prediction handler: resolve the model, call the hosted endpoint,
/// answer with the top-ranked (label, score) pair.
async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Json<PredictResponse>, AppError> {
    metrics::counter!("sentiview_requests_total").increment(1);
    info!("User selected model: {}", form.model_choice);

    let endpoint = state.registry.resolve(&form.model_choice)?;

    let started = Instant::now();
    let prediction = state.client.predict(&form.message, endpoint).await?;
    metrics::histogram!("sentiview_inference_latency_ms")
        .record(started.elapsed().as_secs_f64() * 1000.0);

    info!(
        "Prediction complete: {} ({:.4}) in {:?}",
        prediction.label,
        prediction.score,
        started.elapsed()
    );

    Ok(Json(PredictResponse {
        label: prediction.label,
        score: prediction.score,
    }))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
pub struct AppError(sentiview_core::Error);

impl From<sentiview_core::Error> for AppError {
    fn from(err: sentiview_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use sentiview_core::Error;

        metrics::counter!("sentiview_errors_total").increment(1);

        let (status, message) = match &self.0 {
            // Caller picked a model we don't serve
            Error::UnknownModel(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            // The remote service failed or answered nonsense; the user can retry
            Error::InferenceRequest(_) | Error::EmptyPrediction => {
                warn!("Inference call failed: {}", self.0);
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            // Operator misconfiguration or anything else unexpected
            _ => {
                error!("Request failed: {}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
        };

        let body = json!({
            "error": {
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}
