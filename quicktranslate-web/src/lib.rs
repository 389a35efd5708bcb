//! HTTP front-end for the translation proxy
//!
//! Routes:
//!
//! * `GET /` - index page
//! * `POST /translate` - translate `{text, source_lang, target_lang}`
//! * `GET /languages` - supported languages
//! * `GET /history` - recent translations, newest first
//! * `GET /ping` - liveness
//! * `GET /ping-api` - provider reachability and latency

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use quicktranslate::{
    DEFAULT_API_HOST, DeepTranslateProvider, HistoryRecord, LanguageEntry, Malformed,
    RawTranslateRequest, TranslateError, TranslateResponse, TranslateService,
    supported_languages,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Server configuration, from flags or the environment
#[derive(Debug, Clone, Parser)]
#[command(name = "quicktranslate-web", version, about = "Web front-end for the Deep Translate API")]
pub struct Config {
    /// RapidAPI key for the Deep Translate API
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// RapidAPI host header value
    #[arg(long, env = "RAPIDAPI_HOST", default_value = DEFAULT_API_HOST)]
    pub api_host: String,

    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 50000)]
    pub port: u16,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the translate service from configuration
///
/// A missing or unusable key does not stop the server; translate requests
/// fail with a configuration error instead.
pub fn build_service(config: &Config) -> TranslateService {
    let Some(api_key) = config.api_key.clone().filter(|key| !key.trim().is_empty()) else {
        warn!("RAPIDAPI_KEY is not set, translate requests will fail");
        return TranslateService::unconfigured();
    };

    match DeepTranslateProvider::new(api_key, config.api_host.clone()) {
        Ok(provider) => {
            info!("Using Deep Translate via {}", provider.api_host());
            TranslateService::new(Arc::new(provider))
        }
        Err(e) => {
            warn!("Failed to initialize translator: {}", e);
            TranslateService::unconfigured()
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslateService>,
}

impl AppState {
    pub fn new(service: TranslateService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A pipeline error on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub TranslateError);

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            TranslateError::Validation(_) => StatusCode::BAD_REQUEST,
            TranslateError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            TranslateError::Configuration(_)
            | TranslateError::MalformedResponse(_)
            | TranslateError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        let (error, details) = match &self.0 {
            TranslateError::Validation(msg) => (msg.clone(), None),
            TranslateError::Configuration(_) => (self.0.to_string(), None),
            TranslateError::Upstream { body, .. } => (self.0.to_string(), Some(body.clone())),
            TranslateError::MalformedResponse(Malformed::Unparseable(msg)) => (
                "Failed to parse translation response".to_string(),
                Some(msg.clone()),
            ),
            TranslateError::MalformedResponse(Malformed::NoTranslation) => {
                (self.0.to_string(), None)
            }
            TranslateError::Transport(msg) => {
                ("Translation service error".to_string(), Some(msg.clone()))
            }
        };
        ErrorResponse { error, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/translate", post(translate))
        .route("/languages", get(languages))
        .route("/history", get(history))
        .route("/ping", get(ping))
        .route("/ping-api", get(ping_api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

/// Decode a translate body
///
/// An empty body (`{}`, `null`, `[]`, `""`, `0`, `false`) is rejected like
/// unparseable JSON, before any field is looked at.
fn decode_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<RawTranslateRequest, ApiError> {
    let invalid = || ApiError(TranslateError::Validation("Invalid JSON".to_string()));

    let Ok(Json(value)) = payload else {
        return Err(invalid());
    };
    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    };
    if empty {
        return Err(invalid());
    }
    serde_json::from_value(value).map_err(|_| invalid())
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = decode_request(payload)?;
    let response = state.service.handle(request).await?;
    Ok(Json(response))
}

async fn languages() -> Json<Vec<LanguageEntry>> {
    Json(supported_languages())
}

async fn history(State(state): State<AppState>) -> Json<Vec<HistoryRecord>> {
    Json(state.service.history().list())
}

async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn ping_api(State(state): State<AppState>) -> (StatusCode, Json<ProbeResponse>) {
    match state.service.probe().await {
        Ok(report) => (
            StatusCode::OK,
            Json(ProbeResponse {
                status: "ok",
                upstream_status: Some(report.status),
                latency_ms: Some(report.latency.as_millis() as u64),
                error: None,
            }),
        ),
        Err(e) => {
            warn!("Provider probe failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeResponse {
                    status: "error",
                    upstream_status: None,
                    latency_ms: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
