//! Deep Translate (RapidAPI) provider
//!
//! This module talks to the Deep Translate API hosted on RapidAPI, which
//! mirrors the Google Translate v2 request shape.
//!
//! # Authentication
//!
//! RapidAPI authenticates with two headers, `x-rapidapi-key` and
//! `x-rapidapi-host`. The key is loaded from the `RAPIDAPI_KEY` environment
//! variable and is never embedded in the binary.
//!
//! # Response shape
//!
//! The API is inconsistent about `data.translations`: sometimes it is a single
//! object, sometimes a list of objects. Both are accepted; for a list the first
//! element wins.

use crate::error::{Malformed, TranslateError, TranslateResult};
use crate::translator::{MachineTranslator, ProbeReport};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::debug;

/// RapidAPI host of the Deep Translate API
pub const DEFAULT_API_HOST: &str = "deep-translate1.p.rapidapi.com";

const TRANSLATE_PATH: &str = "/language/translate/v2";

/// Deep Translate API provider
#[derive(Clone)]
pub struct DeepTranslateProvider {
    /// RapidAPI key
    api_key: String,
    /// Value of the `x-rapidapi-host` header
    api_host: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Scheme and authority requests are sent to
    base_url: String,
    /// Upper bound on a translate call
    request_timeout: Duration,
    /// Upper bound on a reachability probe
    probe_timeout: Duration,
}

impl DeepTranslateProvider {
    /// Default upper bound on a translate call
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default upper bound on a reachability probe
    pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a provider with an explicit API key and host
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(TranslateError)` - If the key is empty or the HTTP client cannot be built
    pub fn new(api_key: String, api_host: String) -> TranslateResult<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslateError::Configuration(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| {
                TranslateError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = format!("https://{}", api_host);
        Ok(Self {
            api_key,
            api_host,
            client,
            base_url,
            request_timeout: Self::REQUEST_TIMEOUT,
            probe_timeout: Self::PROBE_TIMEOUT,
        })
    }

    /// Create a provider from `RAPIDAPI_KEY` and, optionally, `RAPIDAPI_HOST`
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var("RAPIDAPI_KEY").map_err(|_| {
            TranslateError::Configuration("RAPIDAPI_KEY environment variable not set".to_string())
        })?;
        let api_host =
            std::env::var("RAPIDAPI_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        Self::new(api_key, api_host)
    }

    /// Send requests somewhere other than `https://{api_host}`
    ///
    /// The `x-rapidapi-host` header keeps its configured value.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the translate timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the probe timeout
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    fn translate_url(&self) -> String {
        format!("{}{}", self.base_url, TRANSLATE_PATH)
    }
}

impl std::fmt::Debug for DeepTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepTranslateProvider")
            .field("api_key", &"***")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    #[serde(default)]
    translations: Option<Translations>,
}

/// The two shapes `data.translations` comes in
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Translations {
    List(Vec<TranslatedItem>),
    Single(TranslatedItem),
}

#[derive(Debug, Deserialize)]
struct TranslatedItem {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

/// Extract the translated text from a provider response body
///
/// # Returns
///
/// * `Ok(String)` - The translation, never empty
/// * `Err(TranslateError::MalformedResponse)` - Invalid JSON or no translation in either shape
pub fn parse_translation(body: &str) -> TranslateResult<String> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| Malformed::Unparseable(e.to_string()))?;

    let translated = match response.data.and_then(|data| data.translations) {
        Some(Translations::Single(item)) => item.translated_text,
        Some(Translations::List(items)) => items
            .into_iter()
            .next()
            .and_then(|item| item.translated_text),
        None => None,
    };

    match translated.filter(|text| !text.is_empty()) {
        Some(text) => Ok(text),
        None => Err(Malformed::NoTranslation.into()),
    }
}

#[async_trait]
impl MachineTranslator for DeepTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<String> {
        let body = json!({
            "q": text,
            "source": source_lang,
            "target": target_lang,
        });

        debug!(
            "POST {} ({} → {}, {} chars)",
            self.translate_url(),
            source_lang,
            target_lang,
            text.chars().count()
        );

        let response = self
            .client
            .post(self.translate_url())
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .json(&body)
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            debug!("Provider returned {}: {}", status, raw);
            return Err(TranslateError::Upstream {
                status: status.as_u16(),
                body: raw,
            });
        }

        parse_translation(&raw)
    }

    async fn probe(&self) -> TranslateResult<ProbeReport> {
        let start = Instant::now();
        let response = self
            .client
            .get(&self.base_url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .timeout(self.probe_timeout)
            .send()
            .await?;

        Ok(ProbeReport {
            status: response.status().as_u16(),
            latency: start.elapsed(),
        })
    }

    fn provider_name(&self) -> &str {
        "Deep Translate"
    }
}
