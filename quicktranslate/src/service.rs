//! Translate request handling
//!
//! `TranslateService` runs one request through the whole pipeline:
//!
//! 1. validate the raw fields
//! 2. check a provider is configured
//! 3. call the provider
//! 4. transliterate Arabic output
//! 5. record the result in the recent history
//!
//! Each stage returns early on failure, so the history is only touched once
//! everything before it has succeeded.

use crate::error::{TranslateError, TranslateResult};
use crate::history::{HistoryRecord, RecentHistory};
use crate::language::Language;
use crate::translator::{MachineTranslator, ProbeReport};
use crate::transliteration::transliterate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Translate request as it arrives on the wire
///
/// Every field is optional so that a missing field is reported as a
/// validation error rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// A request that passed validation
///
/// The only way to get one is [`TranslationRequest::validate`], so the text is
/// always trimmed and non-empty:
///
/// ```compile_fail
/// use quicktranslate::{Language, TranslationRequest};
///
/// let request = TranslationRequest {
///     text: "   ".to_string(),
///     source: Language::English,
///     target: Language::Spanish,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source: Language,
    target: Language,
}

impl TranslationRequest {
    /// Trimmed, non-empty text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }

    /// Check a raw request and resolve its language codes
    pub fn validate(raw: RawTranslateRequest) -> TranslateResult<Self> {
        let text = raw.text.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            return Err(TranslateError::Validation(
                "Please enter some text to translate".to_string(),
            ));
        }

        let (Some(source), Some(target)) = (
            raw.source_lang.as_deref().filter(|s| !s.is_empty()),
            raw.target_lang.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Err(TranslateError::Validation(
                "Source and target languages are required".to_string(),
            ));
        };

        let (Some(source), Some(target)) = (Language::from_code(source), Language::from_code(target))
        else {
            return Err(TranslateError::Validation(
                "Unsupported language selected".to_string(),
            ));
        };

        Ok(Self {
            text: text.to_string(),
            source,
            target,
        })
    }
}

/// Successful translate response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateResponse {
    /// Text to show the user, transliterated for Arabic
    pub translated_text: String,
    /// Text exactly as the provider returned it
    pub original_api_text: String,
}

/// Orchestrates validation, translation and history for each request
pub struct TranslateService {
    translator: Option<Arc<dyn MachineTranslator>>,
    history: RecentHistory,
}

impl TranslateService {
    pub fn new(translator: Arc<dyn MachineTranslator>) -> Self {
        Self::with_translator(Some(translator))
    }

    /// A service without credentials; every translate call fails with
    /// `TranslateError::Configuration`.
    pub fn unconfigured() -> Self {
        Self::with_translator(None)
    }

    pub fn with_translator(translator: Option<Arc<dyn MachineTranslator>>) -> Self {
        Self {
            translator,
            history: RecentHistory::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.translator.is_some()
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    fn translator(&self) -> TranslateResult<&Arc<dyn MachineTranslator>> {
        self.translator
            .as_ref()
            .ok_or_else(|| TranslateError::Configuration("API key missing".to_string()))
    }

    /// Run a raw request through the full pipeline
    pub async fn handle(&self, raw: RawTranslateRequest) -> TranslateResult<TranslateResponse> {
        let request = TranslationRequest::validate(raw)?;
        self.translate(&request).await
    }

    /// Translate an already validated request
    pub async fn translate(&self, request: &TranslationRequest) -> TranslateResult<TranslateResponse> {
        let translator = self.translator()?;

        let api_text = translator
            .translate(&request.text, request.source.code(), request.target.code())
            .await
            .inspect_err(|e| {
                warn!(
                    "{} failed ({} → {}): {}",
                    translator.provider_name(),
                    request.source,
                    request.target,
                    e
                )
            })?;

        let display_text = match request.target {
            Language::Arabic => transliterate(&api_text),
            _ => api_text.clone(),
        };

        self.history.insert_front(HistoryRecord::now(
            &request.text,
            &display_text,
            request.target.display_name(),
        ));

        info!(
            "Translated {} chars {} → {}",
            request.text.chars().count(),
            request.source,
            request.target
        );

        Ok(TranslateResponse {
            translated_text: display_text,
            original_api_text: api_text,
        })
    }

    /// Probe the configured provider
    pub async fn probe(&self) -> TranslateResult<ProbeReport> {
        self.translator()?.probe().await
    }
}
