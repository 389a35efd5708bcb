//! Translation proxy core
//!
//! Forwards text to the Deep Translate API on RapidAPI, transliterates Arabic
//! output into Latin characters and remembers the last few translations.
//!
//! # Example
//!
//! ```ignore
//! use quicktranslate::{DeepTranslateProvider, RawTranslateRequest, TranslateService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepTranslateProvider::from_env()?;
//!     let service = TranslateService::new(Arc::new(provider));
//!
//!     let response = service
//!         .handle(RawTranslateRequest {
//!             text: Some("Hello".to_string()),
//!             source_lang: Some("en".to_string()),
//!             target_lang: Some("ar".to_string()),
//!         })
//!         .await?;
//!
//!     println!("{}", response.translated_text);
//!     Ok(())
//! }
//! ```

pub mod deep_translate;
pub mod error;
pub mod history;
pub mod language;
pub mod mock;
pub mod service;
pub mod translator;
pub mod transliteration;

// Integration tests (only available during testing)
#[cfg(test)]
mod integration_tests;

// Re-export main types for convenient access
pub use deep_translate::{DEFAULT_API_HOST, DeepTranslateProvider, parse_translation};
pub use error::{Malformed, TranslateError, TranslateResult};
pub use history::{HistoryRecord, RecentHistory};
pub use language::{Language, LanguageEntry, supported_languages};
pub use mock::{MockMode, MockTranslator};
pub use service::{RawTranslateRequest, TranslateResponse, TranslateService, TranslationRequest};
pub use translator::{MachineTranslator, ProbeReport};
pub use transliteration::transliterate;
