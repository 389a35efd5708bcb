//! Translation provider trait
//!
//! This module defines the `MachineTranslator` trait so the request pipeline
//! can run against the real provider or a deterministic mock without caring
//! which one it has.
//!
//! # Example
//!
//! ```ignore
//! use quicktranslate::{DeepTranslateProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeepTranslateProvider::from_env()?;
//!     let result = provider.translate("Hello, world!", "en", "fr").await?;
//!     println!("{}", result); // "Bonjour le monde !"
//!     Ok(())
//! }
//! ```

use crate::error::TranslateResult;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Outcome of a reachability probe against a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// HTTP status the provider answered with
    pub status: u16,
    /// Round-trip time of the probe
    #[serde(rename = "latency_ms", serialize_with = "as_millis")]
    pub latency: Duration,
}

fn as_millis<S: serde::Serializer>(latency: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(latency.as_millis() as u64)
}

/// Generic trait for translation providers
///
/// All methods are async since the real provider is a network call.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang`
    ///
    /// Language codes are passed through as-is; callers validate them first.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text, never empty
    /// * `Err(TranslateError)` - Upstream, malformed response or transport failure
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<String>;

    /// Check that the provider is reachable and measure latency
    async fn probe(&self) -> TranslateResult<ProbeReport>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}
