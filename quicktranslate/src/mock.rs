//! Mock translator for testing
//!
//! A deterministic, network-free translator so the request pipeline can be
//! exercised without an API key. It counts calls, which lets tests check that
//! a rejected request never reached the provider.
//!
//! # Example
//!
//! ```ignore
//! use quicktranslate::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Fixed("hola".to_string()));
//!     let result = mock.translate("hello", "en", "es").await.unwrap();
//!     assert_eq!(result, "hola");
//!     assert_eq!(mock.calls(), 1);
//! }
//! ```

use crate::error::TranslateResult;
use crate::translator::{MachineTranslator, ProbeReport};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Always answer with the same text
    Fixed(String),

    /// Fail every call with the given error
    Error(crate::error::TranslateError),

    /// Return input unchanged
    NoOp,
}

/// Mock translator that simulates provider behaviour
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `translate` calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.mode {
            MockMode::Fixed(answer) => Ok(answer.clone()),
            MockMode::Error(err) => Err(err.clone()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }

    async fn probe(&self) -> TranslateResult<ProbeReport> {
        match &self.mode {
            MockMode::Error(err) => Err(err.clone()),
            _ => Ok(ProbeReport {
                status: 200,
                latency: Duration::ZERO,
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
