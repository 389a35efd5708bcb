//! Supported languages
//!
//! The provider accepts many more codes, but the front-end only offers this
//! fixed set. Codes are matched exactly: `en-US` or `EN` are not accepted.

use serde::Serialize;
use std::fmt;

/// A language the front-end can translate from or to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Swahili,
    Italian,
    Portuguese,
    Japanese,
    Korean,
    ChineseSimplified,
    Arabic,
    Russian,
    Hindi,
}

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 13] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Swahili,
        Language::Italian,
        Language::Portuguese,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::Arabic,
        Language::Russian,
        Language::Hindi,
    ];

    /// The ISO 639-1 code sent to the provider
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Swahili => "sw",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::ChineseSimplified => "zh",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::Hindi => "hi",
        }
    }

    /// Human-readable name shown in the UI and stored in history
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Swahili => "Swahili",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::Arabic => "Arabic",
            Language::Russian => "Russian",
            Language::Hindi => "Hindi",
        }
    }

    /// Look up a language by its code
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wire shape for the language list endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}

/// Every supported language as `{code, name}` pairs
pub fn supported_languages() -> Vec<LanguageEntry> {
    Language::ALL
        .iter()
        .map(|lang| LanguageEntry {
            code: lang.code(),
            name: lang.display_name(),
        })
        .collect()
}
