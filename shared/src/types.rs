//! Common types for the shared crate
//!
//! Utility types used across the storefront

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Display language of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (default, RTL)
    Ar,
    /// English
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Ar
    }
}

/// A label carried in both storefront languages
///
/// Every customer-facing string travels as a pair; the client picks the
/// side matching the active [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ar: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Pick the side for the given language
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}
