//! Display languages and per-language text.
//!
//! The storefront is published in French, English and Arabic. Arabic is
//! rendered right-to-left, the other two left-to-right.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Ar,
}

/// Text direction for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::Fr | Language::En => Direction::Ltr,
        }
    }

    /// Pick the first supported language from an `Accept-Language` header value.
    ///
    /// Quality weights are honoured; region subtags (`fr-MA`) match their
    /// base language.
    pub fn from_accept_language(header: &str) -> Option<Language> {
        let mut candidates: Vec<(f32, Language)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.trim().split(';');
                let tag = pieces.next()?.trim();
                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                let base = tag.split('-').next()?;
                base.parse::<Language>().ok().map(|lang| (quality, lang))
            })
            .filter(|(q, _)| *q > 0.0)
            .collect();

        // Stable sort keeps header order for equal weights
        candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        candidates.first().map(|(_, lang)| *lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// A value that varies by display language.
///
/// All three languages are always present (possibly empty); unknown keys
/// are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LocalizedText {
    pub fr: String,
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(fr: impl Into<String>, en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Iterate over the variants in `fr`, `en`, `ar` order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        Language::ALL.into_iter().map(move |lang| self.get(lang))
    }

    /// Languages whose text is empty or whitespace only
    pub fn missing(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.get(*lang).trim().is_empty())
            .collect()
    }
}
