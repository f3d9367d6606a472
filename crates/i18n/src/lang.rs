//! Supported languages and language negotiation

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Languages with a bundled message catalogue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English (United States)
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Portuguese (Brazil)
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Language {
    /// All bundled languages
    pub const ALL: [Language; 2] = [Language::EnUs, Language::PtBr];

    /// BCP 47 tag
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::PtBr => "pt-BR",
        }
    }

    /// Parsed language identifier
    pub fn langid(&self) -> LanguageIdentifier {
        // Tags above are static and well-formed.
        self.code().parse().unwrap_or_default()
    }

    /// Exact match on a BCP 47 tag
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Fluent source for this language
    pub(crate) fn resource(&self) -> &'static str {
        match self {
            Language::EnUs => include_str!("../locales/en-US/main.ftl"),
            Language::PtBr => include_str!("../locales/pt-BR/main.ftl"),
        }
    }
}

/// Pick the best bundled language for a list of requested locales
///
/// Unparseable tags are skipped. Falls back to [`Language::EnUs`].
///
/// # Example
///
/// ```
/// use i18n::lang::{negotiate, Language};
///
/// assert_eq!(negotiate(&["pt"]), Language::PtBr);
/// assert_eq!(negotiate(&["de-DE", "en-GB"]), Language::EnUs);
/// ```
pub fn negotiate(requested: &[&str]) -> Language {
    let requested: Vec<LanguageIdentifier> =
        requested.iter().filter_map(|tag| tag.parse().ok()).collect();
    let available: Vec<LanguageIdentifier> = Language::ALL.iter().map(Language::langid).collect();
    let default = Language::default().langid();

    let negotiated = negotiate_languages(
        &requested,
        &available,
        Some(&default),
        NegotiationStrategy::Filtering,
    );

    negotiated
        .first()
        .and_then(|id| Language::from_code(&id.to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.langid().to_string(), lang.code());
        }
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn test_negotiate_exact() {
        assert_eq!(negotiate(&["pt-BR"]), Language::PtBr);
        assert_eq!(negotiate(&["en-US"]), Language::EnUs);
    }

    #[test]
    fn test_negotiate_by_language_only() {
        assert_eq!(negotiate(&["pt"]), Language::PtBr);
        assert_eq!(negotiate(&["pt-PT"]), Language::PtBr);
    }

    #[test]
    fn test_negotiate_fallback() {
        assert_eq!(negotiate(&["ja-JP"]), Language::EnUs);
        assert_eq!(negotiate(&[]), Language::EnUs);
        assert_eq!(negotiate(&["!!not a tag"]), Language::EnUs);
    }

    #[test]
    fn test_negotiate_respects_order() {
        assert_eq!(negotiate(&["pt-BR", "en-US"]), Language::PtBr);
        assert_eq!(negotiate(&["en-US", "pt-BR"]), Language::EnUs);
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::PtBr).unwrap();
        assert_eq!(json, "\"pt-BR\"");
    }
}
