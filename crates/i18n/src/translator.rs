//! Message lookup backed by Fluent bundles

use crate::lang::{self, Language};
use fluent::{FluentArgs, FluentBundle, FluentResource};
use thiserror::Error;

/// Errors that can occur while building a translator
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// The bundled Fluent source failed to parse
    #[error("Failed to parse messages for {lang}: {details}")]
    Parse {
        /// Language tag
        lang: &'static str,
        /// Parser diagnostics
        details: String,
    },

    /// The resource could not be added to the bundle
    #[error("Failed to load messages for {lang}: {details}")]
    Bundle {
        /// Language tag
        lang: &'static str,
        /// Bundle diagnostics
        details: String,
    },

    /// No bundled catalogue for the requested tag
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Formats UI messages for one language
///
/// Missing messages format as their own id so a gap in a catalogue shows
/// up on screen instead of failing the render.
pub struct Translator {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Build a translator for a bundled language
    pub fn new(language: Language) -> Result<Self> {
        let lang = language.code();
        let resource = FluentResource::try_new(language.resource().to_string()).map_err(
            |(_, errors)| TranslatorError::Parse {
                lang,
                details: format!("{:?}", errors),
            },
        )?;

        let mut bundle = FluentBundle::new(vec![language.langid()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| TranslatorError::Bundle {
                lang,
                details: format!("{:?}", errors),
            })?;

        Ok(Self { language, bundle })
    }

    /// Build a translator for the best match of a locale tag
    pub fn for_locale(tag: &str) -> Result<Self> {
        Self::new(lang::negotiate(&[tag]))
    }

    /// Build a translator for an exact bundled tag
    pub fn for_exact(tag: &str) -> Result<Self> {
        let language = Language::from_code(tag)
            .ok_or_else(|| TranslatorError::UnsupportedLanguage(tag.to_string()))?;
        Self::new(language)
    }

    /// Language of this translator
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the catalogue has a message with this id
    pub fn has(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format a message without arguments
    pub fn tr(&self, id: &str) -> String {
        self.format(id, None)
    }

    /// Format a message with string arguments
    pub fn tr_args(&self, id: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(id, Some(&fluent_args))
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(id).and_then(|m| m.value()) else {
            tracing::warn!(id, lang = self.language.code(), "missing message");
            return id.to_string();
        };

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(id, ?errors, "message formatted with errors");
        }
        value.into_owned()
    }
}
