//! Embed selector
//!
//! Holds the raw source input typed by the user together with the active
//! [`EmbedMode`] and the most recent validation error. Each command
//! validates the input for its target mode and either transitions or
//! records why it could not.

use crate::embeds::{self, EmbedError, EmbedMode, Result};
use serde::{Deserialize, Serialize};

/// Raw URL and text entered by the user
///
/// Both fields are edited freely by the user and are never cleared or
/// rewritten by the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInput {
    /// URL field (website or YouTube)
    pub url: String,
    /// Pasted text field
    pub text: String,
}

/// Commands accepted by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedCommand {
    /// Embed the URL as a YouTube video
    #[serde(rename = "youtube")]
    YouTube,
    /// Embed the URL as an outbound website link
    Website,
    /// Embed the pasted text
    Text,
}

impl EmbedCommand {
    /// Mode this command transitions to on success
    pub fn target(&self) -> EmbedMode {
        match self {
            EmbedCommand::YouTube => EmbedMode::YouTube,
            EmbedCommand::Website => EmbedMode::Website,
            EmbedCommand::Text => EmbedMode::Text,
        }
    }
}

/// Source embed selector state
///
/// # Example
///
/// ```
/// use app_core::embeds::{EmbedError, EmbedMode};
/// use app_core::selector::EmbedSelector;
///
/// let mut selector = EmbedSelector::new();
/// selector.set_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// assert_eq!(selector.try_embed_youtube(), Ok(EmbedMode::YouTube));
///
/// selector.set_url("ftp://example.com");
/// assert_eq!(selector.try_embed_website(), Err(EmbedError::InvalidWebsiteUrl));
/// assert_eq!(selector.mode(), EmbedMode::YouTube);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedSelector {
    source: SourceInput,
    mode: EmbedMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<EmbedError>,
}

impl EmbedSelector {
    /// Create a selector with nothing embedded and empty inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Current URL input
    pub fn url(&self) -> &str {
        &self.source.url
    }

    /// Current text input
    pub fn text(&self) -> &str {
        &self.source.text
    }

    /// Replace the URL input
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.source.url = url.into();
    }

    /// Replace the text input
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.source.text = text.into();
    }

    /// Active embed mode
    pub fn mode(&self) -> EmbedMode {
        self.mode
    }

    /// Error from the most recent command, if it failed
    pub fn error(&self) -> Option<EmbedError> {
        self.error
    }

    /// Embed the URL as a YouTube video
    pub fn try_embed_youtube(&mut self) -> Result<EmbedMode> {
        self.apply(EmbedCommand::YouTube)
    }

    /// Embed the URL as an outbound website link
    pub fn try_embed_website(&mut self) -> Result<EmbedMode> {
        self.apply(EmbedCommand::Website)
    }

    /// Embed the pasted text
    pub fn try_embed_text(&mut self) -> Result<EmbedMode> {
        self.apply(EmbedCommand::Text)
    }

    /// Run a command against the current input
    ///
    /// On success the mode becomes the command's target and the error is
    /// cleared. On failure the mode is left as it was and the error is set;
    /// the same error is also returned so callers can branch on it.
    pub fn apply(&mut self, command: EmbedCommand) -> Result<EmbedMode> {
        match self.validate(command) {
            Ok(()) => {
                let previous = self.mode;
                self.mode = command.target();
                self.error = None;
                tracing::debug!(from = %previous, to = %self.mode, "source embedded");
                Ok(self.mode)
            }
            Err(error) => {
                self.error = Some(error);
                tracing::debug!(mode = %self.mode, %error, ?command, "source rejected");
                Err(error)
            }
        }
    }

    fn validate(&self, command: EmbedCommand) -> Result<()> {
        let valid = match command {
            EmbedCommand::YouTube => embeds::extract_youtube_id(&self.source.url).is_some(),
            EmbedCommand::Website => embeds::is_website_url(&self.source.url),
            EmbedCommand::Text => embeds::has_text_content(&self.source.text),
        };

        if valid {
            Ok(())
        } else {
            Err(match command {
                EmbedCommand::YouTube => EmbedError::InvalidYoutubeUrl,
                EmbedCommand::Website => EmbedError::InvalidWebsiteUrl,
                EmbedCommand::Text => EmbedError::EmptyTextContent,
            })
        }
    }
}
