//! Source embed support for the study sidebar
//!
//! This module defines the display modes the sidebar can be in, the
//! validation rules for each kind of source (YouTube video, website link,
//! pasted text), and the errors reported when a source is rejected.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Length of a YouTube video identifier
pub const YOUTUBE_ID_LEN: usize = 11;

/// Errors that can occur when validating a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmbedError {
    /// The URL does not contain a recognizable YouTube video reference
    #[error("Invalid YouTube URL")]
    InvalidYoutubeUrl,

    /// The URL does not start with `http://` or `https://`
    #[error("Invalid website URL")]
    InvalidWebsiteUrl,

    /// The pasted text is empty after trimming
    #[error("Please enter some text content")]
    EmptyTextContent,
}

impl EmbedError {
    /// Message catalogue id used to localize this error
    pub fn message_id(&self) -> &'static str {
        match self {
            EmbedError::InvalidYoutubeUrl => "error-invalid-youtube-url",
            EmbedError::InvalidWebsiteUrl => "error-invalid-website-url",
            EmbedError::EmptyTextContent => "error-empty-text-content",
        }
    }
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Kind of source currently shown in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedMode {
    /// Nothing embedded yet
    #[default]
    None,
    /// External website, shown as an outbound link
    Website,
    /// YouTube video player
    #[serde(rename = "youtube")]
    YouTube,
    /// Pasted text split into paragraphs
    Text,
}

impl EmbedMode {
    /// Get the mode as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedMode::None => "none",
            EmbedMode::Website => "website",
            EmbedMode::YouTube => "youtube",
            EmbedMode::Text => "text",
        }
    }

    /// Check whether any source is embedded
    pub fn is_embedded(&self) -> bool {
        !matches!(self, EmbedMode::None)
    }
}

impl std::fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YouTube video embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeEmbed {
    /// Video ID
    pub video_id: String,
}

impl YouTubeEmbed {
    /// Create a new YouTube embed
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
        }
    }

    /// Parse a YouTube embed out of a user-supplied URL
    pub fn from_url(url: &str) -> Result<Self> {
        extract_youtube_id(url)
            .map(Self::new)
            .ok_or(EmbedError::InvalidYoutubeUrl)
    }

    /// Get the embed URL
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }

    /// Get the watch URL
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

fn youtube_regex() -> &'static Regex {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    YOUTUBE_REGEX.get_or_init(|| {
        // Matches any of:
        // - youtu.be/<id>
        // - .../v/<id>
        // - .../u/<n>/<id>
        // - .../embed/<id>
        // - watch?v=<id>
        // - &v=<id>
        // The leading `.*` is greedy, so the last marker in the string wins.
        Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").unwrap()
    })
}

/// Extract an 11-character YouTube video ID from a URL
///
/// Returns `None` when no recognized marker is present or the candidate
/// identifier is not exactly [`YOUTUBE_ID_LEN`] ASCII characters long.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    let captures = youtube_regex().captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.is_ascii() && id.len() == YOUTUBE_ID_LEN).then_some(id)
}

/// Derive the player URL for a YouTube link
///
/// # Example
///
/// ```
/// use app_core::embeds::derive_youtube_embed_url;
///
/// assert_eq!(
///     derive_youtube_embed_url("youtu.be/dQw4w9WgXcQ").as_deref(),
///     Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
/// );
/// assert_eq!(derive_youtube_embed_url("not a url"), None);
/// ```
pub fn derive_youtube_embed_url(url: &str) -> Option<String> {
    YouTubeEmbed::from_url(url).ok().map(|embed| embed.embed_url())
}

/// Check whether a URL can be offered as an outbound website link
///
/// Only the literal, case-sensitive scheme prefix is checked.
pub fn is_website_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Check whether pasted text has any non-whitespace content
pub fn has_text_content(text: &str) -> bool {
    !text.trim().is_empty()
}
