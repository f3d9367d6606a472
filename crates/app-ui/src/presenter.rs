//! Sidebar presenter
//!
//! Turns the selector's mode and the raw source input into what the
//! sidebar shows. Every mode is matched explicitly, and inconsistent state
//! (for example a URL edited into garbage after a successful embed) falls
//! back to the placeholder.

use crate::components::{Link, Text, VideoFrame};
use crate::theme::palette;
use app_core::embeds::{self, EmbedMode};
use i18n::Translator;
use serde::{Deserialize, Serialize};

/// What the sidebar source panel displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SidebarContent {
    /// Nothing embedded
    Placeholder {
        /// Notice text
        notice: Text,
    },
    /// Website that cannot be framed; offered as a link instead
    Website {
        /// Explanation of why the site is not shown inline
        notice: Text,
        /// Outbound link to the site
        link: Link,
    },
    /// YouTube player
    #[serde(rename = "youtube", rename_all = "camelCase")]
    YouTube {
        /// Player frame
        frame: VideoFrame,
        /// Link to the video on YouTube
        watch_link: Link,
    },
    /// Pasted text, one paragraph per line
    Text {
        /// Paragraphs in input order
        paragraphs: Vec<Text>,
    },
}

impl SidebarContent {
    /// Mode this content corresponds to
    pub fn mode(&self) -> EmbedMode {
        match self {
            SidebarContent::Placeholder { .. } => EmbedMode::None,
            SidebarContent::Website { .. } => EmbedMode::Website,
            SidebarContent::YouTube { .. } => EmbedMode::YouTube,
            SidebarContent::Text { .. } => EmbedMode::Text,
        }
    }
}

fn placeholder(t: &Translator) -> SidebarContent {
    SidebarContent::Placeholder {
        notice: Text::new(t.tr("sidebar-placeholder")).with_color(palette::TEXT_MUTED),
    }
}

/// Split pasted text into paragraphs
///
/// Splits on `\n` only; empty lines become empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Decide what the sidebar shows for the given state
pub fn present_sidebar(mode: EmbedMode, url: &str, text: &str, t: &Translator) -> SidebarContent {
    match mode {
        EmbedMode::None => placeholder(t),
        EmbedMode::Website if embeds::is_website_url(url) => SidebarContent::Website {
            notice: Text::caption(t.tr("website-notice")).with_color(palette::TEXT_SECONDARY),
            link: Link::external(url, t.tr("open-website")),
        },
        EmbedMode::Website => placeholder(t),
        EmbedMode::YouTube => match embeds::YouTubeEmbed::from_url(url) {
            Ok(video) => SidebarContent::YouTube {
                frame: VideoFrame::youtube(video.embed_url(), t.tr("youtube-player-title")),
                watch_link: Link::external(video.watch_url(), t.tr("open-on-youtube")),
            },
            Err(_) => placeholder(t),
        },
        EmbedMode::Text => SidebarContent::Text {
            paragraphs: split_paragraphs(text).into_iter().map(Text::new).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TextRole;
    use i18n::Language;

    fn english() -> Translator {
        Translator::new(Language::EnUs).unwrap()
    }

    #[test]
    fn test_none_shows_placeholder() {
        let content = present_sidebar(EmbedMode::None, "https://example.com", "text", &english());
        match content {
            SidebarContent::Placeholder { notice } => {
                assert_eq!(notice.content, "No source content embedded yet.");
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_website_shows_external_link() {
        let content = present_sidebar(EmbedMode::Website, "https://example.com", "", &english());
        match content {
            SidebarContent::Website { notice, link } => {
                assert!(notice.content.contains("security restrictions"));
                assert_eq!(link.href, "https://example.com");
                assert_eq!(link.label, "Open Website");
                assert!(link.opens_new_context());
            }
            other => panic!("expected website, got {:?}", other),
        }
    }

    #[test]
    fn test_youtube_shows_player() {
        let content = present_sidebar(
            EmbedMode::YouTube,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "",
            &english(),
        );
        match content {
            SidebarContent::YouTube { frame, watch_link } => {
                assert_eq!(frame.src, "https://www.youtube.com/embed/dQw4w9WgXcQ");
                assert_eq!(frame.title, "YouTube video player");
                assert_eq!(watch_link.href, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
            }
            other => panic!("expected youtube, got {:?}", other),
        }
    }

    #[test]
    fn test_youtube_with_stale_url_degrades_to_placeholder() {
        let content = present_sidebar(EmbedMode::YouTube, "edited away", "", &english());
        assert_eq!(content.mode(), EmbedMode::None);
    }

    #[test]
    fn test_website_with_stale_url_degrades_to_placeholder() {
        let t = english();
        for url in ["javascript:alert(1)", "example.com", "", "ftp://example.com"] {
            let content = present_sidebar(EmbedMode::Website, url, "", &t);
            assert_eq!(content.mode(), EmbedMode::None, "url: {:?}", url);
        }
    }

    #[test]
    fn test_text_splits_into_paragraphs() {
        let content = present_sidebar(EmbedMode::Text, "", "line one\nline two", &english());
        match content {
            SidebarContent::Text { paragraphs } => {
                let lines: Vec<&str> = paragraphs.iter().map(|p| p.content.as_str()).collect();
                assert_eq!(lines, ["line one", "line two"]);
                assert!(paragraphs.iter().all(|p| p.role == TextRole::Paragraph));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_split_paragraphs_keeps_empty_lines() {
        assert_eq!(split_paragraphs("a\n\nb"), ["a", "", "b"]);
        assert_eq!(split_paragraphs("a\n"), ["a", ""]);
        assert_eq!(split_paragraphs(""), [""]);
        assert_eq!(split_paragraphs("a\r\nb"), ["a\r", "b"]);
    }

    #[test]
    fn test_presenter_uses_translator() {
        let t = Translator::new(Language::PtBr).unwrap();
        let content = present_sidebar(EmbedMode::None, "", "", &t);
        match content {
            SidebarContent::Placeholder { notice } => {
                assert_eq!(notice.content, "Nenhuma fonte incorporada ainda.");
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_content_serialization_tag() {
        let content = present_sidebar(EmbedMode::Text, "", "hi", &english());
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.starts_with(r#"{"kind":"text""#));

        let content = present_sidebar(EmbedMode::YouTube, "youtu.be/dQw4w9WgXcQ", "", &english());
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.contains(r#""kind":"youtube""#));
        assert!(json.contains("watchLink"));
    }
}
