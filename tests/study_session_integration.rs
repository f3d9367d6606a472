//! Study Session Integration Tests
//!
//! End-to-end tests driving a session through line commands and checking
//! the rendered page.

use app_core::config::StudyConfig;
use app_core::embeds::{derive_youtube_embed_url, EmbedError, EmbedMode};
use app_state::{CommandOutcome, SessionCommand, StudySession};
use app_ui::page::render_page;
use app_ui::presenter::SidebarContent;
use i18n::{Language, Translator};
use sqrr_reader::command::{parse_line, DriverCommand};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to feed driver lines into a session, returning the last outcome
fn run(session: &mut StudySession, lines: &[&str]) -> Option<CommandOutcome> {
    let mut last = None;
    for line in lines {
        match parse_line(line).unwrap() {
            Some(DriverCommand::Session(command)) => {
                last = Some(session.dispatch(command).unwrap());
            }
            Some(DriverCommand::Render) | Some(DriverCommand::Quit) | None => {}
        }
    }
    last
}

fn english() -> Translator {
    Translator::new(Language::EnUs).unwrap()
}

/// Scenario: watch URL embeds as a YouTube player
#[test]
fn test_youtube_watch_url_renders_player() {
    let mut session = StudySession::default();
    let outcome = run(
        &mut session,
        &["url https://www.youtube.com/watch?v=dQw4w9WgXcQ", "youtube"],
    );

    assert_eq!(outcome, Some(CommandOutcome::Embedded(EmbedMode::YouTube)));
    let page = render_page(&session, &english());
    match page.sidebar.content {
        SidebarContent::YouTube { frame, .. } => {
            assert_eq!(frame.src, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        }
        other => panic!("expected youtube content, got {:?}", other),
    }
    assert!(page.sidebar.error.is_none());
}

/// Scenario: short URL without scheme gives the same player
#[test]
fn test_youtube_short_url_renders_same_player() {
    let mut long = StudySession::default();
    run(&mut long, &["url https://www.youtube.com/watch?v=dQw4w9WgXcQ", "youtube"]);
    let mut short = StudySession::default();
    run(&mut short, &["url youtu.be/dQw4w9WgXcQ", "youtube"]);

    let t = english();
    assert_eq!(
        render_page(&long, &t).sidebar.content,
        render_page(&short, &t).sidebar.content
    );
}

/// Scenario: garbage URL is rejected and the placeholder stays
#[test]
fn test_invalid_youtube_url() {
    let mut session = StudySession::default();
    let outcome = run(&mut session, &["url not a url", "youtube"]);

    assert_eq!(outcome, Some(CommandOutcome::Rejected(EmbedError::InvalidYoutubeUrl)));
    assert_eq!(session.selector().mode(), EmbedMode::None);

    let page = render_page(&session, &english());
    assert_eq!(page.sidebar.error.unwrap().message, "Invalid YouTube URL");
    assert!(matches!(page.sidebar.content, SidebarContent::Placeholder { .. }));
}

/// Scenario: non-http scheme is not a website
#[test]
fn test_invalid_website_url() {
    let mut session = StudySession::default();
    run(&mut session, &["url ftp://example.com", "website"]);

    assert_eq!(session.selector().mode(), EmbedMode::None);
    assert_eq!(session.selector().error(), Some(EmbedError::InvalidWebsiteUrl));
    let page = render_page(&session, &english());
    assert_eq!(page.sidebar.error.unwrap().message, "Invalid website URL");
}

/// Scenario: whitespace-only text is rejected
#[test]
fn test_whitespace_text_rejected() {
    let mut session = StudySession::default();
    session
        .dispatch(SessionCommand::SetText { text: "   ".to_string() })
        .unwrap();
    let outcome = session
        .dispatch(SessionCommand::Embed { command: app_core::EmbedCommand::Text })
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Rejected(EmbedError::EmptyTextContent));
    assert_eq!(session.selector().mode(), EmbedMode::None);
    let page = render_page(&session, &english());
    assert_eq!(page.sidebar.error.unwrap().message, "Please enter some text content");
}

/// Scenario: two lines of text become two paragraphs in order
#[test]
fn test_text_becomes_paragraphs() {
    let mut session = StudySession::default();
    run(&mut session, &["text line one\\nline two", "embed-text"]);

    let page = render_page(&session, &english());
    match page.sidebar.content {
        SidebarContent::Text { paragraphs } => {
            let lines: Vec<&str> = paragraphs.iter().map(|p| p.content.as_str()).collect();
            assert_eq!(lines, ["line one", "line two"]);
        }
        other => panic!("expected text content, got {:?}", other),
    }
}

/// Every recognized URL shape embeds
#[test]
fn test_all_youtube_shapes_embed() {
    let id = "M7lc1UVf-VE";
    let urls = [
        format!("https://youtu.be/{}", id),
        format!("https://www.youtube.com/v/{}?version=3", id),
        format!("https://www.youtube.com/u/1/{}", id),
        format!("https://www.youtube.com/embed/{}", id),
        format!("https://www.youtube.com/watch?v={}#t=30", id),
        format!("https://m.youtube.com/watch?app=desktop&v={}", id),
    ];

    for url in &urls {
        let mut session = StudySession::default();
        session.dispatch(SessionCommand::SetUrl { url: url.clone() }).unwrap();
        let outcome = session
            .dispatch(SessionCommand::Embed { command: app_core::EmbedCommand::YouTube })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Embedded(EmbedMode::YouTube), "url: {}", url);
        assert_eq!(
            derive_youtube_embed_url(url),
            Some(format!("https://www.youtube.com/embed/{}", id))
        );
    }
}

/// Website prefix check is literal
#[test]
fn test_website_prefixes() {
    let accepted = ["http://a", "https://a", "https://example.com/page?q=1"];
    let rejected = ["", "example.com", "ftp://a", "Https://a", "  https://a", "mailto:a@b.c"];

    for url in accepted {
        let mut session = StudySession::default();
        session.dispatch(SessionCommand::SetUrl { url: url.to_string() }).unwrap();
        assert_eq!(
            session
                .dispatch(SessionCommand::Embed { command: app_core::EmbedCommand::Website })
                .unwrap(),
            CommandOutcome::Embedded(EmbedMode::Website),
            "url: {:?}",
            url
        );
    }

    for url in rejected {
        let mut session = StudySession::default();
        session.dispatch(SessionCommand::SetUrl { url: url.to_string() }).unwrap();
        assert_eq!(
            session
                .dispatch(SessionCommand::Embed { command: app_core::EmbedCommand::Website })
                .unwrap(),
            CommandOutcome::Rejected(EmbedError::InvalidWebsiteUrl),
            "url: {:?}",
            url
        );
    }
}

/// Editing the URL after embedding a video degrades to the placeholder
#[test]
fn test_stale_youtube_url_shows_placeholder() {
    let mut session = StudySession::default();
    run(&mut session, &["url youtu.be/dQw4w9WgXcQ", "youtube", "url oops"]);

    assert_eq!(session.selector().mode(), EmbedMode::YouTube);
    let page = render_page(&session, &english());
    assert!(matches!(page.sidebar.content, SidebarContent::Placeholder { .. }));
}

/// Editing the URL after embedding a website never yields a live link to it
#[test]
fn test_stale_website_url_shows_placeholder() {
    let mut session = StudySession::default();
    run(&mut session, &["url https://example.com", "website", "url javascript:alert(1)"]);

    assert_eq!(session.selector().mode(), EmbedMode::Website);
    let page = render_page(&session, &english());
    assert!(matches!(page.sidebar.content, SidebarContent::Placeholder { .. }));

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["sidebar"]["content"]["kind"], "placeholder");
    assert!(json["sidebar"]["content"].get("link").is_none());
}

/// Switching between sources replaces the active one
#[test]
fn test_switching_sources() {
    let mut session = StudySession::default();
    run(
        &mut session,
        &["url https://example.com", "website", "text notes", "embed-text"],
    );
    assert_eq!(session.selector().mode(), EmbedMode::Text);

    run(&mut session, &["youtube"]);
    // example.com is not a YouTube link, so the text stays
    assert_eq!(session.selector().mode(), EmbedMode::Text);
    assert_eq!(session.selector().error(), Some(EmbedError::InvalidYoutubeUrl));

    run(&mut session, &["website"]);
    assert_eq!(session.selector().mode(), EmbedMode::Website);
    assert!(session.selector().error().is_none());
}

/// Checklist and notes flow through to the page
#[test]
fn test_checklist_and_notes() {
    let mut session = StudySession::default();
    run(
        &mut session,
        &["check 0 0", "check 0 1", "check 0 1", "note 3 Summary\\nof chapter"],
    );

    let page = render_page(&session, &english());
    assert!(page.steps[0].tasks[0].checked);
    assert!(!page.steps[0].tasks[1].checked);
    assert_eq!(page.steps[3].note.value, "Summary\nof chapter");
    assert_eq!(session.checklist().progress(), (1, 12));
}

/// A config file drives the page title, locale, and steps
#[test]
fn test_session_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "title": "Capítulo 1",
            "locale": "pt-BR",
            "steps": [
                {{"title": "Survey", "icon": "search", "color": "amber", "tasks": ["Skim"]}},
                {{"title": "Recite", "icon": "message-circle", "color": "blue", "tasks": ["Summarize", "Answer"]}}
            ]
        }}"#
    )
    .unwrap();

    let config = StudyConfig::load(file.path()).unwrap();
    let translator = Translator::for_locale(&config.locale).unwrap();
    let session = StudySession::try_new(config).unwrap();

    let page = render_page(&session, &translator);
    assert_eq!(page.title.content, "Capítulo 1");
    assert_eq!(page.steps.len(), 2);
    assert_eq!(page.steps[1].heading.content, "Etapa 2: Recite");
    assert_eq!(page.steps[1].tasks.len(), 2);
    assert_eq!(page.sidebar.heading.content, "Fontes");
}

/// Rendered page is valid JSON with the sidebar mode tag
#[test]
fn test_rendered_page_json() {
    let mut session = StudySession::default();
    run(&mut session, &["url https://example.com", "website"]);

    let json = serde_json::to_value(render_page(&session, &english())).unwrap();
    assert_eq!(json["sidebar"]["content"]["kind"], "website");
    assert_eq!(json["sidebar"]["content"]["link"]["href"], "https://example.com");
    assert_eq!(json["sidebar"]["content"]["link"]["target"], "_blank");
    assert_eq!(json["steps"].as_array().unwrap().len(), 4);
}
