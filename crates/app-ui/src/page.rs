//! Study page composition
//!
//! Builds the full page description from a [`StudySession`]: header,
//! navigation, one card per study step, and the sources sidebar.

use crate::components::{Alert, Button, ButtonColor, Checkbox, Icon, Input, Text};
use crate::presenter::{present_sidebar, SidebarContent};
use crate::theme::{self, palette, Color};
use app_state::StudySession;
use i18n::Translator;
use serde::{Deserialize, Serialize};

/// One study step card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCard {
    /// Card heading ("Step 1: Survey")
    pub heading: Text,
    /// Step icon
    pub icon: Icon,
    /// Card background
    pub background: Color,
    /// Checklist items
    pub tasks: Vec<Checkbox>,
    /// Completion summary
    pub progress: Text,
    /// Note area
    pub note: Input,
}

/// Sources sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    /// Sidebar heading
    pub heading: Text,
    /// URL field
    pub url_input: Input,
    /// Embed the URL as a YouTube video
    pub embed_youtube: Button,
    /// Embed the URL as a website link
    pub embed_website: Button,
    /// Pasted text field
    pub text_input: Input,
    /// Embed the pasted text
    pub embed_text: Button,
    /// Last validation error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Alert>,
    /// Embedded source panel
    pub content: SidebarContent,
    /// Background of the embedded source panel
    pub content_background: Color,
}

/// The whole study page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Page background
    pub background: Color,
    /// Header title, drawn on the header background
    pub title: Text,
    /// Navigation buttons
    pub nav: Vec<Button>,
    /// Tasks done across all steps
    pub progress: Text,
    /// Whether every task is checked
    pub complete: bool,
    /// Step cards in order
    pub steps: Vec<StepCard>,
    /// Sources sidebar
    pub sidebar: Sidebar,
}

fn render_step(session: &StudySession, index: usize, t: &Translator) -> StepCard {
    let step = &session.steps()[index];
    let checklist = session.checklist();

    let number = (index + 1).to_string();
    let heading = t.tr_args(
        "step-heading",
        &[("number", number.as_str()), ("title", step.title.as_str())],
    );

    let tasks = step
        .tasks
        .iter()
        .enumerate()
        .map(|(task, label)| {
            Checkbox::new(step.task_id(task), label.as_str())
                .checked(checklist.is_checked(index, task))
                .on_change(format!("toggle:{}:{}", index, task))
        })
        .collect();

    let done = checklist.completed_in_step(index).to_string();
    let total = step.tasks.len().to_string();
    let progress = t.tr_args(
        "checklist-progress",
        &[("done", done.as_str()), ("total", total.as_str())],
    );

    let note_text = session.note(index).map(|n| n.text()).unwrap_or_default();

    StepCard {
        heading: Text::heading(heading, 2),
        icon: Icon::new(step.icon.as_str()),
        background: theme::step_background(step.color),
        tasks,
        progress: Text::caption(progress).with_color(palette::TEXT_SECONDARY),
        note: Input::textarea()
            .with_id(format!("note-{}", index))
            .with_placeholder(t.tr("note-placeholder"))
            .with_value(note_text)
            .on_change(format!("note:{}", index)),
    }
}

/// Build the sources sidebar
pub fn render_sidebar(session: &StudySession, t: &Translator) -> Sidebar {
    let selector = session.selector();

    Sidebar {
        heading: Text::heading(t.tr("sources-heading"), 2),
        url_input: Input::url()
            .with_id("source-url")
            .with_placeholder(t.tr("source-url-placeholder"))
            .with_value(selector.url())
            .on_change("set-url"),
        embed_youtube: Button::new(t.tr("embed-youtube"))
            .with_id("embed-youtube")
            .with_color(ButtonColor::Red)
            .with_icon("youtube")
            .on_press("embed:youtube"),
        embed_website: Button::new(t.tr("embed-website"))
            .with_id("embed-website")
            .with_color(ButtonColor::Blue)
            .with_icon("link")
            .on_press("embed:website"),
        text_input: Input::textarea()
            .with_id("source-text")
            .with_placeholder(t.tr("source-text-placeholder"))
            .with_value(selector.text())
            .on_change("set-text"),
        embed_text: Button::new(t.tr("embed-text"))
            .with_id("embed-text")
            .with_color(ButtonColor::Green)
            .on_press("embed:text"),
        error: selector.error().map(|e| Alert::error(t.tr(e.message_id()))),
        content: present_sidebar(selector.mode(), selector.url(), selector.text(), t),
        content_background: palette::SOURCE_PANEL.to_string(),
    }
}

/// Build the full page
pub fn render_page(session: &StudySession, t: &Translator) -> PageView {
    let checklist = session.checklist();
    let (done, total) = checklist.progress();
    let (done, total) = (done.to_string(), total.to_string());
    let progress = t.tr_args(
        "checklist-progress",
        &[("done", done.as_str()), ("total", total.as_str())],
    );

    PageView {
        background: palette::PAGE_BACKGROUND.to_string(),
        title: Text::heading(session.config().title.as_str(), 1)
            .with_color(palette::SURFACE)
            .with_background(palette::HEADER_BACKGROUND),
        nav: vec![Button::new(t.tr("nav-notes")).with_id("nav-notes")],
        progress: Text::caption(progress).with_color(palette::TEXT_SECONDARY),
        complete: checklist.is_complete(),
        steps: (0..session.steps().len())
            .map(|index| render_step(session, index, t))
            .collect(),
        sidebar: render_sidebar(session, t),
    }
}
