//! UI component library for SQRR Reader
//!
//! Components are plain Rust structs with serializable properties that a
//! front end (webview, terminal, or test harness) renders. Each component
//! provides:
//!
//! - Type-safe props with builder methods
//! - Event hooks as string identifiers the host maps to session commands
//! - Accessibility-relevant attributes (labels, link `rel`, frame titles)
//!
//! # Available Components
//!
//! - [`Text`] - Paragraphs, headings, and captions
//! - [`Button`] - Action button with an optional icon
//! - [`Input`] - Single-line or multi-line text input
//! - [`Checkbox`] - Labelled checklist item
//! - [`Link`] - Outbound link, optionally opened in a new browsing context
//! - [`VideoFrame`] - Embedded video player reference
//! - [`Alert`] - Inline validation message
//! - [`Icon`] - Named icon

use crate::theme::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Minimum height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
}

fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

// =============================================================================
// Text Component
// =============================================================================

/// Semantic text roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Body paragraph
    #[default]
    Paragraph,
    /// Heading level 1
    H1,
    /// Heading level 2
    H2,
    /// Caption/help text
    Caption,
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Semantic role
    #[serde(default)]
    pub role: TextRole,
    /// Additional style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Text {
    /// Create a paragraph
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: TextRole::Paragraph,
            style: StyleProps::default(),
        }
    }

    /// Create a heading; levels above 2 render as level 2
    pub fn heading(content: impl Into<String>, level: u8) -> Self {
        let role = if level <= 1 { TextRole::H1 } else { TextRole::H2 };
        Self {
            role,
            ..Self::new(content)
        }
    }

    /// Create caption text
    pub fn caption(content: impl Into<String>) -> Self {
        Self {
            role: TextRole::Caption,
            ..Self::new(content)
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    /// Small (16px)
    Sm,
    /// Medium (20px)
    #[default]
    Md,
}

impl IconSize {
    /// Get the pixel size
    pub fn pixels(&self) -> f32 {
        match self {
            IconSize::Sm => 16.0,
            IconSize::Md => 20.0,
        }
    }
}

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Icon size
    #[serde(default)]
    pub size: IconSize,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::Md,
        }
    }

    /// Set icon size
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Button color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    /// Plain white button
    #[default]
    Neutral,
    /// Red (YouTube)
    Red,
    /// Blue (website)
    Blue,
    /// Green (text)
    Green,
}

impl ButtonColor {
    /// Background color for this scheme
    pub fn background(&self) -> &'static str {
        use crate::theme::palette;
        match self {
            ButtonColor::Neutral => palette::SURFACE,
            ButtonColor::Red => palette::RED_500,
            ButtonColor::Blue => palette::BLUE_500,
            ButtonColor::Green => palette::GREEN_500,
        }
    }
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Visible label
    pub label: String,
    /// Button color scheme
    #[serde(default)]
    pub color: ButtonColor,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            color: ButtonColor::default(),
            disabled: false,
            on_press: None,
            icon: None,
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the button color
    pub fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    /// Set the press handler
    pub fn on_press(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set the leading icon
    pub fn with_icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(Icon::new(name).with_size(IconSize::Sm));
        self
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Input type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Text input
    #[default]
    Text,
    /// URL input
    Url,
    /// Multi-line text area
    Textarea,
}

/// Input component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Input type
    #[serde(default)]
    pub input_type: InputType,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// On change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Input {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            id: None,
            input_type: InputType::Text,
            placeholder: None,
            value: String::new(),
            on_change: None,
            style: StyleProps::default(),
        }
    }

    /// Create a URL input
    pub fn url() -> Self {
        Self {
            input_type: InputType::Url,
            ..Self::new()
        }
    }

    /// Create a textarea
    pub fn textarea() -> Self {
        Self {
            input_type: InputType::Textarea,
            style: StyleProps {
                min_height: Some(100.0),
                ..StyleProps::default()
            },
            ..Self::new()
        }
    }

    /// Set the input ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_change = Some(handler.into());
        self
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Checkbox Component
// =============================================================================

/// Checkbox with a label bound to it by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkbox {
    /// Id shared by the box and its label
    pub id: ComponentId,
    /// Label text
    pub label: String,
    /// Checked state
    #[serde(default)]
    pub checked: bool,
    /// On change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
}

impl Checkbox {
    /// Create an unchecked checkbox
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_change = Some(handler.into());
        self
    }
}

// =============================================================================
// Link Component
// =============================================================================

/// Browsing context a link opens in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Same tab
    #[default]
    #[serde(rename = "_self")]
    SameContext,
    /// New tab/window
    #[serde(rename = "_blank")]
    NewContext,
}

/// Hyperlink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Destination
    pub href: String,
    /// Visible label
    pub label: String,
    /// Where the link opens
    #[serde(default)]
    pub target: LinkTarget,
    /// Link relationship (`rel` attribute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Link {
    /// Create a same-context link
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            target: LinkTarget::SameContext,
            rel: None,
            icon: None,
        }
    }

    /// Create a link that opens in a new browsing context without
    /// exposing the opener or referrer
    pub fn external(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: LinkTarget::NewContext,
            rel: Some("noopener noreferrer".to_string()),
            icon: Some(Icon::new("external-link").with_size(IconSize::Sm)),
            ..Self::new(href, label)
        }
    }

    /// Whether the link opens a new browsing context
    pub fn opens_new_context(&self) -> bool {
        self.target == LinkTarget::NewContext
    }
}

// =============================================================================
// Video Frame Component
// =============================================================================

/// Permissions granted to embedded YouTube players
pub const YOUTUBE_FRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Embedded video player reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFrame {
    /// Player URL
    pub src: String,
    /// Accessible frame title
    pub title: String,
    /// Feature policy
    pub allow: String,
    /// Whether fullscreen is permitted
    #[serde(default)]
    pub allow_fullscreen: bool,
    /// Height in pixels
    pub height: f32,
}

impl VideoFrame {
    /// Create a YouTube player frame
    pub fn youtube(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
            allow: YOUTUBE_FRAME_ALLOW.to_string(),
            allow_fullscreen: true,
            height: 315.0,
        }
    }
}

// =============================================================================
// Alert Component
// =============================================================================

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational
    #[default]
    Info,
    /// Validation error
    Error,
}

/// Inline message box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Severity
    pub severity: AlertSeverity,
    /// Message text
    pub message: String,
    /// Leading icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Alert {
    /// Create an error alert
    pub fn error(message: impl Into<String>) -> Self {
        use crate::theme::palette;
        Self {
            severity: AlertSeverity::Error,
            message: message.into(),
            icon: Some(Icon::new("alert-triangle")),
            style: StyleProps {
                background_color: Some(palette::RED_100.to_string()),
                color: Some(palette::RED_700.to_string()),
                border_color: Some(palette::RED_400.to_string()),
                min_height: None,
            },
        }
    }
}
