//! Core application logic for SQRR Reader
//!
//! This crate contains the source embed selector, the SQRR study method
//! data, note buffers, and configuration loading.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod embeds;
pub mod notes;
pub mod selector;
pub mod study;

pub use config::{ConfigError, StudyConfig};
pub use embeds::{EmbedError, EmbedMode, YouTubeEmbed};
pub use notes::NoteEditor;
pub use selector::{EmbedCommand, EmbedSelector, SourceInput};
pub use study::{Checklist, StepColor, StudyStep};
