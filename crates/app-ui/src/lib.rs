//! User interface for SQRR Reader
//!
//! This crate turns session state into a serializable page description
//! that a front end renders.
//!
//! # Modules
//!
//! - [`components`] - UI component library
//! - [`presenter`] - Decides what the sources sidebar shows
//! - [`page`] - Composes the full study page
//! - [`theme`] - Colours
//!
//! # Example
//!
//! ```rust
//! use app_state::StudySession;
//! use app_ui::page::render_page;
//! use i18n::{Language, Translator};
//!
//! let session = StudySession::default();
//! let translator = Translator::new(Language::EnUs).unwrap();
//! let page = render_page(&session, &translator);
//! assert_eq!(page.steps.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod page;
pub mod presenter;
pub mod theme;

// Re-export commonly used types
pub use components::{Alert, Button, Checkbox, Icon, Input, Link, Text, VideoFrame};
pub use page::{render_page, render_sidebar, PageView, Sidebar, StepCard};
pub use presenter::{present_sidebar, split_paragraphs, SidebarContent};
