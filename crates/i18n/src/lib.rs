//! Internationalization for SQRR Reader
//!
//! This crate provides i18n support with bundled Fluent catalogues,
//! language negotiation, and message formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{negotiate, Language};
pub use translator::{Translator, TranslatorError};
