//! Application state management for SQRR Reader
//!
//! This crate owns the study session: the embed selector, the checklist,
//! and the per-step notes, all mutated through a single command interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;

pub use session::{CommandOutcome, SessionCommand, SessionStateError, StudySession};
