//! Study session state
//!
//! A [`StudySession`] is created when the page mounts and dropped when it
//! unmounts. Every change goes through [`StudySession::dispatch`], which is
//! the one place UI events reach the state.

use app_core::config::{ConfigError, StudyConfig};
use app_core::embeds::{EmbedError, EmbedMode};
use app_core::notes::NoteEditor;
use app_core::selector::{EmbedCommand, EmbedSelector};
use app_core::study::{Checklist, StudyStep};
use serde::{Deserialize, Serialize};

/// Session-related errors
#[derive(Debug, thiserror::Error)]
pub enum SessionStateError {
    /// Step index out of range
    #[error("Unknown step: {0}")]
    UnknownStep(usize),

    /// Task index out of range for its step
    #[error("Unknown task {task} in step {step}")]
    UnknownTask {
        /// Step index
        step: usize,
        /// Task index
        task: usize,
    },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for session state operations
pub type Result<T> = std::result::Result<T, SessionStateError>;

/// Commands a UI can send to the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionCommand {
    /// Replace the source URL input
    SetUrl {
        /// New URL text
        url: String,
    },
    /// Replace the source text input
    SetText {
        /// New pasted text
        text: String,
    },
    /// Try to embed the current input
    Embed {
        /// Which kind of source to embed
        command: EmbedCommand,
    },
    /// Flip a checklist task
    ToggleTask {
        /// Step index
        step: usize,
        /// Task index within the step
        task: usize,
    },
    /// Append text to a step's note
    AppendNote {
        /// Step index
        step: usize,
        /// Text to append
        text: String,
    },
    /// Clear a step's note
    ClearNote {
        /// Step index
        step: usize,
    },
}

/// What a dispatched command did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// Input or note text changed
    Updated,
    /// A source was embedded in this mode
    Embedded(EmbedMode),
    /// The embed was rejected; the selector now shows this error
    Rejected(EmbedError),
    /// A task was toggled to this state
    TaskToggled(bool),
}

/// All state behind one open study page
#[derive(Debug, Clone)]
pub struct StudySession {
    config: StudyConfig,
    selector: EmbedSelector,
    checklist: Checklist,
    notes: Vec<NoteEditor>,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new(StudyConfig::default())
    }
}

impl StudySession {
    /// Create a session with nothing embedded, nothing checked, and empty notes
    pub fn new(config: StudyConfig) -> Self {
        let checklist = Checklist::new(&config.steps);
        let notes = vec![NoteEditor::new(); config.steps.len()];
        Self {
            config,
            selector: EmbedSelector::new(),
            checklist,
            notes,
        }
    }

    /// Create a session from a config, rejecting unusable ones
    pub fn try_new(config: StudyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Page configuration
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Study steps in display order
    pub fn steps(&self) -> &[StudyStep] {
        &self.config.steps
    }

    /// Source embed state
    pub fn selector(&self) -> &EmbedSelector {
        &self.selector
    }

    /// Task completion state
    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// Note for a step
    pub fn note(&self, step: usize) -> Option<&NoteEditor> {
        self.notes.get(step)
    }

    /// Mutable note for a step, for editors that drive the cursor directly
    pub fn note_mut(&mut self, step: usize) -> Result<&mut NoteEditor> {
        self.notes
            .get_mut(step)
            .ok_or(SessionStateError::UnknownStep(step))
    }

    /// Apply a command
    ///
    /// Embed rejections are a normal outcome, not an error: the reason is
    /// stored on the selector for display. Only out-of-range step or task
    /// indices fail.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<CommandOutcome> {
        tracing::trace!(?command, "dispatch");

        match command {
            SessionCommand::SetUrl { url } => {
                self.selector.set_url(url);
                Ok(CommandOutcome::Updated)
            }
            SessionCommand::SetText { text } => {
                self.selector.set_text(text);
                Ok(CommandOutcome::Updated)
            }
            SessionCommand::Embed { command } => Ok(match self.selector.apply(command) {
                Ok(mode) => CommandOutcome::Embedded(mode),
                Err(error) => CommandOutcome::Rejected(error),
            }),
            SessionCommand::ToggleTask { step, task } => {
                if step >= self.config.steps.len() {
                    return Err(SessionStateError::UnknownStep(step));
                }
                self.checklist
                    .toggle(step, task)
                    .map(CommandOutcome::TaskToggled)
                    .ok_or(SessionStateError::UnknownTask { step, task })
            }
            SessionCommand::AppendNote { step, text } => {
                let note = self.note_mut(step)?;
                let end = note.text().len();
                note.set_cursor(end);
                note.insert_text(&text);
                Ok(CommandOutcome::Updated)
            }
            SessionCommand::ClearNote { step } => {
                self.note_mut(step)?.clear();
                Ok(CommandOutcome::Updated)
            }
        }
    }
}
