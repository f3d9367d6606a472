//! SQRR study method
//!
//! The reading method is split into four steps (Survey, Question, Read,
//! Recite), each with a short list of tasks the reader can tick off.

use serde::{Deserialize, Serialize};

/// Card colour for a study step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepColor {
    /// Amber
    Amber,
    /// Yellow
    Yellow,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Neutral gray
    #[default]
    Gray,
}

/// One step of the study method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStep {
    /// Step title
    pub title: String,
    /// Icon name
    #[serde(default)]
    pub icon: String,
    /// Card colour
    #[serde(default)]
    pub color: StepColor,
    /// Tasks to complete during this step
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl StudyStep {
    /// Create a step with no tasks
    pub fn new(title: impl Into<String>, icon: impl Into<String>, color: StepColor) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            color,
            tasks: Vec::new(),
        }
    }

    /// Add a task
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.tasks.push(task.into());
        self
    }

    /// Identifier linking a task's checkbox to its label
    pub fn task_id(&self, task: usize) -> String {
        format!("{}-{}", self.title, task)
    }
}

/// The four SQRR steps
pub fn default_steps() -> Vec<StudyStep> {
    vec![
        StudyStep::new("Survey", "search", StepColor::Amber)
            .with_task("Quickly skim through the documentation to get an overview.")
            .with_task("Look at headings and subheadings.")
            .with_task("Check for any visual aids like charts or graphs."),
        StudyStep::new("Question", "help-circle", StepColor::Yellow)
            .with_task("Turn headings and subheadings into questions.")
            .with_task("Write down any questions that come to mind.")
            .with_task("Consider what you already know about the topic."),
        StudyStep::new("Read", "book", StepColor::Green)
            .with_task("Read the sections thoroughly to find answers to your questions.")
            .with_task("Take notes on key points, definitions, and examples.")
            .with_task("Pay attention to bold or italicized text."),
        StudyStep::new("Recite", "message-circle", StepColor::Blue)
            .with_task(
                "Summarize the information in your own words without looking at your notes.",
            )
            .with_task("Try to answer the questions you formulated earlier.")
            .with_task("Identify any areas that need further clarification."),
    ]
}

/// Completion state of every task across all steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    steps: Vec<Vec<bool>>,
}

impl Checklist {
    /// Create an unchecked checklist shaped like `steps`
    pub fn new(steps: &[StudyStep]) -> Self {
        Self {
            steps: steps.iter().map(|s| vec![false; s.tasks.len()]).collect(),
        }
    }

    /// Whether a task is checked; out-of-range indices read as unchecked
    pub fn is_checked(&self, step: usize, task: usize) -> bool {
        self.steps
            .get(step)
            .and_then(|tasks| tasks.get(task))
            .copied()
            .unwrap_or(false)
    }

    /// Set a task's state, returning `None` if the indices are out of range
    pub fn set(&mut self, step: usize, task: usize, checked: bool) -> Option<bool> {
        let slot = self.steps.get_mut(step)?.get_mut(task)?;
        *slot = checked;
        Some(checked)
    }

    /// Flip a task's state, returning the new state
    pub fn toggle(&mut self, step: usize, task: usize) -> Option<bool> {
        let slot = self.steps.get_mut(step)?.get_mut(task)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// Number of checked tasks in a step
    pub fn completed_in_step(&self, step: usize) -> usize {
        self.steps
            .get(step)
            .map(|tasks| tasks.iter().filter(|done| **done).count())
            .unwrap_or(0)
    }

    /// `(checked, total)` across all steps
    pub fn progress(&self) -> (usize, usize) {
        let total: usize = self.steps.iter().map(Vec::len).sum();
        let done: usize = (0..self.steps.len()).map(|s| self.completed_in_step(s)).sum();
        (done, total)
    }

    /// Whether every task is checked
    pub fn is_complete(&self) -> bool {
        let (done, total) = self.progress();
        done == total
    }
}
