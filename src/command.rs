//! Line command protocol
//!
//! Each input line is one command:
//!
//! ```text
//! url <value>            set the URL input
//! text <value>           set the text input (`\n` expands to a newline)
//! youtube                embed the URL as a YouTube video
//! website                embed the URL as a website link
//! embed-text             embed the pasted text
//! check <step> <task>    toggle a checklist task (zero-based)
//! note <step> <text>     append to a step's note
//! clear-note <step>      clear a step's note
//! render                 print the page as JSON
//! quit                   exit
//! ```

use app_core::selector::EmbedCommand;
use app_state::SessionCommand;
use thiserror::Error;

/// Errors for lines that are not valid commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// First word is not a known command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// A required argument is missing
    #[error("Missing argument for '{command}': {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Argument name
        argument: &'static str,
    },

    /// A numeric argument did not parse
    #[error("Invalid number for '{command}': {value}")]
    InvalidNumber {
        /// Command name
        command: &'static str,
        /// Offending text
        value: String,
    },
}

/// Result type for command parsing
pub type Result<T> = std::result::Result<T, CommandParseError>;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    /// Forward to the session
    Session(SessionCommand),
    /// Print the page
    Render,
    /// Stop reading input
    Quit,
}

fn parse_index(
    command: &'static str,
    argument: &'static str,
    value: Option<&str>,
) -> Result<usize> {
    let value = value.ok_or(CommandParseError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| CommandParseError::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

/// Parse one input line; blank lines yield `Ok(None)`
///
/// # Example
///
/// ```
/// use sqrr_reader::command::{parse_line, DriverCommand};
///
/// assert_eq!(parse_line("render").unwrap(), Some(DriverCommand::Render));
/// assert_eq!(parse_line("   ").unwrap(), None);
/// ```
pub fn parse_line(line: &str) -> Result<Option<DriverCommand>> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (name, rest) = match trimmed.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (trimmed.trim_end(), ""),
    };

    let command = match name {
        "url" => SessionCommand::SetUrl {
            url: rest.to_string(),
        },
        "text" => SessionCommand::SetText {
            text: rest.replace("\\n", "\n"),
        },
        "youtube" => SessionCommand::Embed {
            command: EmbedCommand::YouTube,
        },
        "website" => SessionCommand::Embed {
            command: EmbedCommand::Website,
        },
        "embed-text" => SessionCommand::Embed {
            command: EmbedCommand::Text,
        },
        "check" => {
            let mut args = rest.split_whitespace();
            let step = parse_index("check", "step", args.next())?;
            let task = parse_index("check", "task", args.next())?;
            SessionCommand::ToggleTask { step, task }
        }
        "note" => {
            let (step, text) = rest.split_once(' ').unwrap_or((rest, ""));
            let step = parse_index("note", "step", Some(step).filter(|s| !s.is_empty()))?;
            if text.is_empty() {
                return Err(CommandParseError::MissingArgument {
                    command: "note",
                    argument: "text",
                });
            }
            SessionCommand::AppendNote {
                step,
                text: text.replace("\\n", "\n"),
            }
        }
        "clear-note" => {
            let step = parse_index("clear-note", "step", rest.split_whitespace().next())?;
            SessionCommand::ClearNote { step }
        }
        "render" => return Ok(Some(DriverCommand::Render)),
        "quit" | "exit" => return Ok(Some(DriverCommand::Quit)),
        other => return Err(CommandParseError::Unknown(other.to_string())),
    };

    Ok(Some(DriverCommand::Session(command)))
}
