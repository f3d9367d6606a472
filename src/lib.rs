//! SQRR Reader
//!
//! Driver-side glue for the study page: logging setup and the line
//! command protocol used by the `sqrr` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod logging;

pub use command::{parse_line, CommandParseError, DriverCommand};
