//! `sqrr` - drive a study session from line commands on stdin
//!
//! Usage: `sqrr [config.json]`
//!
//! Every command prints one JSON line to stdout: the dispatch outcome, the
//! rendered page for `render`, or `{"error": ...}` for a bad line. The
//! `SQRR_LOCALE` environment variable overrides the configured locale.

use anyhow::{Context, Result};
use app_core::config::StudyConfig;
use app_state::StudySession;
use app_ui::page::render_page;
use i18n::Translator;
use serde_json::json;
use sqrr_reader::command::{parse_line, DriverCommand};
use std::io::{self, BufRead, Write};

fn load_config() -> Result<StudyConfig> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => StudyConfig::load(&path)
            .with_context(|| format!("failed to load study config from {}", path))?,
        None => StudyConfig::default(),
    };

    if let Ok(locale) = std::env::var("SQRR_LOCALE") {
        config.locale = locale;
    }

    Ok(config)
}

fn main() -> Result<()> {
    sqrr_reader::logging::init();

    let config = load_config()?;
    let translator = Translator::for_locale(&config.locale)
        .with_context(|| format!("failed to load messages for {}", config.locale))?;
    if translator.language().code() != config.locale {
        tracing::warn!(
            requested = %config.locale,
            using = translator.language().code(),
            "locale not bundled, using closest match"
        );
    }

    let mut session = StudySession::try_new(config).context("invalid study config")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        let output = match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(DriverCommand::Quit)) => break,
            Ok(Some(DriverCommand::Render)) => {
                serde_json::to_value(render_page(&session, &translator))?
            }
            Ok(Some(DriverCommand::Session(command))) => match session.dispatch(command) {
                Ok(outcome) => serde_json::to_value(outcome)?,
                Err(e) => {
                    tracing::warn!(error = %e, "command failed");
                    json!({ "error": e.to_string() })
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, %line, "unparseable line");
                json!({ "error": e.to_string() })
            }
        };

        serde_json::to_writer(&mut stdout, &output)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    Ok(())
}
