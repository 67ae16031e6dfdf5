//! Terminal front end and entry point.
//!
//! This is the thin integration layer between the hnsearch library and a
//! line-oriented terminal. It owns every side effect: reading stdin, spawning
//! fetches, writing the preference file, and printing screens.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Application loop (tokio::select!)   │
//! │   stdin lines ──► parse_command      │
//! │                     │                │
//! │                     ▼                │
//! │               handle_event ──► Actions
//! │                     ▲                │
//! │   fetch responses ──┘                │
//! └──────────────────────────────────────┘
//!             │ Action::Fetch
//!             ▼
//! ┌──────────────────────────────────────┐
//! │  FetchWorker (one tokio task/request)│
//! └──────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse CLI and config, initialize tracing, open the preference store
//! 2. **Mount**: Fetch the stored search term and render
//! 3. **Run**: Handle command lines and fetch completions until `quit`
//! 4. **EOF**: Stop reading input, wait for the in-flight fetch, render once more

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use hnsearch::storage::{JsonPreferenceStore, SemiPersistentValue};
use hnsearch::ui::{parse_command, render};
use hnsearch::worker::{FetchWorker, HnClient};
use hnsearch::{handle_event, Action, AppState, Config, Event};

/// Search Hacker News stories from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `hnsearch=trace`.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Directory for the preference and log files.
    #[arg(long, value_name = "PATH")]
    data_dir: Option<String>,

    /// Override a config key, e.g. `--set display_width=120`. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,
}

fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{arg}`"))
}

impl Cli {
    fn load_config(&self) -> hnsearch::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(level) = &self.log_level {
            config.log_level = Some(level.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        let overrides: BTreeMap<String, String> = self.overrides.iter().cloned().collect();
        config.apply_overrides(&overrides)?;
        Ok(config)
    }
}

/// Session state wrapper.
///
/// Wraps the library's `AppState` with the resources its actions act on.
struct Session {
    app: AppState,
    search_term: SemiPersistentValue,
    worker: FetchWorker,
    cols: usize,
}

impl Session {
    /// Handles one event and executes the resulting actions.
    ///
    /// Returns `(should_render, quit)`.
    fn apply(&mut self, event: &Event) -> (bool, bool) {
        let (should_render, actions) = handle_event(&mut self.app, event);
        let mut quit = false;
        for action in actions {
            quit |= self.execute_action(action);
        }
        (should_render, quit)
    }

    /// Executes a single action. Returns `true` for [`Action::Quit`].
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::Fetch(request) => {
                tracing::debug!(request_id = request.request_id, "dispatching fetch");
                drop(self.worker.dispatch(request));
                false
            }
            Action::PersistSearchTerm(term) => {
                self.search_term.set(&term);
                false
            }
            Action::Quit => {
                tracing::debug!("quit requested");
                true
            }
        }
    }

    fn render(&self) -> hnsearch::Result<()> {
        let now = chrono::Utc::now().timestamp();
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout)?;
        render(&self.app, &mut stdout, now, self.cols)?;
        write!(stdout, "> ")?;
        stdout.flush()?;
        Ok(())
    }
}

/// One read from stdin.
#[derive(Debug)]
enum InputLine {
    Text(String),
    /// The line was not valid UTF-8. Its bytes are consumed, so reading can continue.
    Unreadable(std::io::Error),
    Closed,
}

/// Splits a `next_line` result into input the session can recover from and
/// errors that end it.
fn classify_line(line: std::io::Result<Option<String>>) -> std::io::Result<InputLine> {
    match line {
        Ok(Some(text)) => Ok(InputLine::Text(text)),
        Ok(None) => Ok(InputLine::Closed),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Ok(InputLine::Unreadable(e)),
        Err(e) => Err(e),
    }
}

/// Prints an input error followed by a fresh prompt.
fn show_error(message: impl std::fmt::Display) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{message}")?;
    write!(stdout, "> ")?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> hnsearch::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    hnsearch::observability::init_tracing(&config);

    tracing::debug!(config = ?config, "configuration loaded");

    let store = JsonPreferenceStore::new(config.preferences_path())?;
    let search_term = SemiPersistentValue::new(Box::new(store), config.preference_key.clone());
    let app = hnsearch::initialize(&config, search_term.get());

    let client = HnClient::new(config.request_timeout())?;
    let (worker, mut responses) = FetchWorker::new(client);

    let mut session = Session {
        app,
        search_term,
        worker,
        cols: config.display_width,
    };

    session.apply(&Event::Mounted);
    session.render()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        let (should_render, quit) = tokio::select! {
            line = lines.next_line(), if stdin_open => match classify_line(line)? {
                InputLine::Unreadable(e) => {
                    tracing::warn!(error = %e, "ignoring unreadable input line");
                    show_error("input is not valid UTF-8")?;
                    (false, false)
                }
                InputLine::Closed => {
                    tracing::debug!("stdin closed");
                    stdin_open = false;
                    (false, false)
                }
                InputLine::Text(line) => match parse_command(&line, &session.app) {
                    Ok(events) => {
                        let mut outcome = (events.is_empty(), false);
                        for event in &events {
                            let (render, quit) = session.apply(event);
                            outcome = (outcome.0 || render, outcome.1 || quit);
                            if quit {
                                break;
                            }
                        }
                        outcome
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "rejected command");
                        show_error(&e)?;
                        (false, false)
                    }
                },
            },
            Some(response) = responses.recv() => session.apply(&Event::FetchCompleted(response)),
        };

        if quit {
            break;
        }
        if should_render {
            session.render()?;
        }
        if !stdin_open && session.app.in_flight().is_none() {
            break;
        }
    }

    writeln!(std::io::stdout())?;
    tracing::debug!("exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped_not_fatal() {
        let input: &[u8] = b"\xff\xfe\nsubmit\n";
        let mut lines = BufReader::new(input).lines();

        let first = classify_line(lines.next_line().await).unwrap();
        assert!(matches!(first, InputLine::Unreadable(_)));

        let second = classify_line(lines.next_line().await).unwrap();
        assert!(matches!(second, InputLine::Text(ref text) if text == "submit"));

        let third = classify_line(lines.next_line().await).unwrap();
        assert!(matches!(third, InputLine::Closed));
    }

    #[test]
    fn other_read_errors_end_the_session() {
        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(classify_line(Err(err)).is_err());
    }

    #[test]
    fn set_flags_feed_config_overrides() {
        let cli = Cli::parse_from(["hnsearch", "--set", "display_width=120", "--set", "escape_query=true"]);

        let config = cli.load_config().unwrap();

        assert_eq!(config.display_width, 120);
        assert!(config.escape_query);
    }

    #[test]
    fn set_flag_requires_key_value() {
        assert!(parse_key_value("display_width").is_err());
        assert_eq!(
            parse_key_value("api_base=https://x/?q=a=b").unwrap(),
            ("api_base".to_string(), "https://x/?q=a=b".to_string())
        );
    }
}
