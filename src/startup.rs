//! Startup: command-line options, logging setup, and the sessions fixture.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::session::Session;

/// Errors raised while loading the sessions fixture.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read sessions file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sessions file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// JSON file holding the initial session list
    pub sessions_file: Option<PathBuf>,
    /// `--version` was given
    pub show_version: bool,
}

impl Options {
    /// Parse options from argv (without the program name).
    pub fn parse(args: impl Iterator<Item = String>) -> Self {
        let mut options = Self::default();
        for arg in args {
            if arg == "--version" {
                options.show_version = true;
            } else if !arg.starts_with('-') && options.sessions_file.is_none() {
                options.sessions_file = Some(PathBuf::from(arg));
            }
        }
        options
    }
}

/// Load the initial session list from a JSON fixture.
pub fn load_sessions(path: &Path) -> Result<Vec<Session>, StartupError> {
    let data = std::fs::read_to_string(path).map_err(|source| StartupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| StartupError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Demo sessions used when no fixture is given.
pub fn default_sessions() -> Vec<Session> {
    vec![
        Session::new("Rust Programming Language", "https://www.rust-lang.org/"),
        Session::new("", "https://www.example.com/reading-list"),
        Session::new("Wikipedia", "https://en.wikipedia.org/wiki/Main_Page"),
        Session::new("", "https://news.ycombinator.com/"),
    ]
}

/// Route `tracing` output to the file named by `TABSHEET_LOG`.
///
/// Stdout belongs to the TUI, so without the variable nothing is logged.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let Ok(path) = std::env::var("TABSHEET_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .try_init();
}
