//! Command-line and environment configuration.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

pub const DEFAULT_DB_URL: &str = "sqlite:neet-prep.sqlite3";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Parser)]
#[command(name = "neet-prep", version, about = "NEET Prep Pro content browser")]
pub struct Cli {
    /// SQLite URL or file path of the content database
    #[arg(long = "db", env = "NEET_DB_URL", default_value = DEFAULT_DB_URL, global = true)]
    pub db_url: String,

    /// Write logs to a daily-rotated file in this directory instead of stdout
    #[arg(long, env = "NEET_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(flatten)]
    pub server: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the JSON API and the pages (default)
    Serve,
    /// Write the demo dataset into the database and exit
    Seed,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(short = 'H', long, env = "NEET_HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "NEET_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,
}

impl Cli {
    /// The selected command; `serve` when none is given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Create the database file and its parent directories if missing.
///
/// # Errors
///
/// Returns `ConfigError::InvalidDbUrl` for URLs without a file path and
/// `ConfigError::Io` if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        });
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}
