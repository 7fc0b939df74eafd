use std::path::Path;

use anyhow::{Context, bail};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=debug,sqlx=warn";

/// Install the global tracing subscriber.
///
/// Logs go to stdout, or to a daily-rotated file when `log_dir` is given. Both
/// writers are non-blocking; keep the returned guard alive until shutdown so
/// buffered lines are flushed.
pub fn init_logging(log_dir: Option<&Path>) -> anyhow::Result<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (non_blocking, guard) = if let Some(dir) = log_dir {
        if !dir.is_dir() {
            bail!("log path is not a directory: {}", dir.display());
        }
        let file_appender = tracing_appender::rolling::daily(dir, "neet-prep.log");
        tracing_appender::non_blocking(file_appender)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(log_dir.is_none())
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("init log failed")?;
    Ok(guard)
}
