//! Tracing setup: stdout plus one log file per launch under `.wineform/logs`.
//!
//! File names embed a sortable local timestamp (`wineform_YYYY-MM-DD_HH-MM-SS.log`),
//! so the newest [`MAX_LOG_FILES`] are kept by name alone.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{
    OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

use crate::app_dirs::{self, AppDirError};

/// Number of launch logs kept on disk, the current one included.
pub const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "wineform_";
const LOG_FILE_SUFFIX: &str = "log";
/// Used when `RUST_LOG` is unset; keeps ureq's connection chatter out.
const DEFAULT_FILTER: &str = "info,ureq=warn";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error(transparent)]
    Dir(#[from] AppDirError),
    #[error("Failed to name log file: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("Failed to open log file in {dir}: {source}")]
    OpenFile { dir: PathBuf, source: InitError },
    #[error("Failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Install the global subscriber and return the path of this launch's log file.
///
/// Calling it again after a successful init does nothing and returns `None`.
pub fn init() -> Result<Option<PathBuf>, LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(None);
    }
    let dir = app_dirs::logs_dir()?;
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let stem = log_file_stem(OffsetDateTime::now_utc().to_offset(offset))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&stem)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(&dir)
        .map_err(|source| LoggingError::OpenFile {
            dir: dir.clone(),
            source,
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let timer = fmt::time::OffsetTime::new(offset, Rfc3339);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer().with_timer(timer.clone()))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        )
        .try_init()?;
    let _ = LOG_GUARD.set(guard);

    prune_logs(&dir);
    let path = dir.join(format!("{stem}.{LOG_FILE_SUFFIX}"));
    tracing::info!("Logging to {}", path.display());
    Ok(Some(path))
}

fn log_file_stem(now: OffsetDateTime) -> Result<String, time::error::Format> {
    let stamp = now.format(format_description!(
        "[year]-[month]-[day]_[hour]-[minute]-[second]"
    ))?;
    Ok(format!("{LOG_FILE_PREFIX}{stamp}"))
}

/// Delete launch logs beyond [`MAX_LOG_FILES`]; failures are only reported.
fn prune_logs(dir: &Path) {
    let names = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect(),
        Err(err) => {
            tracing::warn!("Skipping log cleanup in {}: {err}", dir.display());
            return;
        }
    };
    for name in stale_logs(names, MAX_LOG_FILES) {
        let path = dir.join(&name);
        if let Err(err) = std::fs::remove_file(&path) {
            tracing::warn!("Failed to remove old log {}: {err}", path.display());
        }
    }
}

/// Launch logs that fall outside the newest `keep`, oldest first.
///
/// Files that do not look like launch logs are never returned.
fn stale_logs(names: Vec<String>, keep: usize) -> Vec<String> {
    let mut logs: Vec<String> = names
        .into_iter()
        .filter(|name| {
            name.starts_with(LOG_FILE_PREFIX)
                && name.ends_with(&format!(".{LOG_FILE_SUFFIX}"))
        })
        .collect();
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    logs.truncate(excess);
    logs
}
