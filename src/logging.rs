//! Logging initialization.
//!
//! The terminal is owned by the UI, so logs only ever go to a file. When no
//! file is configured no subscriber is installed and `tracing` macros are
//! no-ops.

use std::fs::OpenOptions;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::settings::LoggingSettings;

/// Installs the global subscriber described by `settings`.
///
/// Returns the writer guard, which must be kept alive until the program
/// exits so buffered lines are flushed; `None` when logging is disabled.
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let Some(path) = settings.file.as_ref() else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&settings.level)
        .with_context(|| format!("invalid log level `{}`", settings.level))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_file() {
        let settings = LoggingSettings::default();
        assert!(init(&settings).expect("no-op init").is_none());
    }

    #[test]
    fn rejects_bad_filter() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = LoggingSettings {
            level: "dictionary=loud".to_string(),
            file: Some(dir.path().join("dict.log")),
        };
        assert!(init(&settings).is_err());
    }
}
