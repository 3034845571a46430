//! Debug log sink.
//!
//! Containers emit `tracing` events (focus moves, tab switches, resizes). Nothing is recorded
//! unless [`init`] installs a subscriber; it writes to a file because the terminal belongs to
//! the UI.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::error::{LayoutError, Result};

const DEFAULT_FILTER: &str = "debug";

/// Installs a global file-backed subscriber when `config.log_file` is set.
///
/// Returns `Ok(false)` when logging is not configured.
pub fn init(config: &EnvConfig) -> Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LayoutError::LogFile {
            path: path.clone(),
            source,
        })?;

    let filter = build_filter(config.log_filter.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| LayoutError::LogInit(err.to_string()))?;

    Ok(true)
}

fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::init;
    use crate::config::EnvConfig;
    use crate::error::LayoutError;
    use std::path::PathBuf;

    #[test]
    fn unconfigured_logging_is_a_no_op() {
        assert!(!init(&EnvConfig::default()).expect("no-op init"));
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let config = EnvConfig {
            log_file: Some(PathBuf::from("/nonexistent-dir/tape-layout.log")),
            ..EnvConfig::default()
        };
        let err = init(&config).unwrap_err();
        assert!(matches!(err, LayoutError::LogFile { .. }));
    }
}
