//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("{container} has no items")]
    Empty { container: &'static str },

    #[error("{container} index {index} out of range for {len} items")]
    IndexOutOfRange {
        container: &'static str,
        index: usize,
        len: usize,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    LogInit(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Bounds-checks `index` against a container of `len` items.
pub(crate) fn check_index(container: &'static str, index: usize, len: usize) -> Result<()> {
    if len == 0 {
        return Err(LayoutError::Empty { container });
    }
    if index >= len {
        return Err(LayoutError::IndexOutOfRange {
            container,
            index,
            len,
        });
    }
    Ok(())
}
