//! Environment configuration.

use std::env;
use std::path::PathBuf;

use crate::core::style::Styles;

pub const LOG_FILE_VAR: &str = "TAPE_LAYOUT_LOG";
pub const LOG_FILTER_VAR: &str = "TAPE_LAYOUT_LOG_LEVEL";
pub const NO_BORDERS_VAR: &str = "TAPE_LAYOUT_NO_BORDERS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Debug log destination. Logs never go to stdout/stderr, which belong to the UI.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive for the debug log, e.g. `debug` or `tape_layout=trace`.
    pub log_filter: Option<String>,
    /// Start widgets with frameless style pairs.
    pub no_borders: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Blank values count as unset and
    /// `TAPE_LAYOUT_NO_BORDERS` is only on when it is exactly `1`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            log_file: present(LOG_FILE_VAR).map(PathBuf::from),
            log_filter: present(LOG_FILTER_VAR),
            no_borders: present(NO_BORDERS_VAR).as_deref() == Some("1"),
        }
    }

    /// Default style pair for framed widgets under this configuration.
    pub fn default_styles(&self) -> Styles {
        if self.no_borders {
            Styles::borderless()
        } else {
            Styles::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EnvConfig, LOG_FILE_VAR, LOG_FILTER_VAR, NO_BORDERS_VAR};
    use crate::core::style::Styles;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(vars: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn unset_environment_gives_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, EnvConfig::default());
        assert_eq!(config.default_styles(), Styles::default());
    }

    #[test]
    fn values_are_read() {
        let config = config_from(&[
            (LOG_FILE_VAR, "/tmp/tape-layout.log"),
            (LOG_FILTER_VAR, "trace"),
            (NO_BORDERS_VAR, "1"),
        ]);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tape-layout.log")));
        assert_eq!(config.log_filter.as_deref(), Some("trace"));
        assert!(config.no_borders);
        assert_eq!(config.default_styles(), Styles::borderless());
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(LOG_FILE_VAR, "  "), (NO_BORDERS_VAR, "yes")]);
        assert!(config.log_file.is_none());
        assert!(!config.no_borders);
    }
}
