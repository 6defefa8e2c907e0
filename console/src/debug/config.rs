//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "console=info,warn";

/// File name inside the log directory; the appender adds the date suffix
pub const LOG_FILE_NAME: &str = "console.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory for the rotated log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g., "console=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    ///
    /// - `MARCAS_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`: filter (default `console=info,warn`)
    /// - `MARCAS_LOG_STDERR`: `1` to also log to stderr
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`] with an explicit variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_dir: non_blank("MARCAS_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: non_blank("RUST_LOG").unwrap_or(defaults.log_level),
            stderr: lookup("MARCAS_LOG_STDERR")
                .map(|v| v.trim() == "1")
                .unwrap_or(defaults.stderr),
        }
    }

    /// Full path of the current log file (without the rotation suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("console.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_env_overrides() {
        let config = LogConfig::from_lookup(lookup(&[
            ("MARCAS_LOG_DIR", "/tmp/marcas"),
            ("RUST_LOG", "console=debug"),
            ("MARCAS_LOG_STDERR", "1"),
        ]));

        assert_eq!(config.log_dir, PathBuf::from("/tmp/marcas"));
        assert_eq!(config.log_level, "console=debug");
        assert!(config.stderr);
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = LogConfig::from_lookup(lookup(&[
            ("MARCAS_LOG_DIR", "  "),
            ("RUST_LOG", ""),
            ("MARCAS_LOG_STDERR", "0"),
        ]));
        assert_eq!(config, LogConfig::default());
    }
}
