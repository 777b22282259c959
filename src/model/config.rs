use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Show the key hint line under the list
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            show_key_hints: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `JOT_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for TUI sessions. Defaults to `<data-local-dir>/jot/jot.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r##"
[ui.colors]
highlight = "#112233"

[log]
file = "/tmp/jot.log"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#112233");
        assert!(config.ui.show_key_hints);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/jot.log")));
    }
}
