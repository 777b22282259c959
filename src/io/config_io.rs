use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for reading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// The config that will be used for this run, plus any problem with the
/// default config file that was skipped over.
#[derive(Debug, Default)]
pub struct ResolvedConfig {
    pub config: Config,
    /// File the config came from, if one was read
    pub path: Option<PathBuf>,
    /// A default config file that existed but could not be used
    pub ignored: Option<ConfigError>,
}

/// `<config-dir>/jot/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jot").join("config.toml"))
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pick the config for this run.
///
/// An explicit path must exist and parse. The default path is optional: if it
/// is missing the defaults are used, and if it is unreadable or malformed the
/// defaults are used and the error is handed back in `ignored`.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok(ResolvedConfig {
            config,
            path: Some(path.to_path_buf()),
            ignored: None,
        });
    }

    let Some(path) = default_config_path() else {
        return Ok(ResolvedConfig::default());
    };
    Ok(resolve_optional(&path))
}

fn resolve_optional(path: &Path) -> ResolvedConfig {
    match read_config(path) {
        Ok(config) => ResolvedConfig {
            config,
            path: Some(path.to_path_buf()),
            ignored: None,
        },
        Err(ConfigError::ReadError { source, .. }) if source.kind() == ErrorKind::NotFound => {
            ResolvedConfig::default()
        }
        Err(e) => ResolvedConfig {
            ignored: Some(e),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_is_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let resolved = resolve_config(Some(&path)).unwrap();
        assert_eq!(resolved.config.log.level, "debug");
        assert_eq!(resolved.path.as_deref(), Some(path.as_path()));
        assert!(resolved.ignored.is_none());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = resolve_config(Some(&tmp.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn explicit_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[log\nlevel = ").unwrap();
        let err = resolve_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn optional_missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let resolved = resolve_optional(&tmp.path().join("config.toml"));
        assert_eq!(resolved.config, Config::default());
        assert!(resolved.path.is_none());
        assert!(resolved.ignored.is_none());
    }

    #[test]
    fn optional_malformed_config_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();
        let resolved = resolve_optional(&path);
        assert_eq!(resolved.config, Config::default());
        assert!(matches!(
            resolved.ignored,
            Some(ConfigError::ParseError { .. })
        ));
    }
}
