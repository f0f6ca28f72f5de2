use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::source::parse_base_url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_QUERY: &str = "london";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "http://localhost:3333"
/// query = "london"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address of the service exposing `destinations`, `weathers` and `airports`.
    pub base_url: String,

    /// Search term used when none is given on the command line.
    pub query: String,

    /// Per-request timeout; `0` disables it.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Reject settings the aggregator could never use.
    pub fn validate(&self) -> Result<()> {
        parse_base_url(&self.base_url)
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;

        if self.query.trim().is_empty() {
            return Err(anyhow!(
                "No search query configured.\n\
                 Hint: pass a query, e.g. `dashboard show london`, or run `dashboard configure`."
            ));
        }

        Ok(())
    }

    /// Load config from the platform config directory, or defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config directory.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "travel-dashboard", "dashboard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url, "http://localhost:3333");
        assert_eq!(cfg.query, "london");
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(10)));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_timeout_disables_it() {
        let cfg = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(cfg.timeout(), None);
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let cfg = Config {
            base_url: "nope".into(),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();

        assert!(err.to_string().contains("Invalid base URL 'nope'"));
    }

    #[test]
    fn validate_rejects_blank_query() {
        let cfg = Config {
            query: "  ".into(),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();

        assert!(err.to_string().contains("No search query configured"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("loads");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config {
            base_url: "http://travel.internal:8080".into(),
            query: "paris".into(),
            timeout_secs: 3,
        };

        cfg.save_to(&path).expect("saves");
        let loaded = Config::load_from(&path).expect("loads");

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "query = \"tokyo\"\n").expect("writes");

        let cfg = Config::load_from(&path).expect("loads");

        assert_eq!(cfg.query, "tokyo");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").expect("writes");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
