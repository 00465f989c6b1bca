//! Configuration file support.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use wordtally_core::{DisplayLimit, RankStrategy};
use wordtally_source::extract::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use wordtally_source::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use wordtally_source::{SectionMarkers, DEFAULT_URL};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wordtally.toml";

/// Full tool configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TallyConfig {
    pub source: SourceConfig,
    pub display: DisplayConfig,
    pub ranking: RankingConfig,
}

/// Where the page comes from and which section to read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub url: String,
    /// Saved page to read instead of fetching `url`.
    pub file: Option<PathBuf>,
    pub start_marker: String,
    pub end_marker: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            file: None,
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn markers(&self) -> SectionMarkers {
        SectionMarkers::new(&self.start_marker, &self.end_marker)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub limit: DisplayLimit,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub strategy: RankStrategy,
}

impl TallyConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Load the configuration file.
    ///
    /// An explicit path must exist. Otherwise `./wordtally.toml` and then
    /// `<config dir>/wordtally/config.toml` are tried, falling back to
    /// defaults when neither exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_locations().into_iter().find(|p| p.is_file()),
        };

        let Some(path) = path else {
            debug!("No configuration file found, using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("wordtally").join("config.toml"));
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.source.url, DEFAULT_URL);
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.display.limit.get(), 10);
        assert_eq!(config.ranking.strategy, RankStrategy::Insertion);
        assert_eq!(config.source.markers(), SectionMarkers::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = TallyConfig::from_toml(
            r#"
            [display]
            limit = 25

            [ranking]
            strategy = "merge"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.limit.get(), 25);
        assert_eq!(config.ranking.strategy, RankStrategy::Merge);
        assert_eq!(config.source.url, DEFAULT_URL);
    }

    #[test]
    fn test_source_section() {
        let config = TallyConfig::from_toml(
            r#"
            [source]
            url = "https://example.org/wiki/Rust"
            start_marker = '<h2 id="History">'
            end_marker = '<h2 id="Design">'
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.source.url, "https://example.org/wiki/Rust");
        assert_eq!(config.source.timeout(), Duration::from_secs(5));
        assert_eq!(
            config.source.markers(),
            SectionMarkers::new(r#"<h2 id="History">"#, r#"<h2 id="Design">"#)
        );
    }

    #[test]
    fn test_rejects_zero_limit() {
        assert!(TallyConfig::from_toml("[display]\nlimit = 0").is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(TallyConfig::from_toml("[display]\ncolour = true").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nlimit = 3").unwrap();

        let config = TallyConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.display.limit.get(), 3);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TallyConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
