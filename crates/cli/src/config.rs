use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

pub const DEFAULT_ACTIVE: &str = "serie_1";
const DEFAULT_DIR: &str = "images";

/// `portfolio.config.json`: which directories hold each series and how
/// their grid rows are laid out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default)]
    pub series: IndexMap<String, SeriesConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesConfig {
    /// Series directory relative to the project root.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub rows: Option<Vec<i64>>,
}

impl SeriesConfig {
    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(DEFAULT_DIR)
    }

    pub fn rows(&self) -> Vec<i64> {
        self.rows.clone().unwrap_or_default()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        let mut series = IndexMap::new();
        series.insert(
            "serie_1".to_string(),
            SeriesConfig {
                dir: Some("images".to_string()),
                rows: Some(vec![4, 3, 4, 3, 2, 4, 4, 2, 1, 3, 3]),
            },
        );
        series.insert(
            "serie_2".to_string(),
            SeriesConfig {
                dir: Some("images/serie2".to_string()),
                rows: Some(vec![4, 3, 4, 3, 2, 4, 4, 4]),
            },
        );
        Self {
            active: Some(DEFAULT_ACTIVE.to_string()),
            series,
        }
    }
}

impl BuildConfig {
    /// Read the config, or fall back to the built-in two-series layout when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Configured active series, else the first one, else `serie_1`.
    pub fn active(&self) -> String {
        self.active
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.series.keys().next().cloned())
            .unwrap_or_else(|| DEFAULT_ACTIVE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::load(&dir.path().join("portfolio.config.json")).unwrap();
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.active(), "serie_1");
        assert_eq!(config.series["serie_2"].dir(), "images/serie2");
    }

    #[test]
    fn parses_and_keeps_series_order() {
        let config: BuildConfig = serde_json::from_str(
            r#"{"series": {"zeta": {"dir": "images/z", "rows": [2]}, "alpha": {"rows": null}}}"#,
        )
        .unwrap();
        assert_eq!(config.active(), "zeta");
        assert_eq!(config.series["alpha"].dir(), "images");
        assert!(config.series["alpha"].rows().is_empty());
        assert_eq!(config.series["zeta"].rows(), vec![2]);
    }

    #[test]
    fn empty_config_falls_back_to_serie_1() {
        let config: BuildConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.active(), DEFAULT_ACTIVE);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = BuildConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("portfolio.config.json"));
    }
}
