use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::series::{SeriesData, SeriesName};

/// Name given to the single series of a flat (pre-series) payload.
pub const DEFAULT_SERIES: &str = "default";

/// The parsed page payload: every series plus the one shown first.
///
/// Series keep their payload order; it decides the fallback when `active`
/// is missing or names an unknown series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<SeriesName>,
    #[serde(default)]
    pub series: IndexMap<SeriesName, SeriesData>,
}

impl PortfolioData {
    /// Wrap a flat payload as a one-series portfolio.
    pub fn single(series: SeriesData) -> Self {
        let name = SeriesName::from(DEFAULT_SERIES);
        let mut map = IndexMap::new();
        map.insert(name.clone(), series);
        Self {
            active: Some(name),
            series: map,
        }
    }

    pub fn get(&self, name: &str) -> Option<&SeriesData> {
        self.series.get(name)
    }

    /// The series to show on page load: `active` if it exists, otherwise
    /// the first series.
    pub fn initial(&self) -> Option<(&SeriesName, &SeriesData)> {
        self.active
            .as_ref()
            .and_then(|name| self.series.get_key_value(name.as_str()))
            .or_else(|| self.series.first())
    }

    pub fn names(&self) -> impl Iterator<Item = &SeriesName> {
        self.series.keys()
    }
}
