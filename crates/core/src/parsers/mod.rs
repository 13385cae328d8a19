use serde_json::Value;
use thiserror::Error;

use crate::model::{PortfolioData, SeriesData};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is neither a series map nor a single series")]
    UnknownShape,
    #[error("payload has no series")]
    NoSeries,
}

/// Parse the page's embedded portfolio payload.
///
/// Two shapes are accepted:
/// 1. `{ "series": { name: SeriesData, ... }, "active": name }`
/// 2. A bare `SeriesData` (`{ "horizontal", "vertical", "rows" }`), wrapped
///    as a single series named [`crate::model::DEFAULT_SERIES`].
pub fn parse_payload(data: &[u8]) -> Result<PortfolioData, PayloadError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(PayloadError::Empty);
    }

    let value: Value = serde_json::from_slice(data)?;
    let Some(obj) = value.as_object() else {
        return Err(PayloadError::UnknownShape);
    };

    if obj.contains_key("series") {
        let portfolio: PortfolioData = serde_json::from_value(value)?;
        if portfolio.series.is_empty() {
            return Err(PayloadError::NoSeries);
        }
        return Ok(portfolio);
    }

    if ["horizontal", "vertical", "rows"]
        .iter()
        .any(|key| obj.contains_key(*key))
    {
        let series: SeriesData = serde_json::from_value(value)?;
        return Ok(PortfolioData::single(series));
    }

    Err(PayloadError::UnknownShape)
}

/// Parse payload text as read from the page (`textContent` of the data
/// element).
pub fn parse_payload_str(text: &str) -> Result<PortfolioData, PayloadError> {
    parse_payload(text.as_bytes())
}
