use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name of a switchable image series (e.g. `"serie_1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesName(String);

impl SeriesName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SeriesName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeriesName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Image lists and row layout hints for one series.
///
/// Filenames are relative to the page's image directory. Hand-edited
/// payloads may hold `null`, `false`, `0` or `""` in place of a name; those
/// entries deserialize to `None` and the renderer skips them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    /// Filmstrip images, rendered in order.
    #[serde(default, deserialize_with = "filenames")]
    pub horizontal: Vec<Option<String>>,
    /// Row capacities consumed greedily against `vertical`. Values below 1
    /// are treated as 1.
    #[serde(default, deserialize_with = "row_hints")]
    pub rows: Vec<i64>,
    /// Grid images, rendered row by row.
    #[serde(default, deserialize_with = "filenames")]
    pub vertical: Vec<Option<String>>,
}

impl SeriesData {
    pub fn new(horizontal: Vec<String>, rows: Vec<i64>, vertical: Vec<String>) -> Self {
        Self {
            horizontal: horizontal.into_iter().map(Some).collect(),
            rows,
            vertical: vertical.into_iter().map(Some).collect(),
        }
    }

    /// Number of images the series would render (skipping empty entries).
    pub fn image_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(&self.vertical)
            .filter(|name| usable_filename(name.as_deref()).is_some())
            .count()
    }
}

/// Returns the filename if it is present and non-empty.
pub fn usable_filename(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// A filename entry the page would render: non-empty strings, plus non-zero
/// numbers and `true` in their text form. Falsy values, arrays and objects
/// give `None`.
fn filename(value: Value) -> Option<String> {
    match value {
        Value::String(name) if !name.is_empty() => Some(name),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// A row capacity: numbers are floored, numeric strings parsed, anything
/// else counts as 1.
fn row_hint(value: &Value) -> i64 {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match n {
        Some(n) if n.is_finite() => n.floor() as i64,
        _ => 1,
    }
}

fn filenames<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.unwrap_or_default().into_iter().map(filename).collect())
}

fn row_hints<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.unwrap_or_default().iter().map(row_hint).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let series: SeriesData = serde_json::from_str(r#"{"horizontal": ["a.JPG"]}"#).unwrap();
        assert_eq!(series.horizontal, vec![Some("a.JPG".to_string())]);
        assert!(series.rows.is_empty());
        assert!(series.vertical.is_empty());
    }

    #[test]
    fn image_count_skips_falsy_entries() {
        let series: SeriesData = serde_json::from_str(
            r#"{"horizontal": ["a", null, "", false, 0], "vertical": ["b", "  "]}"#,
        )
        .unwrap();
        // A whitespace name is still a name.
        assert_eq!(series.image_count(), 3);
    }

    #[test]
    fn truthy_non_strings_become_names() {
        let series: SeriesData =
            serde_json::from_str(r#"{"horizontal": [7, true, [], {}, -0.0]}"#).unwrap();
        assert_eq!(
            series.horizontal,
            vec![Some("7".to_string()), Some("true".to_string()), None, None, None]
        );
    }

    #[test]
    fn null_lists_default_to_empty() {
        let series: SeriesData =
            serde_json::from_str(r#"{"horizontal": null, "rows": null, "vertical": ["v"]}"#)
                .unwrap();
        assert!(series.horizontal.is_empty());
        assert!(series.rows.is_empty());
        assert_eq!(series.vertical.len(), 1);
    }

    #[test]
    fn row_hints_are_read_leniently() {
        let series: SeriesData =
            serde_json::from_str(r#"{"rows": [2.5, null, "3", "x", 0, -2, 4]}"#).unwrap();
        assert_eq!(series.rows, vec![2, 1, 3, 1, 0, -2, 4]);
    }

    #[test]
    fn serializes_fields_in_payload_order() {
        let series = SeriesData::new(vec!["h".into()], vec![2], vec!["v".into()]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"horizontal":["h"],"rows":[2],"vertical":["v"]}"#);
    }
}
