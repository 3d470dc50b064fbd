//! Typed sort values and key resolution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;

/// A value resolved from a row for comparison purposes.
///
/// Rows expose their fields through this tagged union so the comparator can
/// dispatch on actual types instead of guessing from formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    DateTime(DateTime<Utc>),
    /// The row has no value under the requested key. Missing values always
    /// sort after present ones, regardless of direction.
    Missing,
}

impl SortValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }

    /// Interpret this value as a point in time, if possible.
    ///
    /// `DateTime` values convert directly; `Text` values are parsed with
    /// [`parse_instant`]. Numbers are never treated as timestamps.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            SortValue::DateTime(dt) => Some(*dt),
            SortValue::Text(s) => parse_instant(s),
            _ => None,
        }
    }

    /// Coerce to text for the comparator's fallback branch.
    pub fn coerce_text(&self) -> String {
        match self {
            SortValue::Text(s) => s.clone(),
            SortValue::Number(n) => n.to_string(),
            SortValue::DateTime(dt) => dt.to_rfc3339(),
            SortValue::Missing => String::new(),
        }
    }

    /// Map a JSON value to a sort value.
    ///
    /// Strings stay textual here even when they look like dates or numbers;
    /// promotion only happens pairwise inside the comparator.
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => SortValue::Missing,
            JsonValue::String(s) => SortValue::Text(s.clone()),
            JsonValue::Number(n) => match n.as_f64() {
                Some(f) => SortValue::Number(f),
                None => SortValue::Text(n.to_string()),
            },
            JsonValue::Bool(b) => SortValue::Text(b.to_string()),
            other => SortValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        SortValue::Text(s.to_string())
    }
}

impl From<String> for SortValue {
    fn from(s: String) -> Self {
        SortValue::Text(s)
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        SortValue::Number(n)
    }
}

impl From<i64> for SortValue {
    fn from(n: i64) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(dt: DateTime<Utc>) -> Self {
        SortValue::DateTime(dt)
    }
}

impl From<NaiveDate> for SortValue {
    fn from(date: NaiveDate) -> Self {
        match date.and_hms_opt(0, 0, 0) {
            Some(dt) => SortValue::DateTime(dt.and_utc()),
            None => SortValue::Missing,
        }
    }
}

impl<T> From<Option<T>> for SortValue
where
    T: Into<SortValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SortValue::Missing,
        }
    }
}

/// Rows that can be sorted by key.
///
/// Implementations resolve a dot-separated key to the field it names and
/// return [`SortValue::Missing`] for keys they do not recognize. An unknown
/// key therefore sorts every row equal, which leaves the input order intact.
pub trait SortKeyed {
    fn sort_value(&self, key: &str) -> SortValue;
}

/// Arbitrary JSON records sort by walking the key path.
impl SortKeyed for JsonValue {
    fn sort_value(&self, key: &str) -> SortValue {
        resolve_path(self, key)
    }
}

/// Walk a dot-separated path into a JSON record.
///
/// Any absent segment short-circuits to `Missing`; intermediate non-objects
/// do too, since `get` fails on them.
pub fn resolve_path(record: &JsonValue, path: &str) -> SortValue {
    let mut current = record;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return SortValue::Missing,
        }
    }
    SortValue::from_json(current)
}

/// Parse a textual date or date-time.
///
/// Accepts RFC 3339 (`2024-05-28T10:00:00Z`), a bare date-time
/// (`2024-05-28 10:00:00` or `2024-05-28T10:00:00`), and a bare date
/// (`2024-05-28`). Bare values are taken as UTC.
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_flat_key() {
        let record = json!({"priority": "High"});
        assert_eq!(resolve_path(&record, "priority"), SortValue::Text("High".into()));
    }

    #[test]
    fn resolve_nested_key() {
        let record = json!({"customer": {"name": "Amy"}});
        assert_eq!(
            resolve_path(&record, "customer.name"),
            SortValue::Text("Amy".into())
        );
    }

    #[test]
    fn resolve_missing_intermediate_is_missing() {
        let record = json!({"customer": null});
        assert_eq!(resolve_path(&record, "customer.name"), SortValue::Missing);
    }

    #[test]
    fn resolve_unknown_key_is_missing() {
        let record = json!({"a": 1});
        assert_eq!(resolve_path(&record, "nope"), SortValue::Missing);
    }

    #[test]
    fn null_resolves_to_missing() {
        let record = json!({"due_date": null});
        assert_eq!(resolve_path(&record, "due_date"), SortValue::Missing);
    }

    #[test]
    fn numbers_resolve_to_number() {
        let record = json!({"progress": 65});
        assert_eq!(resolve_path(&record, "progress"), SortValue::Number(65.0));
    }

    #[test]
    fn parse_instant_formats() {
        assert!(parse_instant("2024-05-28").is_some());
        assert!(parse_instant("2024-05-28T10:30:00").is_some());
        assert!(parse_instant("2024-05-28 10:30:00").is_some());
        assert!(parse_instant("2024-05-28T10:30:00Z").is_some());
        assert!(parse_instant("not a date").is_none());
        assert!(parse_instant("10").is_none());
    }

    #[test]
    fn option_conversion() {
        let none: Option<String> = None;
        assert_eq!(SortValue::from(none), SortValue::Missing);
        assert_eq!(
            SortValue::from(Some("x".to_string())),
            SortValue::Text("x".into())
        );
    }
}
