//! Date range parameters

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A date bound: either a native UTC instant or a caller-supplied string
/// that still has to be checked for ISO-8601 Zulu form.
///
/// Over JSON every date arrives as `Text`, so strings always go through
/// validation before they reach a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Text(String),
    Instant(DateTime<Utc>),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Instant(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

/// Value of one date field: a start point (open towards the future) or an
/// explicit `[start, end]` range where either side may be open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Since(DateInput),
    Range(Option<DateInput>, Option<DateInput>),
}

impl DateValue {
    pub fn since(start: impl Into<DateInput>) -> Self {
        DateValue::Since(start.into())
    }

    pub fn between(start: Option<DateInput>, end: Option<DateInput>) -> Self {
        DateValue::Range(start, end)
    }
}

/// Date fields in insertion order. A field set to `null` is kept but
/// produces no clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateParams(IndexMap<String, Option<DateValue>>);

impl DateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: DateValue) -> Self {
        self.0.insert(field.into(), Some(value));
        self
    }

    pub fn with_unset(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into(), None);
        self
    }

    pub fn with_since(self, field: impl Into<String>, start: impl Into<DateInput>) -> Self {
        self.with(field, DateValue::since(start))
    }

    pub fn with_range(
        self,
        field: impl Into<String>,
        start: Option<DateInput>,
        end: Option<DateInput>,
    ) -> Self {
        self.with(field, DateValue::between(start, end))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&DateValue>)> {
        self.0
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of fields that carry a value.
    pub fn set_len(&self) -> usize {
        self.0.values().filter(|value| value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_params_from_json() {
        let dates: DateParams = serde_json::from_str(
            r#"{"rundate": [null, "2024-01-01T00:00:00Z"], "created": "2023-06-01T00:00:00Z"}"#,
        )
        .unwrap();

        let entries: Vec<_> = dates.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "rundate");
        assert_eq!(
            entries[0].1,
            Some(&DateValue::Range(
                None,
                Some(DateInput::from("2024-01-01T00:00:00Z"))
            ))
        );
        assert_eq!(
            entries[1].1,
            Some(&DateValue::Since(DateInput::from("2023-06-01T00:00:00Z")))
        );
    }

    #[test]
    fn test_null_field_is_unset() {
        let dates: DateParams =
            serde_json::from_str(r#"{"rundate": null, "end": "2024-01-01T00:00:00Z"}"#).unwrap();

        let entries: Vec<_> = dates.iter().collect();
        assert_eq!(entries[0], ("rundate", None));
        assert_eq!(dates.len(), 2);
        assert_eq!(dates.set_len(), 1);
        assert_eq!(
            dates,
            DateParams::new()
                .with_unset("rundate")
                .with_since("end", "2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_json_strings_stay_text() {
        let input: DateInput = serde_json::from_str(r#""2024-01-01T00:00:00+02:00""#).unwrap();
        assert!(matches!(input, DateInput::Text(_)));
    }
}
