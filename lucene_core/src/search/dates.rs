use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::{DateInput, DateParams, DateValue};

/// More date fields than this still format, but rarely mean what the caller wants.
pub const MAX_DATE_FIELDS: usize = 2;

/// Calendar forms accepted in front of a `Z`, besides full RFC 3339.
const ZULU_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn is_local_iso(text: &str) -> bool {
    ZULU_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

fn parse_zulu(text: &str) -> Option<DateTime<Utc>> {
    let naive = text.strip_suffix('Z').or_else(|| text.strip_suffix('z'))?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    ZULU_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|parsed| Utc.from_utc_datetime(&parsed))
}

/// Resolves a date bound to the ISO-8601 Zulu string used in range clauses.
///
/// Instants are serialized with millisecond precision. Strings must carry a
/// `Z` designator and are re-emitted in canonical `YYYY-MM-DDTHH:MM:SSZ`
/// form, keeping any fractional seconds.
pub fn to_iso_string(input: &DateInput) -> Result<String> {
    match input {
        DateInput::Instant(instant) => Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true)),
        DateInput::Text(text) => {
            if let Some(instant) = parse_zulu(text) {
                return Ok(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true));
            }
            if DateTime::parse_from_rfc3339(text).is_ok() || is_local_iso(text) {
                return Err(AppError::NonZuluDate(text.clone()));
            }
            Err(AppError::InvalidDate(text.clone()))
        }
    }
}

fn bound(input: Option<&DateInput>) -> Result<String> {
    match input {
        Some(input) => to_iso_string(input),
        None => Ok("*".to_string()),
    }
}

fn date_clause(field: &str, value: &DateValue) -> Result<String> {
    match value {
        DateValue::Since(start) => Ok(format!("{}:[{} TO *]", field, to_iso_string(start)?)),
        DateValue::Range(start, end) => Ok(format!(
            "{}:[{} TO {}]",
            field,
            bound(start.as_ref())?,
            bound(end.as_ref())?
        )),
    }
}

/// Builds the `AND (a:[.. TO ..] OR b:[.. TO ..]) ` date clause.
///
/// Fields are bonded with `AND` when `strict` is set and `OR` otherwise. The
/// trailing space is part of the clause. Unset fields are skipped. Any
/// malformed or non-Zulu date aborts with an error.
pub fn process_dates(dates: &DateParams, strict: bool) -> Result<String> {
    if dates.set_len() > MAX_DATE_FIELDS {
        warn!(
            fields = dates.set_len(),
            "More than {} date fields passed, only start and end fields are expected",
            MAX_DATE_FIELDS
        );
    }

    let clauses = dates
        .iter()
        .filter_map(|(field, value)| value.map(|value| date_clause(field, value)))
        .collect::<Result<Vec<String>>>()?;

    if clauses.is_empty() {
        return Ok(String::new());
    }

    let bond = if strict { " AND " } else { " OR " };
    Ok(format!("AND ({}) ", clauses.join(bond)))
}
