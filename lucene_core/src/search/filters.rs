use crate::models::{FieldValue, Filter, Scalar};

fn escape(value: &Scalar) -> String {
    value.to_string().replace('\\', "\\\\").replace('\'', "\\'")
}

fn term(field: &str, value: &Scalar) -> String {
    format!("(term field={} '{}')", field, escape(value))
}

fn filter_clause(field: &str, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::One(value) => Some(term(field, value)),
        FieldValue::Many(values) if values.is_empty() => None,
        FieldValue::Many(values) => {
            let terms: Vec<String> = values.iter().map(|value| term(field, value)).collect();
            Some(format!("(or {})", terms.join(" ")))
        }
    }
}

/// Builds a CloudSearch structured filter from every set entry of every filter.
///
/// ```
/// use lucene_core::{process_filters, Filter};
///
/// let fq = process_filters(&[Filter::new().with_any_of("type", ["artist", "rundate"])]);
/// assert_eq!(fq, "(and (or (term field=type 'artist') (term field=type 'rundate')))");
/// ```
pub fn process_filters(filters: &[Filter]) -> String {
    let clauses: Vec<String> = filters
        .iter()
        .flat_map(|filter| filter.entries())
        .filter_map(|(field, value)| value.and_then(|value| filter_clause(field, value)))
        .collect();

    if clauses.is_empty() {
        return String::new();
    }

    format!("(and {})", clauses.join(" "))
}

/// Filter query (`fq`) for optional filters; absent or empty input yields "".
pub fn fq(filters: Option<&[Filter]>) -> String {
    match filters {
        Some(filters) if !filters.is_empty() => process_filters(filters),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fq_empty_inputs() {
        assert_eq!(fq(None), "");
        assert_eq!(fq(Some(&[][..])), "");
    }

    #[test]
    fn test_fq_list_value() {
        let filters = vec![Filter::new().with_any_of("type", ["rundate", "activity"])];
        assert_eq!(
            fq(Some(filters.as_slice())),
            "(and (or (term field=type 'rundate') (term field=type 'activity')))"
        );
    }

    #[test]
    fn test_fq_flattens_across_filters() {
        let filters = vec![
            Filter::new().with("type", "artist").with_unset("status"),
            Filter::new().with("year", 1999),
        ];
        assert_eq!(
            fq(Some(filters.as_slice())),
            "(and (term field=type 'artist') (term field=year '1999'))"
        );
    }

    #[test]
    fn test_fq_only_unset_values() {
        let filters = vec![Filter::new().with_unset("type")];
        assert_eq!(fq(Some(filters.as_slice())), "");
    }

    #[test]
    fn test_fq_escapes_quotes() {
        let filters = vec![Filter::new().with("title", "it's")];
        assert_eq!(fq(Some(filters.as_slice())), "(and (term field=title 'it\\'s'))");
    }
}
