use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{FieldValue, QueryTerm};

/// Boolean keyword that ties a group of terms to the rest of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bond {
    And,
    Not,
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bond::And => write!(f, "AND"),
            Bond::Not => write!(f, "NOT"),
        }
    }
}

fn term_clause(term: &QueryTerm) -> Option<String> {
    let (field, value) = term.first()?;

    match value {
        FieldValue::One(value) => Some(format!("{}:{}", field, value)),
        FieldValue::Many(values) if values.is_empty() => None,
        FieldValue::Many(values) => {
            let alternatives: Vec<String> = values
                .iter()
                .map(|value| format!("{}:{}", field, value))
                .collect();
            Some(format!("({})", alternatives.join(" OR ")))
        }
    }
}

/// Joins terms into a `{bond} a {bond} b` clause, preserving input order.
///
/// List values become an OR group. Returns an empty string when no term
/// yields a clause.
pub fn process_terms(terms: &[QueryTerm], bond: Bond) -> String {
    let clauses: Vec<String> = terms.iter().filter_map(term_clause).collect();

    if clauses.is_empty() {
        return String::new();
    }

    format!("{} {}", bond, clauses.join(format!(" {} ", bond).as_str()))
}
