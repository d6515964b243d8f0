use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{DateParams, Options, QueryTerm};
use crate::search::dates::process_dates;
use crate::search::phrase::process_phrase;
use crate::search::terms::{process_terms, Bond};

/// Everything one Lucene query is built from. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub phrase: String,
    pub and: Vec<QueryTerm>,
    pub not: Vec<QueryTerm>,
    pub dates: Option<DateParams>,
    pub options: Options,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = phrase.into();
        self
    }

    pub fn with_and(mut self, terms: Vec<QueryTerm>) -> Self {
        self.and = terms;
        self
    }

    pub fn add_and(mut self, term: QueryTerm) -> Self {
        self.and.push(term);
        self
    }

    pub fn with_not(mut self, terms: Vec<QueryTerm>) -> Self {
        self.not = terms;
        self
    }

    pub fn add_not(mut self, term: QueryTerm) -> Self {
        self.not.push(term);
        self
    }

    pub fn with_dates(mut self, dates: DateParams) -> Self {
        self.dates = Some(dates);
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// Assembles phrase, AND, NOT and date fragments with already merged options.
pub(crate) fn assemble(params: &QueryParams, options: &Options) -> Result<String> {
    let phrase_query = process_phrase(&params.phrase, &options.phrase_options());
    let and_query = process_terms(&params.and, Bond::And);
    let not_query = process_terms(&params.not, Bond::Not);
    let date_query = match &params.dates {
        Some(dates) => process_dates(dates, options.is_strict_date_ranges())?,
        None => String::new(),
    };

    debug!(
        phrase = %phrase_query,
        and = %and_query,
        not = %not_query,
        dates = %date_query,
        "Assembling query fragments"
    );

    let fragments = [phrase_query, and_query, not_query, date_query];
    let result = fragments
        .iter()
        .filter(|fragment| !fragment.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    if options.is_url_encoded() {
        Ok(urlencoding::encode(&result).into_owned())
    } else {
        Ok(result)
    }
}

/// Builds a Lucene query string from `params`, with `params.options` merged
/// over the built-in defaults.
///
/// ```
/// use lucene_core::{query, QueryParams, QueryTerm};
///
/// let params = QueryParams::new()
///     .with_phrase("modern art")
///     .add_and(QueryTerm::any_of("type", ["artist", "rundate"]));
///
/// assert_eq!(query(&params).unwrap(), "\"modern~1 art\" AND (type:artist OR type:rundate)");
/// ```
pub fn query(params: &QueryParams) -> Result<String> {
    let options = Options::defaults().merge(&params.options);
    assemble(params, &options)
}
