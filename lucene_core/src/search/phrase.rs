use crate::models::PhraseOptions;

/// Lucene token that matches every document.
pub const MATCH_ALL: &str = "*:*";

/// Formats a free-text phrase as a quoted Lucene phrase.
///
/// Words at least `fuzzy_letters` characters long get a `~{fuzzy_level}`
/// suffix, and the quoted phrase gets `~{proximity}` when a proximity is set.
/// A blank phrase matches all documents.
pub fn process_phrase(phrase: &str, options: &PhraseOptions) -> String {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return MATCH_ALL.to_string();
    }

    let words: Vec<String> = phrase
        .split_whitespace()
        .map(|word| {
            if word.chars().count() >= options.fuzzy_letters {
                format!("{}~{}", word, options.fuzzy_level)
            } else {
                word.to_string()
            }
        })
        .collect();

    match options.proximity {
        Some(proximity) => format!("\"{}\"~{}", words.join(" "), proximity),
        None => format!("\"{}\"", words.join(" ")),
    }
}
