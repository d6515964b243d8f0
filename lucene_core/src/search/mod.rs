pub mod builder;
pub mod dates;
pub mod filters;
pub mod phrase;
pub mod query;
pub mod terms;

pub use builder::LuceneBuilder;
pub use dates::process_dates;
pub use filters::{fq, process_filters};
pub use phrase::{process_phrase, MATCH_ALL};
pub use query::{query, QueryParams};
pub use terms::{process_terms, Bond};
