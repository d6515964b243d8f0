pub mod dates;
pub mod options;
pub mod request;
pub mod terms;

pub use dates::{DateInput, DateParams, DateValue};
pub use options::{Options, PhraseOptions};
pub use request::{ApiResponse, FilterQueryResponse, QueryResponse, SearchCommand};
pub use terms::{FieldValue, Filter, QueryTerm, Scalar};
