use crate::error::Result;
use crate::models::{Filter, Options};
use crate::search::filters::fq;
use crate::search::query::{assemble, QueryParams};

/// Query builder bound to a fixed set of options.
///
/// Options given at construction are merged over the built-in defaults once;
/// the builder never changes afterwards and can be shared freely between
/// threads.
#[derive(Debug, Clone, PartialEq)]
pub struct LuceneBuilder {
    options: Options,
}

impl LuceneBuilder {
    pub fn new(options: Options) -> Self {
        Self {
            options: Options::defaults().merge(&options),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Builds a Lucene query with the held options. Options set on `params`
    /// take precedence for this call only.
    pub fn query(&self, params: &QueryParams) -> Result<String> {
        let options = self.options.merge(&params.options);
        assemble(params, &options)
    }

    pub fn fq(&self, filters: Option<&[Filter]>) -> String {
        fq(filters)
    }
}

impl Default for LuceneBuilder {
    fn default() -> Self {
        Self::new(Options::new())
    }
}
