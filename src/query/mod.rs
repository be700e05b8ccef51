// Search query normalization with boolean operator and phrase extraction

pub mod syntax;

use crate::error::Result;
use crate::normalize::{Pipeline, PipelineRules, SnowballStemmer, Stem, StopwordSet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

pub use syntax::{extract_boolean_operators, extract_phrases, QuerySyntax};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default = "default_true")]
    pub use_stopwords: bool,
    #[serde(default = "default_true")]
    pub use_stemming: bool,
    #[serde(default)]
    pub stop_word_path: Option<PathBuf>,
    #[serde(default = "default_stemmer_language")]
    pub stemmer_language: String,
}

fn default_true() -> bool {
    true
}

fn default_stemmer_language() -> String {
    "porter".to_string()
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            use_stopwords: true,
            use_stemming: true,
            stop_word_path: None,
            stemmer_language: default_stemmer_language(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedQuery {
    pub boolean_operators: Vec<String>,
    pub phrase_queries: Vec<String>,
    pub processed_tokens: Vec<String>,
}

#[derive(Debug)]
pub struct QueryNormalizer {
    syntax: QuerySyntax,
    pipeline: Pipeline,
}

impl QueryNormalizer {
    pub fn new(pipeline: Pipeline) -> Result<Self> {
        Ok(Self {
            syntax: QuerySyntax::new()?,
            pipeline,
        })
    }

    /// Build a normalizer with query rules from `options`
    pub fn from_options(options: &QueryOptions) -> Result<Self> {
        Self::with_rules(options, PipelineRules::query())
    }

    pub fn with_rules(options: &QueryOptions, rules: PipelineRules) -> Result<Self> {
        let stopwords = match (&options.stop_word_path, options.use_stopwords) {
            (Some(path), true) => Some(StopwordSet::load(path, rules.stopword_format)?),
            (None, true) => {
                warn!("Stopword removal enabled but no stopword file given; skipping");
                None
            }
            (_, false) => None,
        };

        let stemmer: Option<Box<dyn Stem>> = if options.use_stemming {
            Some(Box::new(SnowballStemmer::from_name(
                &options.stemmer_language,
            )?))
        } else {
            None
        };

        Self::new(Pipeline::new(rules, stopwords, stemmer)?)
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Operators and phrases come from the raw query. The normalization
    /// stages then run over the whole raw query, so phrase words and
    /// operator words also show up as ordinary tokens.
    pub fn process(&self, query: &str) -> NormalizedQuery {
        let boolean_operators = self.syntax.boolean_operators(query);
        let phrase_queries = self.syntax.phrases(query);
        let processed_tokens = self.pipeline.run(query);

        debug!(
            "Query processed: {} operators, {} phrases, {} tokens",
            boolean_operators.len(),
            phrase_queries.len(),
            processed_tokens.len()
        );

        NormalizedQuery {
            boolean_operators,
            phrase_queries,
            processed_tokens,
        }
    }
}

/// Build a normalizer from `options` and process a single query
pub fn normalize_query(query: &str, options: &QueryOptions) -> Result<NormalizedQuery> {
    Ok(QueryNormalizer::from_options(options)?.process(query))
}
