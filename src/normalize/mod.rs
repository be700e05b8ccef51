// Text normalization shared by the document and query pipelines

pub mod pipeline;
pub mod stages;
pub mod stemmer;
pub mod stopwords;

// Re-exports
pub use pipeline::{Pipeline, PipelineRules, RulesOverlay};
pub use stages::{remove_stopwords, stem_tokens, CleanRule, Cleaner, TokenizeRule, Tokenizer};
pub use stemmer::{SnowballStemmer, Stem, StemmerLanguage};
pub use stopwords::{StopwordFormat, StopwordSet};
