pub mod config;
pub mod error;

// Shared normalization stages
pub mod normalize;

// Pipelines
pub mod document;
pub mod query;

pub mod cli;

// Re-exports
pub use config::Settings;
pub use document::{DocumentNormalizer, NormalizedDocument, RawDocument};
pub use error::{Error, Result};
pub use query::{normalize_query, NormalizedQuery, QueryNormalizer, QueryOptions};
