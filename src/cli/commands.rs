use crate::config::{DocumentConfig, QueryConfig, Settings};
use crate::document::{self, DocumentNormalizer};
use crate::query::{NormalizedQuery, QueryNormalizer};
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Run the document pipeline described by `config`
pub fn process(config: &DocumentConfig) -> Result<usize> {
    info!("Processing recipes from {}", config.input_path.display());

    let normalizer = DocumentNormalizer::from_stopwords_file(
        &config.stopwords_path,
        config.rules()?,
        &config.stemmer_language,
    )?;
    let count = document::process_file(&normalizer, &config.input_path, &config.output_path)?;

    println!(
        "✓ Processed {count} recipes into {}",
        config.output_path.display()
    );
    Ok(count)
}

/// Normalize `query` and print the result as JSON
pub fn query(query: &str, config: &QueryConfig) -> Result<NormalizedQuery> {
    let normalizer = QueryNormalizer::with_rules(&config.options(), config.rules()?)?;
    let result = normalizer.process(query);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result)
}

/// Document settings with CLI flags applied on top
pub fn document_config(
    settings: &Settings,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    stopwords: Option<PathBuf>,
    language: Option<String>,
    rules: Option<PathBuf>,
) -> DocumentConfig {
    let mut config = settings.documents.clone();

    if let Some(input) = input {
        config.input_path = input;
    }
    if let Some(output) = output {
        config.output_path = output;
    }
    if let Some(stopwords) = stopwords {
        config.stopwords_path = stopwords;
    }
    if let Some(language) = language {
        config.stemmer_language = language;
    }
    if rules.is_some() {
        config.rules_path = rules;
    }

    config
}

/// Query settings with CLI flags applied on top
pub fn query_config(
    settings: &Settings,
    stopwords: Option<PathBuf>,
    no_stopwords: bool,
    no_stemming: bool,
    language: Option<String>,
    rules: Option<PathBuf>,
) -> QueryConfig {
    let mut config = settings.query.clone();

    if stopwords.is_some() {
        config.stopwords_path = stopwords;
    }
    if no_stopwords {
        config.use_stopwords = false;
    }
    if no_stemming {
        config.use_stemming = false;
    }
    if let Some(language) = language {
        config.stemmer_language = language;
    }
    if rules.is_some() {
        config.rules_path = rules;
    }

    config
}
