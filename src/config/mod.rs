use crate::error::{Error, Result};
use crate::normalize::{PipelineRules, StemmerLanguage};
use crate::query::QueryOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub documents: DocumentConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub stopwords_path: PathBuf,
    pub stemmer_language: String,
    pub rules_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub stopwords_path: Option<PathBuf>,
    pub use_stopwords: bool,
    pub use_stemming: bool,
    pub stemmer_language: String,
    pub rules_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load settings through `var`, falling back to defaults for unset keys
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = var("INPUT_PATH")
            .unwrap_or_else(|| "data/sample.json".to_string())
            .into();

        let output_path = var("OUTPUT_PATH")
            .unwrap_or_else(|| "data/sample_processed.json".to_string())
            .into();

        let stopwords_path = var("STOPWORDS_PATH")
            .unwrap_or_else(|| "data/stopwords.txt".to_string())
            .into();

        let document_stemmer = var("DOCUMENT_STEMMER").unwrap_or_else(|| "english".to_string());

        let query_stopwords_path = var("QUERY_STOPWORDS_PATH").map(PathBuf::from);

        let use_stopwords = parse_bool("USE_STOPWORDS", var("USE_STOPWORDS"), true)?;
        let use_stemming = parse_bool("USE_STEMMING", var("USE_STEMMING"), true)?;

        let query_stemmer = var("QUERY_STEMMER").unwrap_or_else(|| "porter".to_string());

        let document_rules_path = var("DOCUMENT_RULES_PATH").map(PathBuf::from);
        let query_rules_path = var("QUERY_RULES_PATH").map(PathBuf::from);

        Ok(Settings {
            documents: DocumentConfig {
                input_path,
                output_path,
                stopwords_path,
                stemmer_language: document_stemmer,
                rules_path: document_rules_path,
            },
            query: QueryConfig {
                stopwords_path: query_stopwords_path,
                use_stopwords,
                use_stemming,
                stemmer_language: query_stemmer,
                rules_path: query_rules_path,
            },
        })
    }

    /// Validate both pipelines' configuration
    pub fn validate(&self) -> Result<()> {
        self.documents.validate()?;
        self.query.validate()
    }

    pub fn query_options(&self) -> QueryOptions {
        self.query.options()
    }
}

impl DocumentConfig {
    pub fn validate(&self) -> Result<()> {
        for path in [&self.input_path, &self.output_path, &self.stopwords_path] {
            if path.as_os_str().is_empty() {
                return Err(Error::Config("Document paths must be non-empty".to_string()));
            }
        }

        self.stemmer_language.parse::<StemmerLanguage>()?;
        Ok(())
    }

    /// Document rules, overlaid with `rules_path` when set
    pub fn rules(&self) -> Result<PipelineRules> {
        match &self.rules_path {
            Some(path) => PipelineRules::from_file(path, PipelineRules::document()),
            None => Ok(PipelineRules::document()),
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.use_stemming {
            self.stemmer_language.parse::<StemmerLanguage>()?;
        }
        Ok(())
    }

    /// Query rules, overlaid with `rules_path` when set
    pub fn rules(&self) -> Result<PipelineRules> {
        match &self.rules_path {
            Some(path) => PipelineRules::from_file(path, PipelineRules::query()),
            None => Ok(PipelineRules::query()),
        }
    }

    pub fn options(&self) -> QueryOptions {
        QueryOptions {
            use_stopwords: self.use_stopwords,
            use_stemming: self.use_stemming,
            stop_word_path: self.stopwords_path.clone(),
            stemmer_language: self.stemmer_language.clone(),
        }
    }
}

fn parse_bool(key: &str, value: Option<String>, default: bool) -> Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("Invalid {key} value"))),
    }
}
