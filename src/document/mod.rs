// Recipe document normalization: JSON records in, token lists out

use crate::error::{Error, Result};
use crate::normalize::{Pipeline, PipelineRules, SnowballStemmer, Stem, StopwordSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Id given to records that arrive without one
pub const UNKNOWN_ID: &str = "unknown_id";

/// A recipe as it appears in the input file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<TextEntry>,
    #[serde(default)]
    pub instructions: Vec<TextEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextEntry {
    #[serde(default)]
    pub text: Option<String>,
}

impl TextEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl RawDocument {
    /// String ids pass through, numbers are rendered, missing or null ids
    /// become [`UNKNOWN_ID`]
    pub fn document_id(&self) -> String {
        match &self.id {
            None | Some(serde_json::Value::Null) => UNKNOWN_ID.to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// `title + " " + ingredients + " " + instructions`
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title(),
            join_entries(&self.ingredients),
            join_entries(&self.instructions)
        )
    }
}

fn join_entries(entries: &[TextEntry]) -> String {
    entries
        .iter()
        .map(|e| e.text.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Output record. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    pub id: String,
    pub title: String,
    #[serde(rename = "processed_tokens")]
    pub tokens: Vec<String>,
    #[serde(rename = "processed_text")]
    pub joined_text: String,
}

#[derive(Debug)]
pub struct DocumentNormalizer {
    pipeline: Pipeline,
}

impl DocumentNormalizer {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Document rules with the given stopwords and an English stemmer
    pub fn with_stopwords(stopwords: StopwordSet) -> Result<Self> {
        Self::with_stemmer(stopwords, Box::new(SnowballStemmer::english()))
    }

    pub fn with_stemmer(stopwords: StopwordSet, stemmer: Box<dyn Stem>) -> Result<Self> {
        let pipeline = Pipeline::new(PipelineRules::document(), Some(stopwords), Some(stemmer))?;
        Ok(Self::new(pipeline))
    }

    /// Load stopwords in the format the rules name and build a normalizer
    pub fn from_stopwords_file<P: AsRef<Path>>(
        path: P,
        rules: PipelineRules,
        language: &str,
    ) -> Result<Self> {
        let stopwords = StopwordSet::load(path, rules.stopword_format)?;
        let stemmer = SnowballStemmer::from_name(language)?;
        let pipeline = Pipeline::new(rules, Some(stopwords), Some(Box::new(stemmer)))?;
        Ok(Self::new(pipeline))
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn normalize(&self, document: &RawDocument) -> NormalizedDocument {
        let id = document.document_id();
        debug!("Normalizing document {}", id);

        let tokens = self.pipeline.run(&document.combined_text());
        let joined_text = tokens.join(" ");

        NormalizedDocument {
            id,
            title: document.title().to_string(),
            tokens,
            joined_text,
        }
    }

    pub fn normalize_all(&self, documents: &[RawDocument]) -> Vec<NormalizedDocument> {
        documents.iter().map(|d| self.normalize(d)).collect()
    }
}

/// Parse a JSON array of recipe records
pub fn parse_documents(json: &str) -> Result<Vec<RawDocument>> {
    Ok(serde_json::from_str(json)?)
}

/// Pretty JSON with 2-space indentation; non-ASCII stays literal
pub fn to_json(documents: &[NormalizedDocument]) -> Result<String> {
    Ok(serde_json::to_string_pretty(documents)?)
}

/// Normalize every record of `input_path` into `output_path`.
///
/// The output file is written only after every record has been processed.
pub fn process_file(
    normalizer: &DocumentNormalizer,
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let content = fs::read_to_string(input_path).map_err(|source| Error::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    let documents = parse_documents(&content)?;
    info!(
        "Loaded {} documents from {}",
        documents.len(),
        input_path.display()
    );

    let normalized = normalizer.normalize_all(&documents);
    let output = to_json(&normalized)?;
    fs::write(output_path, output).map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} normalized documents to {}",
        normalized.len(),
        output_path.display()
    );
    Ok(normalized.len())
}

/// Load stopwords, then normalize `input_path` into `output_path` with the
/// document rules and an English stemmer
pub fn process_recipes(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    stopwords_path: impl AsRef<Path>,
) -> Result<usize> {
    let normalizer = DocumentNormalizer::from_stopwords_file(
        stopwords_path,
        PipelineRules::document(),
        "english",
    )?;
    process_file(&normalizer, input_path, output_path)
}
