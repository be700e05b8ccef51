use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Layout of a stopword file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordFormat {
    /// One word per line; blank lines and lines starting with `#` are skipped
    CommentLines,
    /// Any whitespace separates words; no comment syntax
    Whitespace,
}

/// Lowercase words removed by the filter stage. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse stopwords from file contents already in memory
    pub fn parse(content: &str, format: StopwordFormat) -> Self {
        match format {
            StopwordFormat::CommentLines => Self::from_words(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#')),
            ),
            StopwordFormat::Whitespace => Self::from_words(content.split_whitespace()),
        }
    }

    /// Load a stopword file from disk
    pub fn load<P: AsRef<Path>>(path: P, format: StopwordFormat) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::parse(&content, format);
        debug!(
            "Loaded {} stopwords from {} ({:?})",
            set.len(),
            path.display(),
            format
        );
        Ok(set)
    }

    /// Exact membership test; callers pass lowercased tokens
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
