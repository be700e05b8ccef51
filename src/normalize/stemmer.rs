use crate::error::{Error, Result};
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Reduces a token to its stem. Implementations must be deterministic.
pub trait Stem: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// Languages served by the Snowball stemmers.
///
/// Names parse case-insensitively. `english`, `porter2` and `porter` all
/// select [`StemmerLanguage::English`], the Porter2 algorithm. `porter` is an
/// alias only: classic Porter is not available, so words such as "generate"
/// get their Porter2 stem rather than classic Porter's "gener".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemmerLanguage {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl StemmerLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            StemmerLanguage::Arabic => Algorithm::Arabic,
            StemmerLanguage::Danish => Algorithm::Danish,
            StemmerLanguage::Dutch => Algorithm::Dutch,
            StemmerLanguage::English => Algorithm::English,
            StemmerLanguage::Finnish => Algorithm::Finnish,
            StemmerLanguage::French => Algorithm::French,
            StemmerLanguage::German => Algorithm::German,
            StemmerLanguage::Greek => Algorithm::Greek,
            StemmerLanguage::Hungarian => Algorithm::Hungarian,
            StemmerLanguage::Italian => Algorithm::Italian,
            StemmerLanguage::Norwegian => Algorithm::Norwegian,
            StemmerLanguage::Portuguese => Algorithm::Portuguese,
            StemmerLanguage::Romanian => Algorithm::Romanian,
            StemmerLanguage::Russian => Algorithm::Russian,
            StemmerLanguage::Spanish => Algorithm::Spanish,
            StemmerLanguage::Swedish => Algorithm::Swedish,
            StemmerLanguage::Tamil => Algorithm::Tamil,
            StemmerLanguage::Turkish => Algorithm::Turkish,
        }
    }
}

impl FromStr for StemmerLanguage {
    type Err = Error;

    /// Accepts Snowball language names. `porter` and `porter2` resolve to English.
    fn from_str(s: &str) -> Result<Self> {
        let language = match s.trim().to_lowercase().as_str() {
            "arabic" => StemmerLanguage::Arabic,
            "danish" => StemmerLanguage::Danish,
            "dutch" => StemmerLanguage::Dutch,
            "english" | "porter2" => StemmerLanguage::English,
            "porter" => {
                warn!("Stemmer 'porter' is served by the English (Porter2) algorithm");
                StemmerLanguage::English
            }
            "finnish" => StemmerLanguage::Finnish,
            "french" => StemmerLanguage::French,
            "german" => StemmerLanguage::German,
            "greek" => StemmerLanguage::Greek,
            "hungarian" => StemmerLanguage::Hungarian,
            "italian" => StemmerLanguage::Italian,
            "norwegian" => StemmerLanguage::Norwegian,
            "portuguese" => StemmerLanguage::Portuguese,
            "romanian" => StemmerLanguage::Romanian,
            "russian" => StemmerLanguage::Russian,
            "spanish" => StemmerLanguage::Spanish,
            "swedish" => StemmerLanguage::Swedish,
            "tamil" => StemmerLanguage::Tamil,
            "turkish" => StemmerLanguage::Turkish,
            other => {
                return Err(Error::Config(format!(
                    "Unsupported stemmer language: {other}"
                )))
            }
        };
        Ok(language)
    }
}

/// Snowball stemmer for one language
pub struct SnowballStemmer {
    language: StemmerLanguage,
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: StemmerLanguage) -> Self {
        Self {
            language,
            inner: Stemmer::create(language.algorithm()),
        }
    }

    /// English (Porter2)
    pub fn english() -> Self {
        Self::new(StemmerLanguage::English)
    }

    /// Build from a configuration string such as "english" or "porter"
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}
