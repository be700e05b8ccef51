// The four normalization stages. Each is pure and keeps token order.
use crate::error::Result;
use crate::normalize::stemmer::Stem;
use crate::normalize::stopwords::StopwordSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How raw text is cleaned before tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanRule {
    /// Lowercase and drop everything but `[a-z0-9]` and whitespace.
    /// Hyphens are punctuation here: "stir-fry" becomes "stirfry".
    StripPunctuation,
    /// Lowercase, keep `[a-z0-9-]` and whitespace, turn hyphens into spaces
    /// and collapse whitespace runs to a single space.
    HyphenAsSpace,
}

/// How cleaned text is split into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeRule {
    /// Split on every run of non-word characters
    NonWord,
    /// Split on whitespace only
    Whitespace,
}

#[derive(Debug, Clone)]
pub struct Cleaner {
    rule: CleanRule,
    disallowed: Regex,
    whitespace: Regex,
}

impl Cleaner {
    pub fn new(rule: CleanRule) -> Result<Self> {
        let disallowed = match rule {
            CleanRule::StripPunctuation => Regex::new(r"[^a-z0-9\s]")?,
            CleanRule::HyphenAsSpace => Regex::new(r"[^a-z0-9\s-]")?,
        };

        Ok(Self {
            rule,
            disallowed,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    pub fn rule(&self) -> CleanRule {
        self.rule
    }

    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.disallowed.replace_all(&lowered, "");

        match self.rule {
            CleanRule::StripPunctuation => stripped.into_owned(),
            CleanRule::HyphenAsSpace => {
                let spaced = stripped.replace('-', " ");
                self.whitespace.replace_all(&spaced, " ").trim().to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    rule: TokenizeRule,
    non_word: Regex,
}

impl Tokenizer {
    pub fn new(rule: TokenizeRule) -> Result<Self> {
        Ok(Self {
            rule,
            non_word: Regex::new(r"\W+")?,
        })
    }

    pub fn rule(&self) -> TokenizeRule {
        self.rule
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self.rule {
            TokenizeRule::NonWord => self
                .non_word
                .split(text)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            TokenizeRule::Whitespace => text.split_whitespace().map(str::to_string).collect(),
        }
    }
}

/// Drop every token found in `stopwords`
pub fn remove_stopwords(tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !stopwords.contains(t))
        .collect()
}

/// Replace each token with its stem
pub fn stem_tokens(tokens: Vec<String>, stemmer: &dyn Stem) -> Vec<String> {
    tokens.into_iter().map(|t| stemmer.stem(&t)).collect()
}
