use crate::error::{Error, Result};
use crate::normalize::stages::{
    remove_stopwords, stem_tokens, CleanRule, Cleaner, TokenizeRule, Tokenizer,
};
use crate::normalize::stemmer::Stem;
use crate::normalize::stopwords::{StopwordFormat, StopwordSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Selects the concrete rule for each configurable stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRules {
    pub clean: CleanRule,
    pub tokenize: TokenizeRule,
    pub stopword_format: StopwordFormat,
}

/// Partial rules read from a file. Unset stages keep the base preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesOverlay {
    pub clean: Option<CleanRule>,
    pub tokenize: Option<TokenizeRule>,
    pub stopword_format: Option<StopwordFormat>,
}

impl RulesOverlay {
    pub fn apply(self, base: PipelineRules) -> PipelineRules {
        PipelineRules {
            clean: self.clean.unwrap_or(base.clean),
            tokenize: self.tokenize.unwrap_or(base.tokenize),
            stopword_format: self.stopword_format.unwrap_or(base.stopword_format),
        }
    }
}

impl PipelineRules {
    /// Rules for recipe documents
    pub fn document() -> Self {
        Self {
            clean: CleanRule::StripPunctuation,
            tokenize: TokenizeRule::NonWord,
            stopword_format: StopwordFormat::CommentLines,
        }
    }

    /// Rules for search queries
    pub fn query() -> Self {
        Self {
            clean: CleanRule::HyphenAsSpace,
            tokenize: TokenizeRule::Whitespace,
            stopword_format: StopwordFormat::Whitespace,
        }
    }

    /// Load a YAML rules file on top of `base`; stages the file leaves
    /// out keep the rule from `base`
    pub fn from_file<P: AsRef<Path>>(path: P, base: PipelineRules) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(base);
        }

        let overlay: RulesOverlay = serde_yaml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse pipeline rules from {}: {}",
                path.display(),
                e
            ))
        })?;

        let rules = overlay.apply(base);
        debug!("Loaded pipeline rules {:?} from {}", rules, path.display());
        Ok(rules)
    }
}

/// clean → tokenize → stopword filter → stem, in that fixed order.
///
/// A missing stopword set or stemmer turns that stage into a pass-through.
/// Everything a pipeline owns is read-only after construction, so one
/// instance can serve concurrent callers.
pub struct Pipeline {
    rules: PipelineRules,
    cleaner: Cleaner,
    tokenizer: Tokenizer,
    stopwords: Option<StopwordSet>,
    stemmer: Option<Box<dyn Stem>>,
}

impl Pipeline {
    pub fn new(
        rules: PipelineRules,
        stopwords: Option<StopwordSet>,
        stemmer: Option<Box<dyn Stem>>,
    ) -> Result<Self> {
        debug!(
            "Building pipeline {:?} (stopwords: {}, stemming: {})",
            rules,
            stopwords.as_ref().map_or(0, StopwordSet::len),
            stemmer.is_some()
        );

        Ok(Self {
            rules,
            cleaner: Cleaner::new(rules.clean)?,
            tokenizer: Tokenizer::new(rules.tokenize)?,
            stopwords,
            stemmer,
        })
    }

    pub fn rules(&self) -> PipelineRules {
        self.rules
    }

    pub fn stopwords(&self) -> Option<&StopwordSet> {
        self.stopwords.as_ref()
    }

    pub fn clean(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Run every stage over `text`
    pub fn run(&self, text: &str) -> Vec<String> {
        let cleaned = self.cleaner.clean(text);
        let mut tokens = self.tokenizer.tokenize(&cleaned);
        let token_count = tokens.len();

        if let Some(stopwords) = &self.stopwords {
            tokens = remove_stopwords(tokens, stopwords);
        }

        if let Some(stemmer) = &self.stemmer {
            tokens = stem_tokens(tokens, stemmer.as_ref());
        }

        debug!(
            "Normalized {} chars into {} tokens ({} stopwords removed)",
            text.len(),
            tokens.len(),
            token_count - tokens.len()
        );

        tokens
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("rules", &self.rules)
            .field("stopwords", &self.stopwords.as_ref().map(StopwordSet::len))
            .field("stemming", &self.stemmer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::stemmer::SnowballStemmer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn full_pipeline(rules: PipelineRules) -> Pipeline {
        Pipeline::new(
            rules,
            Some(StopwordSet::from_words(["the", "a"])),
            Some(Box::new(SnowballStemmer::english())),
        )
        .unwrap()
    }

    #[test]
    fn test_document_pipeline() {
        let pipeline = full_pipeline(PipelineRules::document());
        assert_eq!(
            pipeline.run("Spicy Chicken Curry! 2 cups chicken Cook the chicken."),
            vec!["spici", "chicken", "curri", "2", "cup", "chicken", "cook", "chicken"]
        );
    }

    #[test]
    fn test_hyphen_handling_differs_between_rules() {
        let document = full_pipeline(PipelineRules::document());
        let query = full_pipeline(PipelineRules::query());

        assert_eq!(document.run("stir-fry"), vec!["stirfri"]);
        assert_eq!(query.run("stir-fry"), vec!["stir", "fri"]);
    }

    #[test]
    fn test_pass_through_stages() {
        let pipeline = Pipeline::new(PipelineRules::query(), None, None).unwrap();
        assert_eq!(
            pipeline.run("Cooking the Noodles"),
            vec!["cooking", "the", "noodles"]
        );
    }

    #[test]
    fn test_empty_input() {
        let pipeline = full_pipeline(PipelineRules::document());
        assert!(pipeline.run("").is_empty());
        assert!(pipeline.run("!!! ...").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let pipeline = Pipeline::new(PipelineRules::document(), None, None).unwrap();
        let tokens = pipeline.tokenize(&pipeline.clean("zucchini, apple; mango the banana"));

        let filtered = Pipeline::new(
            PipelineRules::document(),
            Some(StopwordSet::from_words(["the", "apple"])),
            None,
        )
        .unwrap()
        .run("zucchini, apple; mango the banana");

        let survivors: Vec<_> = tokens.into_iter().filter(|t| filtered.contains(t)).collect();
        assert_eq!(survivors, filtered);
        assert_eq!(filtered, vec!["zucchini", "mango", "banana"]);
    }

    fn create_rules_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_rules_from_yaml() {
        let file = create_rules_file("clean: hyphen_as_space\ntokenize: whitespace\n");

        let rules = PipelineRules::from_file(file.path(), PipelineRules::document()).unwrap();
        assert_eq!(rules.clean, CleanRule::HyphenAsSpace);
        assert_eq!(rules.tokenize, TokenizeRule::Whitespace);
        assert_eq!(rules.stopword_format, StopwordFormat::CommentLines);
    }

    #[test]
    fn test_partial_rules_keep_query_preset() {
        let file = create_rules_file("stopword_format: comment_lines\n");

        let rules = PipelineRules::from_file(file.path(), PipelineRules::query()).unwrap();
        assert_eq!(rules.clean, CleanRule::HyphenAsSpace);
        assert_eq!(rules.tokenize, TokenizeRule::Whitespace);
        assert_eq!(rules.stopword_format, StopwordFormat::CommentLines);

        let pipeline = Pipeline::new(rules, None, None).unwrap();
        assert_eq!(pipeline.run("stir-fry"), vec!["stir", "fry"]);
    }

    #[test]
    fn test_empty_rules_file_keeps_preset() {
        let file = create_rules_file("\n");
        assert_eq!(
            PipelineRules::from_file(file.path(), PipelineRules::query()).unwrap(),
            PipelineRules::query()
        );
    }

    #[test]
    fn test_rules_reject_unknown_names() {
        let file = create_rules_file("clean: shout\n");
        assert!(matches!(
            PipelineRules::from_file(file.path(), PipelineRules::query()),
            Err(Error::Config(_))
        ));

        let file = create_rules_file("tokenise: whitespace\n");
        assert!(matches!(
            PipelineRules::from_file(file.path(), PipelineRules::query()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_pipeline_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pipeline>();
    }
}
