use crate::error::Result;
use regex::Regex;

/// Compiled matchers for the query syntax that cleaning would destroy
#[derive(Debug, Clone)]
pub struct QuerySyntax {
    phrase: Regex,
    operator: Regex,
}

impl QuerySyntax {
    pub fn new() -> Result<Self> {
        Ok(Self {
            phrase: Regex::new(r#""([^"]*)""#)?,
            operator: Regex::new(r"\b(AND|OR|NOT)\b")?,
        })
    }

    /// Contents of each double-quoted pair, left to right. A trailing
    /// unmatched quote yields nothing.
    pub fn phrases(&self, query: &str) -> Vec<String> {
        self.phrase
            .captures_iter(query)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Whole-word, case-sensitive AND/OR/NOT in order of appearance
    pub fn boolean_operators(&self, query: &str) -> Vec<String> {
        self.operator
            .find_iter(query)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

pub fn extract_phrases(query: &str) -> Result<Vec<String>> {
    Ok(QuerySyntax::new()?.phrases(query))
}

pub fn extract_boolean_operators(query: &str) -> Result<Vec<String>> {
    Ok(QuerySyntax::new()?.boolean_operators(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_in_order() {
        let phrases = extract_phrases(r#""green curry" with "jasmine rice" and naan"#).unwrap();
        assert_eq!(phrases, vec!["green curry", "jasmine rice"]);
    }

    #[test]
    fn test_unmatched_quote_yields_nothing() {
        assert!(extract_phrases(r#"chicken "spicy sauce"#).unwrap().is_empty());

        // The first pair still matches; the dangling third quote does not
        let phrases = extract_phrases(r#""a b" c "d"#).unwrap();
        assert_eq!(phrases, vec!["a b"]);
    }

    #[test]
    fn test_empty_phrase() {
        assert_eq!(extract_phrases(r#"x "" y"#).unwrap(), vec![""]);
    }

    #[test]
    fn test_operators_case_sensitive_whole_words() {
        let operators =
            extract_boolean_operators("rice AND beans or corn NOT ANDROID OR and ORder").unwrap();
        assert_eq!(operators, vec!["AND", "NOT", "OR"]);
    }

    #[test]
    fn test_operators_inside_phrases_count() {
        let operators = extract_boolean_operators(r#""salt AND pepper" OR herbs"#).unwrap();
        assert_eq!(operators, vec!["AND", "OR"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(extract_phrases("").unwrap().is_empty());
        assert!(extract_boolean_operators("").unwrap().is_empty());
    }
}
