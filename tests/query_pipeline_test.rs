// Query normalization through the public entry point
use normalizer::normalize::{CleanRule, PipelineRules, StopwordFormat, TokenizeRule};
use normalizer::{normalize_query, QueryNormalizer, QueryOptions};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::NamedTempFile;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn options_with_fixture_stopwords() -> QueryOptions {
    QueryOptions {
        stop_word_path: Some(format!("{FIXTURES}/query_stopwords.txt").into()),
        ..Default::default()
    }
}

#[test]
fn test_query_with_operators_and_phrases() {
    let result = normalize_query(
        r#"chicken curry AND "spicy sauce" NOT tomato"#,
        &options_with_fixture_stopwords(),
    )
    .unwrap();

    assert_eq!(result.boolean_operators, vec!["AND", "NOT"]);
    assert_eq!(result.phrase_queries, vec!["spicy sauce"]);
    assert_eq!(
        result.processed_tokens,
        vec!["chicken", "curri", "and", "spici", "sauc", "not", "tomato"]
    );
}

#[test]
fn test_whitespace_stopword_file() {
    let result = normalize_query(
        "Soup with the Noodles for Dinner",
        &options_with_fixture_stopwords(),
    )
    .unwrap();

    assert_eq!(result.processed_tokens, vec!["soup", "noodl", "dinner"]);
}

#[test]
fn test_query_result_json_shape() {
    let result = normalize_query(r#""green curry" OR stew"#, &QueryOptions::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["boolean_operators"], serde_json::json!(["OR"]));
    assert_eq!(json["phrase_queries"], serde_json::json!(["green curry"]));
    assert_eq!(
        json["processed_tokens"],
        serde_json::json!(["green", "curri", "or", "stew"])
    );
}

#[test]
fn test_unmatched_quote_and_empty_query() {
    let options = QueryOptions::default();

    let result = normalize_query(r#"pasta "fresh basil"#, &options).unwrap();
    assert!(result.phrase_queries.is_empty());

    let result = normalize_query("", &options).unwrap();
    assert!(result.boolean_operators.is_empty());
    assert!(result.phrase_queries.is_empty());
    assert!(result.processed_tokens.is_empty());
}

#[test]
fn test_comment_style_rules_for_queries() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"# ignored\nthe\n").unwrap();
    file.flush().unwrap();

    let options = QueryOptions {
        stop_word_path: Some(file.path().to_path_buf()),
        use_stemming: false,
        ..Default::default()
    };
    let rules = PipelineRules {
        clean: CleanRule::HyphenAsSpace,
        tokenize: TokenizeRule::Whitespace,
        stopword_format: StopwordFormat::CommentLines,
    };

    let normalizer = QueryNormalizer::with_rules(&options, rules).unwrap();
    let result = normalizer.process("the # ignored words");

    assert_eq!(result.processed_tokens, vec!["ignored", "words"]);
}

#[test]
fn test_shared_normalizer_across_threads() {
    let normalizer =
        Arc::new(QueryNormalizer::from_options(&options_with_fixture_stopwords()).unwrap());

    let handles: Vec<_> = ["baked beans", "the rice AND peas", "\"hot soup\""]
        .into_iter()
        .map(|query| {
            let normalizer = Arc::clone(&normalizer);
            thread::spawn(move || normalizer.process(query))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0].processed_tokens, vec!["bake", "bean"]);
    assert_eq!(results[1].processed_tokens, vec!["rice", "and", "pea"]);
    assert_eq!(results[1].boolean_operators, vec!["AND"]);
    assert_eq!(results[2].phrase_queries, vec!["hot soup"]);
}
