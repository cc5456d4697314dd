use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value, json};

use crate::application::ports::{TextOperation, TextOperationError};

pub const BAG_OF_WORDS_VECTORIZED: &str = "bag-of-words-vectorized";

// Words of two or more word characters, as in scikit-learn's CountVectorizer.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Count-vectorizes a single document: a sorted vocabulary and one row of counts.
#[derive(Debug, Default)]
pub struct CountVectorizerOperation;

impl CountVectorizerOperation {
    fn term_counts(text: &str) -> BTreeMap<String, u64> {
        let lowered = text.to_lowercase();
        let mut counts = BTreeMap::new();
        for token in TOKEN_PATTERN.find_iter(&lowered) {
            *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

impl TextOperation for CountVectorizerOperation {
    fn name(&self) -> &'static str {
        BAG_OF_WORDS_VECTORIZED
    }

    fn run(&self, text: &str) -> Result<Map<String, Value>, TextOperationError> {
        let counts = Self::term_counts(text);
        if counts.is_empty() {
            return Err(TextOperationError::EmptyVocabulary);
        }

        let (vocabulary, row): (Vec<String>, Vec<u64>) = counts.into_iter().unzip();

        let mut results = Map::new();
        results.insert("bag_of_words".to_string(), json!([row]));
        results.insert("vocabulary".to_string(), json!(vocabulary));
        Ok(results)
    }
}
