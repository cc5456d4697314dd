use serde_json::{Map, Value};

use crate::application::ports::{TextOperation, TextOperationError};

pub const BAG_OF_WORDS: &str = "bag-of-words";

/// Splits on Unicode whitespace and returns the words in input order.
#[derive(Debug, Default)]
pub struct BagOfWordsOperation;

impl TextOperation for BagOfWordsOperation {
    fn name(&self) -> &'static str {
        BAG_OF_WORDS
    }

    fn run(&self, text: &str) -> Result<Map<String, Value>, TextOperationError> {
        let words: Vec<Value> = text
            .split_whitespace()
            .map(|w| Value::String(w.to_string()))
            .collect();

        let mut results = Map::new();
        results.insert("bag_of_words".to_string(), Value::Array(words));
        Ok(results)
    }
}
