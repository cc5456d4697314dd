use serde_json::{Map, Value, json};

use crate::application::ports::{TextOperation, TextOperationError};
use crate::application::services::count_tokens;

pub const TOKENS_COUNT: &str = "tokens-count";

/// Counts cl100k_base BPE tokens.
#[derive(Debug, Default)]
pub struct TokensCountOperation;

impl TextOperation for TokensCountOperation {
    fn name(&self) -> &'static str {
        TOKENS_COUNT
    }

    fn run(&self, text: &str) -> Result<Map<String, Value>, TextOperationError> {
        let mut results = Map::new();
        results.insert("tokens_count".to_string(), json!(count_tokens(text)));
        Ok(results)
    }
}
