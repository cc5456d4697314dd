use std::time::Instant;

use serde_json::{Map, Value};

use crate::domain::OperationResult;

/// A named, stateless transformation from one string to a structured result.
pub trait TextOperation: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(&self, text: &str) -> Result<Map<String, Value>, TextOperationError>;

    /// Text handed back as `processed_text`. Analytic operations echo their input.
    fn processed_text(&self, text: &str, _results: &Map<String, Value>) -> String {
        text.to_string()
    }

    fn execute(&self, text: &str) -> Result<OperationResult, TextOperationError> {
        let started = Instant::now();
        let results = self.run(text)?;
        let elapsed = started.elapsed();

        let processed_text = self.processed_text(text, &results);
        Ok(OperationResult::new(processed_text, results, elapsed))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TextOperationError {
    #[error("text contains no tokens to vectorize")]
    EmptyVocabulary,
}
