use serde_json::{Map, Value};

use crate::application::ports::{TextOperation, TextOperationError};
use crate::application::services::Pipeline;

/// Exposes a pipeline through the operation registry. The result is `{"text": output}`.
#[derive(Debug)]
pub struct PipelineOperation {
    name: &'static str,
    pipeline: Pipeline,
}

impl PipelineOperation {
    pub fn new(name: &'static str, pipeline: Pipeline) -> Self {
        Self { name, pipeline }
    }
}

impl TextOperation for PipelineOperation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, text: &str) -> Result<Map<String, Value>, TextOperationError> {
        let mut results = Map::new();
        results.insert("text".to_string(), Value::String(self.pipeline.run(text)));
        Ok(results)
    }

    fn processed_text(&self, text: &str, results: &Map<String, Value>) -> String {
        results
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or(text)
            .to_string()
    }
}
