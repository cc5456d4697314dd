use std::time::Duration;

use serde_json::{Map, Value};

/// Outcome of a single text operation invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    processed_text: String,
    results: Map<String, Value>,
    execution_time_ms: f64,
}

impl OperationResult {
    pub fn new(processed_text: String, results: Map<String, Value>, elapsed: Duration) -> Self {
        Self {
            processed_text,
            results,
            execution_time_ms: round_millis(elapsed),
        }
    }

    pub fn processed_text(&self) -> &str {
        &self.processed_text
    }

    pub fn results(&self) -> &Map<String, Value> {
        &self.results
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    pub fn into_results(self) -> Map<String, Value> {
        self.results
    }
}

// Two decimal places.
fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}
