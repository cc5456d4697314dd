use std::path::Path;

use crate::application::ports::IngestionError;
use crate::domain::DocItemLabel;

/// A raw labelled span as it comes out of a format-specific parser.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub label: DocItemLabel,
    pub text: String,
}

impl TextSpan {
    pub fn new(label: DocItemLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

pub trait DocumentReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<TextSpan>, IngestionError>;
}
