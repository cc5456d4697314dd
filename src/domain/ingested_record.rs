use serde::Serialize;
use serde_json::{Map, Value};

/// Role of a text span inside a converted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocItemLabel {
    Title,
    SectionHeader,
    Text,
    ListItem,
    Table,
}

/// A normalized unit produced by an ingestion step.
///
/// Serialized untagged: documents become `{"label": .., "text": ..}` and CSV rows
/// become the bare field mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IngestedRecord {
    Document { label: DocItemLabel, text: String },
    Row(Map<String, Value>),
}

impl IngestedRecord {
    pub fn document(label: DocItemLabel, text: impl Into<String>) -> Self {
        Self::Document {
            label,
            text: text.into(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Document { text, .. } => Some(text),
            Self::Row(_) => None,
        }
    }

    pub fn label(&self) -> Option<DocItemLabel> {
        match self {
            Self::Document { label, .. } => Some(*label),
            Self::Row(_) => None,
        }
    }
}
