use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::TextTransform;

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

#[derive(Debug, Default)]
pub struct LowercaseTransform;

impl TextTransform for LowercaseTransform {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Drops every character that is neither a word character nor whitespace.
#[derive(Debug, Default)]
pub struct RemovePunctuationTransform;

impl TextTransform for RemovePunctuationTransform {
    fn name(&self) -> &'static str {
        "remove-punctuation"
    }

    fn apply(&self, text: &str) -> String {
        PUNCTUATION.replace_all(text, "").into_owned()
    }
}
