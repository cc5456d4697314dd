use serde_json::Value;

/// A completion prompt with a single input placeholder and the JSON schema the
/// answer must follow.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    pub id: String,
    pub template: String,
    pub placeholder: String,
    pub response_schema: Value,
}

impl PromptTemplate {
    pub fn new(
        id: impl Into<String>,
        template: impl Into<String>,
        placeholder: impl Into<String>,
        response_schema: Value,
    ) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            placeholder: placeholder.into(),
            response_schema,
        }
    }

    pub fn render(&self, input: &str) -> String {
        self.template
            .replace(&format!("{{{}}}", self.placeholder), input)
            .trim()
            .to_string()
    }
}
