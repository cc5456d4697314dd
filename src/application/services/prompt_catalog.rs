use std::collections::HashMap;

use serde_json::json;

use crate::domain::PromptTemplate;

pub const JOB_DESCRIPTION_PROMPT_ID: &str = "job-description";

const JOB_DESCRIPTION_TEMPLATE: &str = "Analyze and extract required technical skills, soft skills, company, \
     and role title from the following job description: {job_description}";

/// Fixed set of extraction prompts, keyed by prompt id.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptCatalog {
    pub fn new(prompts: Vec<PromptTemplate>) -> Self {
        Self {
            prompts: prompts.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub fn get(&self, prompt_id: &str) -> Option<&PromptTemplate> {
        self.prompts.get(prompt_id)
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.prompts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::new(vec![job_description_prompt()])
    }
}

fn job_description_prompt() -> PromptTemplate {
    let schema = json!({
        "type": "object",
        "properties": {
            "company": { "type": "string" },
            "role": { "type": "string" },
            "skills": {
                "type": "object",
                "properties": {
                    "technical": { "type": "array", "items": { "type": "string" } },
                    "soft": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["technical", "soft"]
            },
            "education": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["company", "role", "skills"]
    });

    PromptTemplate::new(
        JOB_DESCRIPTION_PROMPT_ID,
        JOB_DESCRIPTION_TEMPLATE,
        "job_description",
        schema,
    )
}
