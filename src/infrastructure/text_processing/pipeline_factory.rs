use crate::application::services::Pipeline;

use super::text_transforms::{LowercaseTransform, RemovePunctuationTransform};

pub const LOWERCASE_TEXT: &str = "lowercase-text";
pub const CLEAN_TEXT: &str = "clean-text";

#[derive(Debug, thiserror::Error)]
pub enum PipelineFactoryError {
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(String),
}

pub struct PipelineFactory;

impl PipelineFactory {
    pub fn list_pipelines() -> Vec<&'static str> {
        vec![LOWERCASE_TEXT, CLEAN_TEXT]
    }

    pub fn create(name: &str) -> Result<Pipeline, PipelineFactoryError> {
        match name {
            LOWERCASE_TEXT => Ok(Self::lowercase_text()),
            CLEAN_TEXT => Ok(Self::clean_text()),
            other => Err(PipelineFactoryError::UnknownPipeline(other.to_string())),
        }
    }

    pub fn lowercase_text() -> Pipeline {
        Pipeline::compose(vec![Box::new(LowercaseTransform)])
    }

    pub fn clean_text() -> Pipeline {
        Pipeline::compose(vec![
            Box::new(LowercaseTransform),
            Box::new(RemovePunctuationTransform),
        ])
    }
}
