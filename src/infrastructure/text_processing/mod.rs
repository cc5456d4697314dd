mod bag_of_words_operation;
mod count_vectorizer_operation;
mod operation_catalog;
mod pipeline_factory;
mod pipeline_operation;
mod text_sanitizer;
mod text_transforms;
mod tokens_count_operation;

pub use bag_of_words_operation::BagOfWordsOperation;
pub use count_vectorizer_operation::CountVectorizerOperation;
pub use operation_catalog::default_operations;
pub use pipeline_factory::{PipelineFactory, PipelineFactoryError};
pub use pipeline_operation::PipelineOperation;
pub use text_sanitizer::normalize_text_span;
pub use text_transforms::{LowercaseTransform, RemovePunctuationTransform};
pub use tokens_count_operation::TokensCountOperation;
