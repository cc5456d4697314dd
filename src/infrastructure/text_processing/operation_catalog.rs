use crate::application::ports::TextOperation;
use crate::application::services::OperationDescriptor;

use super::bag_of_words_operation::{BAG_OF_WORDS, BagOfWordsOperation};
use super::count_vectorizer_operation::{BAG_OF_WORDS_VECTORIZED, CountVectorizerOperation};
use super::pipeline_factory::{CLEAN_TEXT, LOWERCASE_TEXT, PipelineFactory};
use super::pipeline_operation::PipelineOperation;
use super::tokens_count_operation::{TOKENS_COUNT, TokensCountOperation};

/// Every operation served over HTTP, in listing order.
pub fn default_operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::new(TOKENS_COUNT, tokens_count),
        OperationDescriptor::new(BAG_OF_WORDS, bag_of_words),
        OperationDescriptor::new(BAG_OF_WORDS_VECTORIZED, bag_of_words_vectorized),
        OperationDescriptor::new(LOWERCASE_TEXT, lowercase_text),
        OperationDescriptor::new(CLEAN_TEXT, clean_text),
    ]
}

fn tokens_count() -> Box<dyn TextOperation> {
    Box::new(TokensCountOperation)
}

fn bag_of_words() -> Box<dyn TextOperation> {
    Box::new(BagOfWordsOperation)
}

fn bag_of_words_vectorized() -> Box<dyn TextOperation> {
    Box::new(CountVectorizerOperation)
}

fn lowercase_text() -> Box<dyn TextOperation> {
    Box::new(PipelineOperation::new(
        LOWERCASE_TEXT,
        PipelineFactory::lowercase_text(),
    ))
}

fn clean_text() -> Box<dyn TextOperation> {
    Box::new(PipelineOperation::new(CLEAN_TEXT, PipelineFactory::clean_text()))
}
