mod api_error;
mod extract;
mod health;
mod similarity;
mod text_operations;
mod upload;

pub use api_error::{ApiError, ErrorResponse};
pub use extract::extract_handler;
pub use health::health_handler;
pub use similarity::similarity_handler;
pub use text_operations::{execute_operation_handler, list_operations_handler};
pub use upload::upload_handler;
