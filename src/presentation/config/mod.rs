mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings, UploadSettings,
};
