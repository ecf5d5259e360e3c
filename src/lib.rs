pub mod config;
pub mod error;
pub mod progress;
pub mod prompts;
pub mod providers;

pub use config::{AppConfig, ConfigError};
pub use error::ProviderError;
pub use progress::ProgressTracker;
pub use prompts::{
    build_feedback_prompt, build_question_prompt, Difficulty, FeedbackRequest, GenerationRequest,
    QuestionCategory,
};
pub use providers::{Backend, ProviderAdapter, ProviderChoice};
