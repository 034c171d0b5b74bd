pub mod agency;
pub mod agents;
pub mod error;
pub mod llm;

pub use agency::TranslationAgency;
pub use agents::{Agent, ChatAgent, PromptTemplate};
pub use error::{Error, Result};
pub use llm::{
    AUTH_KEY_ENV_VAR, ChatMessage, Choice, CompletionRequest, CompletionResponse, GigaChatClient,
    GigaChatConfig, Role,
};
