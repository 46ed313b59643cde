//! LLM provider abstraction and implementations

pub mod provider;
pub mod providers;

pub use provider::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, LlmProvider, Message,
    MessageRole, ResponseFormat, TokenUsage,
};
pub use providers::{OpenAiCompatConfig, OpenAiCompatProvider};
