//! Mock implementations for testing
//!
//! Provides a mock LlmProvider so crew behavior can be tested without a
//! network or an API key.

use crate::llm::{
    CompletionRequest, CompletionResponse, FinishReason, LlmError, LlmProvider, TokenUsage,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock LLM provider returning scripted responses in sequence
#[derive(Debug)]
pub struct MockLlmProvider {
    responses: Vec<String>,
    current_response: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    should_fail: bool,
}

impl MockLlmProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            current_response: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn single_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    pub fn with_failure() -> Self {
        Self {
            responses: vec![],
            current_response: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    /// Handle to the recorded requests, for assertions after the run
    pub fn requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if self.should_fail {
            return Err(LlmError::RequestFailed("Mock LLM failure".to_string()));
        }

        self.requests.lock().await.push(request);

        let mut current = self.current_response.lock().await;
        let response_idx = *current % self.responses.len().max(1);
        *current += 1;

        let content = if self.responses.is_empty() {
            "Mock response".to_string()
        } else {
            self.responses[response_idx].clone()
        };

        Ok(CompletionResponse {
            content: Some(content),
            model: "mock-model".to_string(),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            },
            finish_reason: FinishReason::Stop,
        })
    }

    async fn health_check(&self) -> Result<(), LlmError> {
        if self.should_fail {
            Err(LlmError::RequestFailed(
                "Mock health check failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
