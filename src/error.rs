//! Crate-level error types
//!
//! Aggregates the failure modes of each pipeline stage. Result-shape problems
//! are deliberately absent: the normalizer absorbs those locally and they
//! never surface as errors.

use thiserror::Error;

/// Main error type for content crew operations
#[derive(Debug, Error)]
pub enum CrewError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("LLM provider error: {0}")]
    Llm(#[from] crate::llm::LlmError),

    #[error("Pipeline execution failed at task '{task}': {message}")]
    PipelineFailed { task: String, message: String },

    #[error("Failed to write output: {0}")]
    OutputWrite(#[from] std::io::Error),
}

impl CrewError {
    /// Create a pipeline failure error for a named task
    pub fn pipeline_failed<S: Into<String>>(task: S, message: S) -> Self {
        Self::PipelineFailed {
            task: task.into(),
            message: message.into(),
        }
    }
}

/// Result type for content crew operations
pub type CrewResult<T> = Result<T, CrewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_failed_display() {
        let error = CrewError::pipeline_failed("create_content", "model timeout");
        assert_eq!(
            error.to_string(),
            "Pipeline execution failed at task 'create_content': model timeout"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: CrewError = io.into();
        assert!(matches!(error, CrewError::OutputWrite(_)));
        assert!(error.to_string().contains("denied"));
    }
}
