//! Content creation crew: four agents, four tasks, strictly in order
//!
//! Executes monitor → analyze → create → quality-assure. The create task
//! consumes the outputs of the first two tasks as context, and the
//! quality-assure task is instructed to emit a bundle-shaped JSON object.
//! The terminal output is returned as an untyped [`RawResult`] for the
//! normalizer; unrecoverable provider failures propagate to the caller.

use crate::config::CrewConfig;
use crate::content::{RawPayload, RawResult};
use crate::error::{CrewError, CrewResult};
use crate::llm::{CompletionRequest, LlmProvider, Message, ResponseFormat};
use tracing::info;

/// Ordered task names the crew executes
const TASK_SEQUENCE: [&str; 4] = [
    "monitor_news",
    "analyze_findings",
    "create_content",
    "quality_assurance",
];

/// Model parameters shared by every task in the run
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: "deepseek-chat".to_string(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

/// Content creation crew wiring agents to the fixed task sequence
pub struct ContentCrew {
    config: CrewConfig,
    provider: Box<dyn LlmProvider>,
    settings: ModelSettings,
}

impl ContentCrew {
    pub fn new(config: CrewConfig, provider: Box<dyn LlmProvider>) -> Self {
        Self {
            config,
            provider,
            settings: ModelSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ModelSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Run the full task sequence and return the terminal result.
    ///
    /// Each task blocks until its model call completes; there is no internal
    /// parallelism because task 3 depends on tasks 1-2 and task 4 on task 3.
    pub async fn kickoff(&self) -> CrewResult<RawResult> {
        let [monitor, analyze, create, review] = TASK_SEQUENCE;

        let findings = self.run_task(monitor, &[], ResponseFormat::Text).await?;
        let analysis = self.run_task(analyze, &[], ResponseFormat::Text).await?;
        let draft = self
            .run_task(
                create,
                &[("Research findings", &findings), ("Analysis", &analysis)],
                ResponseFormat::Text,
            )
            .await?;
        let reviewed = self
            .run_task(review, &[("Draft content", &draft)], ResponseFormat::Json)
            .await?;

        Ok(RawResult::Output(RawPayload::Text(reviewed)))
    }

    /// Execute one named task with optional context from earlier tasks
    async fn run_task(
        &self,
        task_name: &str,
        context: &[(&str, &str)],
        response_format: ResponseFormat,
    ) -> CrewResult<String> {
        let task = self.config.task(task_name)?;
        let agent = self.config.agent(&task.agent)?;

        info!(task = task_name, agent = %task.agent, "Starting task");

        let system = format!(
            "You are {role}. {backstory}\nYour goal: {goal}",
            role = agent.role,
            backstory = agent.backstory,
            goal = agent.goal,
        );

        let mut user = format!(
            "{description}\n\nExpected output:\n{expected}",
            description = task.description,
            expected = task.expected_output,
        );
        for (label, output) in context {
            user.push_str(&format!("\n\n{label} from a previous task:\n{output}"));
        }

        let request = CompletionRequest {
            messages: vec![Message::system(system), Message::user(user)],
            model: self.settings.model.clone(),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
            response_format,
        };

        let response = self.provider.complete(request).await.map_err(|e| {
            CrewError::pipeline_failed(task_name.to_string(), e.to_string())
        })?;

        let content = response.content.ok_or_else(|| {
            CrewError::pipeline_failed(
                task_name.to_string(),
                "Model returned an empty completion".to_string(),
            )
        })?;

        info!(
            task = task_name,
            total_tokens = response.usage.total_tokens,
            "Task completed"
        );

        Ok(content)
    }
}
