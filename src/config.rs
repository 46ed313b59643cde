//! Agent and task roster configuration
//!
//! Two YAML documents drive the pipeline: an agent roster (role, goal,
//! backstory per agent) and a task roster (description, expected output,
//! assigned agent per task). Before deserialization a `{subject}` placeholder
//! is substituted into every string-valued field, one level into nested
//! mappings. Loading fails loudly; configuration errors are startup-fatal.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Placeholder token replaced with the run's subject
const SUBJECT_PLACEHOLDER: &str = "{subject}";

/// One agent role definition from the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Short role name presented to the model
    pub role: String,
    /// What this agent is trying to achieve
    pub goal: String,
    /// Persona context prepended to the system prompt
    pub backstory: String,
}

/// One task definition from the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Instructional prompt for the task
    pub description: String,
    /// What the task's output should look like
    pub expected_output: String,
    /// Name of the agent assigned to this task
    pub agent: String,
}

/// Loaded and subject-substituted rosters
#[derive(Debug, Clone)]
pub struct CrewConfig {
    pub agents: HashMap<String, AgentSpec>,
    pub tasks: HashMap<String, TaskSpec>,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
    #[error("Missing required entry '{name}' in {roster} roster")]
    MissingEntry { roster: &'static str, name: String },
}

impl CrewConfig {
    /// Load both rosters from a config directory, substituting the subject
    pub fn load(config_dir: &Path, subject: &str) -> Result<Self, ConfigError> {
        let agents = load_roster(&config_dir.join("agents.yaml"), subject)?;
        let tasks = load_roster(&config_dir.join("tasks.yaml"), subject)?;
        Ok(Self { agents, tasks })
    }

    /// Look up an agent by name, failing loudly if absent
    pub fn agent(&self, name: &str) -> Result<&AgentSpec, ConfigError> {
        self.agents.get(name).ok_or_else(|| ConfigError::MissingEntry {
            roster: "agent",
            name: name.to_string(),
        })
    }

    /// Look up a task by name, failing loudly if absent
    pub fn task(&self, name: &str) -> Result<&TaskSpec, ConfigError> {
        self.tasks.get(name).ok_or_else(|| ConfigError::MissingEntry {
            roster: "task",
            name: name.to_string(),
        })
    }
}

/// Load one roster file into typed entries
fn load_roster<T: serde::de::DeserializeOwned>(
    path: &Path,
    subject: &str,
) -> Result<HashMap<String, T>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut value: Value = serde_yaml::from_str(&content)?;
    substitute_subject(&mut value, subject, 0);
    Ok(serde_yaml::from_value(value)?)
}

/// Replace `{subject}` in string values, descending one level into mappings.
///
/// Depth 0 is the roster mapping itself; its entries (depth 1) carry the
/// string fields, so substitution reaches strings nested one level inside
/// each entry and stops there.
fn substitute_subject(value: &mut Value, subject: &str, depth: u8) {
    match value {
        Value::String(s) => {
            if s.contains(SUBJECT_PLACEHOLDER) {
                *s = s.replace(SUBJECT_PLACEHOLDER, subject);
            }
        }
        Value::Mapping(map) if depth < 2 => {
            for (_, v) in map.iter_mut() {
                substitute_subject(v, subject, depth + 1);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_top_level_string() {
        let mut value: Value = serde_yaml::from_str("greeting: 'Hello {subject}'").unwrap();
        substitute_subject(&mut value, "Rust", 0);

        assert_eq!(
            value.get("greeting").unwrap().as_str().unwrap(),
            "Hello Rust"
        );
    }

    #[test]
    fn test_substitute_nested_one_level() {
        let yaml = r#"
writer:
  role: "Writer on {subject}"
  goal: "Cover {subject} deeply"
  backstory: "No placeholder here"
"#;
        let mut value: Value = serde_yaml::from_str(yaml).unwrap();
        substitute_subject(&mut value, "AI models", 0);

        let roster: HashMap<String, AgentSpec> = serde_yaml::from_value(value).unwrap();
        let writer = &roster["writer"];
        assert_eq!(writer.role, "Writer on AI models");
        assert_eq!(writer.goal, "Cover AI models deeply");
        assert_eq!(writer.backstory, "No placeholder here");
    }

    #[test]
    fn test_substitute_multiple_occurrences() {
        let mut value: Value =
            serde_yaml::from_str("note: '{subject} and {subject} again'").unwrap();
        substitute_subject(&mut value, "x", 0);

        assert_eq!(
            value.get("note").unwrap().as_str().unwrap(),
            "x and x again"
        );
    }

    #[test]
    fn test_load_rosters_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("agents.yaml"),
            r#"
news_monitor:
  role: "News Monitor"
  goal: "Track coverage of {subject}"
  backstory: "Veteran industry watcher"
"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("tasks.yaml"),
            r#"
monitor_news:
  description: "Find recent news about {subject}"
  expected_output: "A list of findings"
  agent: "news_monitor"
"#,
        )
        .unwrap();

        let config = CrewConfig::load(dir.path(), "test topic").unwrap();
        assert_eq!(
            config.agent("news_monitor").unwrap().goal,
            "Track coverage of test topic"
        );
        assert_eq!(
            config.task("monitor_news").unwrap().description,
            "Find recent news about test topic"
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = CrewConfig::load(dir.path(), "subject");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }

    #[test]
    fn test_malformed_yaml_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("agents.yaml"), "monitor: [unclosed").unwrap();

        let result = CrewConfig::load(dir.path(), "subject");
        assert!(matches!(result, Err(ConfigError::YamlParse(_))));
    }

    #[test]
    fn test_missing_entry_lookup() {
        let config = CrewConfig {
            agents: HashMap::new(),
            tasks: HashMap::new(),
        };
        let result = config.agent("ghost");
        assert!(matches!(result, Err(ConfigError::MissingEntry { .. })));
        assert!(result.unwrap_err().to_string().contains("ghost"));
    }
}
