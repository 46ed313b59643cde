//! Content Crew - sequential multi-agent content creation
//!
//! Orchestrates a fixed sequence of LLM-backed agents (monitor, analyst,
//! writer, reviewer) to research a subject, draft an article, and produce
//! social-media summaries, then persists the results to disk.
//!
//! # Overview
//!
//! The crate is organized around one nontrivial component and several
//! collaborators:
//! - Result normalization: turning the loosely-structured terminal output of
//!   the pipeline into a strongly-typed [`content::ContentBundle`], with a
//!   deterministic fallback chain that never fails
//! - YAML agent/task roster loading with subject substitution
//! - A strictly sequential four-task pipeline runner
//! - An OpenAI-compatible chat-completions provider
//! - An output writer producing one article file and one social-posts file
//!
//! # Quick Start
//!
//! ```rust
//! use contentcrew::content::{normalize, DefaultPosts, RawPayload, RawResult};
//!
//! let defaults = DefaultPosts::for_subject("Rust in production");
//! let raw = RawResult::Output(RawPayload::Text(
//!     r#"{"article": "Hello", "social_media_posts": [{"platform": "Twitter", "content": "Hi"}]}"#
//!         .to_string(),
//! ));
//!
//! let normalized = normalize(raw, &defaults);
//! assert_eq!(normalized.bundle.article, "Hello");
//! assert_eq!(normalized.bundle.social_media_posts.len(), 1);
//! ```

pub mod config;
pub mod content;
pub mod crew;
pub mod error;
pub mod llm;
pub mod observability;
pub mod output;
pub mod testing;

pub use config::{AgentSpec, CrewConfig, TaskSpec};
pub use content::{normalize, ContentBundle, DefaultPosts, RawResult, SocialPost};
pub use crew::ContentCrew;
pub use error::{CrewError, CrewResult};
pub use output::OutputWriter;
