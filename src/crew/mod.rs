//! Sequential multi-agent pipeline runner

pub mod pipeline;

pub use pipeline::{ContentCrew, ModelSettings};
