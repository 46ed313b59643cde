//! Content bundle persistence
//!
//! Each run writes into its own folder named after the sanitized subject and
//! a second-resolution timestamp. The article goes to one markdown file and
//! the social posts to another, one `## <platform>` section per post with a
//! horizontal-rule separator. I/O failures propagate; partially created
//! folders are left in place for inspection.

use crate::content::ContentBundle;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files produced by one run
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPaths {
    pub folder: PathBuf,
    pub article: PathBuf,
    pub social: PathBuf,
}

/// Writes normalized bundles under a base output directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    base_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Persist the bundle for a subject, creating the run folder
    pub fn save(&self, bundle: &ContentBundle, subject: &str) -> std::io::Result<SavedPaths> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let folder = self
            .base_dir
            .join(format!("{}_{timestamp}", sanitize_folder_name(subject)));
        std::fs::create_dir_all(&folder)?;
        info!(folder = %folder.display(), "Created output folder");

        let prefix = sanitize_filename(subject);

        let article = folder.join(format!("{prefix}_article.md"));
        std::fs::write(&article, &bundle.article)?;
        info!(path = %article.display(), "Article saved");

        let social = folder.join(format!("{prefix}_social.md"));
        std::fs::write(&social, render_social_posts(bundle))?;
        info!(path = %social.display(), "Social media posts saved");

        Ok(SavedPaths {
            folder,
            article,
            social,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Render all posts as `## <platform>` sections separated by horizontal rules
fn render_social_posts(bundle: &ContentBundle) -> String {
    let mut rendered = String::new();
    for post in &bundle.social_media_posts {
        rendered.push_str(&format!("## {}\n\n{}\n\n---\n\n", post.platform, post.content));
    }
    rendered
}

/// Convert a subject into a valid lowercase filename prefix.
///
/// Non-word characters become underscores, runs of whitespace or underscores
/// collapse to a single underscore, and leading/trailing underscores are
/// trimmed. Deterministic for a given subject.
pub fn sanitize_filename(name: &str) -> String {
    sanitize_folder_name(name).to_lowercase()
}

/// Same as [`sanitize_filename`] but case-preserving, for folder names
pub fn sanitize_folder_name(name: &str) -> String {
    // Unwraps are safe: the patterns are fixed and valid
    let invalid = Regex::new(r"[^\w\s-]").unwrap();
    let separators = Regex::new(r"[\s_]+").unwrap();

    let sanitized = invalid.replace_all(name, "_");
    let sanitized = separators.replace_all(&sanitized, "_");
    sanitized.trim_matches('_').to_string()
}
