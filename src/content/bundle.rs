//! Typed content bundle produced by the pipeline
//!
//! The bundle is the contract between the pipeline and the output writer:
//! one article plus at least one social post, all fields non-empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single social media post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    /// Platform name, e.g. "Twitter" or "LinkedIn"
    pub platform: String,
    /// Post body
    pub content: String,
}

/// Normalized pipeline output: article plus social posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Article body in markdown
    pub article: String,
    /// Platform posts promoting the article
    pub social_media_posts: Vec<SocialPost>,
}

/// Bundle construction errors
#[derive(Debug, Clone, Error)]
pub enum BundleError {
    #[error("Not a JSON object")]
    NotAnObject,
    #[error("Failed to decode bundle fields: {0}")]
    Decode(String),
    #[error("Article is empty")]
    EmptyArticle,
    #[error("No social media posts")]
    NoPosts,
    #[error("Social post {index} has an empty {field}")]
    EmptyPostField { index: usize, field: &'static str },
}

impl ContentBundle {
    /// Construct a bundle from a decoded JSON value, validating all invariants.
    ///
    /// The value must be an object carrying `article` and `social_media_posts`.
    pub fn from_value(value: Value) -> Result<Self, BundleError> {
        if !value.is_object() {
            return Err(BundleError::NotAnObject);
        }

        let bundle: ContentBundle =
            serde_json::from_value(value).map_err(|e| BundleError::Decode(e.to_string()))?;

        bundle.validate()?;
        Ok(bundle)
    }

    /// Check the bundle invariants: non-empty article, at least one post,
    /// every post with a non-empty platform and content.
    pub fn validate(&self) -> Result<(), BundleError> {
        if self.article.trim().is_empty() {
            return Err(BundleError::EmptyArticle);
        }
        if self.social_media_posts.is_empty() {
            return Err(BundleError::NoPosts);
        }
        for (index, post) in self.social_media_posts.iter().enumerate() {
            if post.platform.trim().is_empty() {
                return Err(BundleError::EmptyPostField {
                    index,
                    field: "platform",
                });
            }
            if post.content.trim().is_empty() {
                return Err(BundleError::EmptyPostField {
                    index,
                    field: "content",
                });
            }
        }
        Ok(())
    }
}
