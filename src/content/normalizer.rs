//! Result normalization with a layered fallback chain
//!
//! The pipeline's terminal output is loosely structured: it may be a JSON
//! document, free-form markdown, an already-decoded mapping, or a pre-typed
//! bundle. [`normalize`] resolves all of these into a valid [`ContentBundle`]
//! and never fails; every degraded path is reported through [`ParseOutcome`]
//! and a `warn` diagnostic instead of an error.

use crate::content::bundle::{ContentBundle, SocialPost};
use serde_json::{Map, Value};
use tracing::warn;

/// Raw payload embedded in a pipeline terminal output
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// Unparsed model output, possibly JSON
    Text(String),
    /// Already-decoded JSON object
    Mapping(Map<String, Value>),
}

/// Untyped terminal result of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum RawResult {
    /// Terminal output wrapper exposing its raw payload
    Output(RawPayload),
    /// A bare mapping already shaped like a bundle's field source
    Mapping(Map<String, Value>),
    /// A pre-typed bundle, passed through unchanged
    Bundle(ContentBundle),
    /// Anything else; its textual representation becomes the article
    Opaque(Value),
}

/// How the bundle was obtained, for operator visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Fields decoded directly from the result
    Decoded,
    /// Payload text used verbatim as the article, default posts injected
    ArticleFallback,
    /// Textual representation of the value used as the article
    OpaqueFallback,
}

/// Normalization result: the bundle plus the path that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub bundle: ContentBundle,
    pub outcome: ParseOutcome,
}

/// Default social posts injected when none can be parsed.
///
/// Threaded explicitly through the normalizer rather than kept as a module
/// constant, so the copy stays tied to the run's subject.
#[derive(Debug, Clone)]
pub struct DefaultPosts {
    posts: Vec<SocialPost>,
}

impl DefaultPosts {
    /// Build the two default posts (Twitter, then LinkedIn) for a subject
    pub fn for_subject(subject: &str) -> Self {
        Self {
            posts: vec![
                SocialPost {
                    platform: "Twitter".to_string(),
                    content: format!("Check out our latest article on {subject}! #AI #Insights"),
                },
                SocialPost {
                    platform: "LinkedIn".to_string(),
                    content: format!(
                        "We've just published an in-depth look at {subject}. \
                         Read more to discover the latest insights and opportunities."
                    ),
                },
            ],
        }
    }

    pub fn posts(&self) -> Vec<SocialPost> {
        self.posts.clone()
    }
}

/// Normalize a raw pipeline result into a valid content bundle.
///
/// Ordered fallback chain:
/// 1. A text payload is decoded as a bundle-shaped JSON object; if decoding
///    fails, the whole text becomes the article with the default posts.
/// 2. A mapping (embedded or bare) is used directly as the field source.
/// 3. A pre-typed bundle passes through unchanged.
/// 4. Anything else is converted to text and used as the article.
///
/// If bundle construction from a field source fails for any reason, the
/// textual-representation path applies, so this function is infallible.
pub fn normalize(raw: RawResult, defaults: &DefaultPosts) -> Normalized {
    match raw {
        RawResult::Output(RawPayload::Text(text)) => match serde_json::from_str::<Value>(&text) {
            Ok(value) => match ContentBundle::from_value(value) {
                Ok(bundle) => Normalized {
                    bundle,
                    outcome: ParseOutcome::Decoded,
                },
                Err(e) => {
                    warn!(error = %e, "Decoded payload is not bundle-shaped, using text as article");
                    article_fallback(text, defaults)
                }
            },
            Err(e) => {
                warn!(error = %e, "Payload is not JSON, using text as article");
                article_fallback(text, defaults)
            }
        },
        RawResult::Output(RawPayload::Mapping(map)) | RawResult::Mapping(map) => {
            from_field_source(Value::Object(map), defaults)
        }
        RawResult::Bundle(bundle) => Normalized {
            bundle,
            outcome: ParseOutcome::Decoded,
        },
        RawResult::Opaque(value) => {
            warn!("Opaque pipeline result, using its textual representation as article");
            opaque_fallback(value, defaults)
        }
    }
}

/// Build the bundle from a mapping, falling back to its textual form on failure
fn from_field_source(value: Value, defaults: &DefaultPosts) -> Normalized {
    match ContentBundle::from_value(value.clone()) {
        Ok(bundle) => Normalized {
            bundle,
            outcome: ParseOutcome::Decoded,
        },
        Err(e) => {
            warn!(error = %e, "Bundle construction failed, falling back to textual representation");
            opaque_fallback(value, defaults)
        }
    }
}

/// Treat free-form text as the article body
fn article_fallback(text: String, defaults: &DefaultPosts) -> Normalized {
    let article = if text.trim().is_empty() {
        // Keep the non-empty article invariant even for blank payloads
        Value::String(text).to_string()
    } else {
        text
    };

    Normalized {
        bundle: ContentBundle {
            article,
            social_media_posts: defaults.posts(),
        },
        outcome: ParseOutcome::ArticleFallback,
    }
}

/// Use the value's textual representation as the article body
fn opaque_fallback(value: Value, defaults: &DefaultPosts) -> Normalized {
    let article = match value {
        Value::String(s) if !s.trim().is_empty() => s,
        other => other.to_string(),
    };

    Normalized {
        bundle: ContentBundle {
            article,
            social_media_posts: defaults.posts(),
        },
        outcome: ParseOutcome::OpaqueFallback,
    }
}
