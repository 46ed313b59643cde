//! Content data model and result normalization

pub mod bundle;
pub mod normalizer;

pub use bundle::{BundleError, ContentBundle, SocialPost};
pub use normalizer::{
    normalize, DefaultPosts, Normalized, ParseOutcome, RawPayload, RawResult,
};
