//! End-to-end tests for the result normalization fallback chain

use contentcrew::content::{
    normalize, ContentBundle, DefaultPosts, ParseOutcome, RawPayload, RawResult, SocialPost,
};
use serde_json::{json, Map, Value};

fn defaults() -> DefaultPosts {
    DefaultPosts::for_subject("the best AI model in each category")
}

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected an object, got {other}"),
    }
}

#[test]
fn valid_json_text_round_trips_exactly() {
    let text = json!({
        "article": "Hello",
        "social_media_posts": [{"platform": "Twitter", "content": "Hi"}]
    })
    .to_string();

    let result = normalize(RawResult::Output(RawPayload::Text(text)), &defaults());

    assert_eq!(result.outcome, ParseOutcome::Decoded);
    assert_eq!(result.bundle.article, "Hello");
    assert_eq!(
        result.bundle.social_media_posts,
        vec![SocialPost {
            platform: "Twitter".to_string(),
            content: "Hi".to_string(),
        }]
    );
}

#[test]
fn plain_text_becomes_article_with_two_default_posts() {
    let text = "# My Article\nBody text";
    let result = normalize(
        RawResult::Output(RawPayload::Text(text.to_string())),
        &defaults(),
    );

    assert_eq!(result.outcome, ParseOutcome::ArticleFallback);
    assert_eq!(result.bundle.article, text);

    let platforms: Vec<&str> = result
        .bundle
        .social_media_posts
        .iter()
        .map(|p| p.platform.as_str())
        .collect();
    assert_eq!(platforms, vec!["Twitter", "LinkedIn"]);
}

#[test]
fn wrapper_shaped_json_falls_through_to_text_as_article() {
    let text = r#"{"raw": "not json {{{"}"#;
    let result = normalize(
        RawResult::Output(RawPayload::Text(text.to_string())),
        &defaults(),
    );

    assert_eq!(result.outcome, ParseOutcome::ArticleFallback);
    assert_eq!(result.bundle.article, text);
    assert_eq!(result.bundle.social_media_posts.len(), 2);
}

#[test]
fn bundle_shaped_mapping_is_used_directly() {
    let map = as_map(json!({
        "article": "Direct",
        "social_media_posts": [{"platform": "LinkedIn", "content": "Read it"}]
    }));

    let result = normalize(RawResult::Mapping(map), &defaults());
    assert_eq!(result.outcome, ParseOutcome::Decoded);
    assert_eq!(result.bundle.article, "Direct");
}

#[test]
fn mapping_missing_fields_never_hard_fails() {
    let map = as_map(json!({"headline": "wrong shape entirely"}));
    let result = normalize(RawResult::Mapping(map), &defaults());

    assert_eq!(result.outcome, ParseOutcome::OpaqueFallback);
    assert!(result.bundle.validate().is_ok());
    assert_eq!(result.bundle.social_media_posts.len(), 2);
}

#[test]
fn opaque_values_never_panic_and_use_textual_representation() {
    for (value, expected_article) in [
        (json!(12.5), "12.5"),
        (json!(true), "true"),
        (json!(["a", "b"]), r#"["a","b"]"#),
        (json!(null), "null"),
    ] {
        let result = normalize(RawResult::Opaque(value), &defaults());
        assert_eq!(result.outcome, ParseOutcome::OpaqueFallback);
        assert_eq!(result.bundle.article, expected_article);
    }
}

#[test]
fn normalization_is_idempotent_for_valid_bundles() {
    let bundle = ContentBundle {
        article: "Stable content".to_string(),
        social_media_posts: vec![SocialPost {
            platform: "Twitter".to_string(),
            content: "Stable post".to_string(),
        }],
    };

    let first = normalize(RawResult::Bundle(bundle.clone()), &defaults());
    assert_eq!(first.bundle, bundle);

    let second = normalize(RawResult::Bundle(first.bundle.clone()), &defaults());
    assert_eq!(second.bundle, first.bundle);
    assert_eq!(second.outcome, ParseOutcome::Decoded);
}

#[test]
fn normalization_is_idempotent_for_bundle_shaped_mappings() {
    let map = as_map(json!({
        "article": "Twice",
        "social_media_posts": [{"platform": "LinkedIn", "content": "L"}]
    }));

    let first = normalize(RawResult::Mapping(map.clone()), &defaults());
    let second = normalize(RawResult::Mapping(map), &defaults());
    assert_eq!(first.bundle, second.bundle);
}

#[test]
fn every_input_yields_a_valid_bundle() {
    let inputs = vec![
        RawResult::Output(RawPayload::Text(String::new())),
        RawResult::Output(RawPayload::Text("{\"article\": \"no posts\"}".to_string())),
        RawResult::Output(RawPayload::Mapping(Map::new())),
        RawResult::Mapping(as_map(json!({"article": ""}))),
        RawResult::Opaque(json!({})),
        RawResult::Opaque(json!("")),
    ];

    for input in inputs {
        let result = normalize(input.clone(), &defaults());
        assert!(
            result.bundle.validate().is_ok(),
            "Invalid bundle for input {input:?}"
        );
    }
}
