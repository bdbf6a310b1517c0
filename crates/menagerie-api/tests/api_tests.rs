//! Integration tests for the API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic, routing, the
//! static bundle fallback, and the discriminator wiring without needing
//! a live network connection.

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use menagerie_api::router::build_router;
use menagerie_api::state::AppState;
use menagerie_core::config::AssetsSection;
use menagerie_core::discriminator::{DiscriminatorError, Registration};
use menagerie_core::{AnimalQueryService, DiscriminatorRegistry};
use menagerie_types::{Animal, AnimalKind, Cat};
use serde_json::Value;
use tower::ServiceExt;

fn make_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        AnimalQueryService::new(),
        DiscriminatorRegistry::standard(),
        AssetsSection::default(),
    ))
}

fn make_state_with_bundle(dist_dir: String) -> Arc<AppState> {
    Arc::new(AppState::new(
        AnimalQueryService::new(),
        DiscriminatorRegistry::standard(),
        AssetsSection {
            dist_dir,
            entry: String::from("index.html"),
        },
    ))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Decode factory for the deliberately incomplete registry below.
fn decode_cat(value: &Value) -> Result<Animal, DiscriminatorError> {
    Ok(Animal::Cat(serde_json::from_value::<Cat>(value.clone())?))
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_list_animals_fixed_order_and_tags() {
    let state = make_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/api/animals").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["count"], 2);
    assert_eq!(json["animals"][0]["kind"], "Cat");
    assert_eq!(json["animals"][0]["id"], "T");
    assert_eq!(json["animals"][0]["name"], "Tom");
    assert_eq!(json["animals"][0]["size"]["height"], 10);
    assert_eq!(json["animals"][0]["size"]["weight"], 5);
    assert_eq!(json["animals"][1]["kind"], "Dog");
    assert_eq!(json["animals"][1]["id"], "S");
    assert_eq!(json["animals"][1]["name"], "Spike");
    assert_eq!(json["animals"][1]["size"]["height"], 30);
    assert_eq!(json["animals"][1]["size"]["weight"], 20);
}

#[tokio::test]
async fn test_response_elements_decode_back_to_the_source_records() {
    let state = make_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/api/animals").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;

    let registry = DiscriminatorRegistry::standard();
    let decoded: Vec<Animal> = json["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|element| registry.decode(element).unwrap())
        .collect();

    assert_eq!(decoded, AnimalQueryService::new().list_animals());
}

#[tokio::test]
async fn test_concurrent_queries_are_element_wise_equal() {
    let state = make_state();
    let router = build_router(state);

    let first = router
        .clone()
        .oneshot(Request::get("/api/animals").body(Body::empty()).unwrap());
    let second = router
        .oneshot(Request::get("/api/animals").body(Body::empty()).unwrap());
    let (first, second) = tokio::join!(first, second);

    let first = body_to_json(first.unwrap().into_body()).await;
    let second = body_to_json(second.unwrap().into_body()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_root_redirects_to_entry_page() {
    let state = make_state();
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/index.html");
}

#[tokio::test]
async fn test_bundle_served_with_zero_cache_lifetime() {
    let dist = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dist.path().join("index.html")).unwrap();
    write!(file, "<!DOCTYPE html><title>menagerie</title>").unwrap();

    let state = make_state_with_bundle(dist.path().to_string_lossy().into_owned());
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cache_control = response
        .headers()
        .get("cache-control")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(cache_control, "max-age=0");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("menagerie"));
}

#[tokio::test]
async fn test_missing_bundle_file_is_404() {
    let dist = tempfile::tempdir().unwrap();
    let state = make_state_with_bundle(dist.path().to_string_lossy().into_owned());
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/missing.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unregistered_variant_fails_the_request_loudly() {
    // A registry that skipped validation and covers only Cat.
    let incomplete = DiscriminatorRegistry::new(vec![Registration::new(
        AnimalKind::Cat,
        "Cat",
        decode_cat,
    )]);
    let state = Arc::new(AppState::new(
        AnimalQueryService::new(),
        incomplete,
        AssetsSection::default(),
    ));
    let router = build_router(state);

    let response = router
        .oneshot(Request::get("/api/animals").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 500);
    assert!(json["error"].as_str().unwrap().contains("Dog"));
}
