//! Integration tests for the Starlife HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use starlife::api::{
    AppState, CatalogResponse, CompareResponse, HealthResponse, SimulateRequest,
    SimulateResponse, create_router,
};
use starlife_core::{Catalog, StageKind};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a test server over the built-in catalog.
fn create_test_server() -> TestServer {
    TestServer::new(create_router(AppState::default())).unwrap()
}

/// Create a test server over a single-star catalog.
fn create_sun_only_server() -> TestServer {
    let sun = Catalog::builtin().get("Sun").unwrap().clone();
    let state = AppState::new(Catalog::new(vec![sun]).unwrap());
    TestServer::new(create_router(state)).unwrap()
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// CATALOG ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_catalog_lists_builtin_stars_in_order() {
    let server = create_test_server();

    let response = server.get("/catalog").await;

    response.assert_status_ok();
    let catalog: CatalogResponse = response.json();
    assert_eq!(catalog.count, 8);
    assert_eq!(catalog.stars[0].name, "Sun");
    assert_eq!(catalog.stars[7].name, "Capella");
}

#[tokio::test]
async fn test_catalog_uses_state_catalog() {
    let server = create_sun_only_server();

    let catalog: CatalogResponse = server.get("/catalog").await.json();
    assert_eq!(catalog.count, 1);
}

#[tokio::test]
async fn test_catalog_entry_uses_type_key() {
    let server = create_test_server();

    let body: Value = server.get("/catalog").await.json();
    assert_eq!(body["stars"][0]["type"], "G-type main sequence");
}

// =============================================================================
// SIMULATE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_simulate_sun() {
    let server = create_test_server();

    let request = SimulateRequest {
        mass: 1.0,
        metallicity: 0.02,
    };
    let response = server.post("/simulate").json(&request).await;

    response.assert_status_ok();
    let result: SimulateResponse = response.json();
    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(result.star_class.as_deref(), Some("Solar-type Star"));

    let star = result.star.unwrap();
    assert_eq!(star.stages.len(), 3);
    assert_eq!(star.stages[1].kind, StageKind::RedGiant);
    assert!(star.stages[2].end_time.is_infinite());
}

#[tokio::test]
async fn test_simulate_defaults_metallicity() {
    let server = create_test_server();

    let response = server.post("/simulate").json(&json!({ "mass": 25.0 })).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["star"]["metallicity"], 0.02);
    assert_eq!(body["star"]["evolutionPath"]["finalState"], "BlackHole");
    assert_eq!(body["star"]["stages"][4]["name"], "Black Hole");
    assert!(body["star"]["stages"][4]["duration"].is_null());
}

#[tokio::test]
async fn test_simulate_rejects_zero_mass() {
    let server = create_test_server();

    let response = server
        .post("/simulate")
        .json(&json!({ "mass": 0.0, "metallicity": 0.02 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let result: SimulateResponse = response.json();
    assert!(!result.success);
    assert!(result.star.is_none());
    assert_eq!(
        result.error.as_deref(),
        Some("Invalid mass: 0 (must be greater than zero)")
    );
}

#[tokio::test]
async fn test_simulate_rejects_negative_metallicity() {
    let server = create_test_server();

    let response = server
        .post("/simulate")
        .json(&json!({ "mass": 1.0, "metallicity": -0.01 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let result: SimulateResponse = response.json();
    assert!(result.error.unwrap().contains("metallicity"));
}

#[tokio::test]
async fn test_simulate_rejects_malformed_json() {
    let server = create_test_server();

    let response = server
        .post("/simulate")
        .content_type("application/json")
        .bytes(bytes::Bytes::from("not valid json"))
        .await;

    assert!(response.status_code().is_client_error());
}

// =============================================================================
// COMPARE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_compare_sun_main_sequence() {
    let server = create_test_server();

    let response = server.post("/compare").json(&json!({ "mass": 1.0 })).await;

    response.assert_status_ok();
    let result: CompareResponse = response.json();
    assert!(result.success);
    assert_eq!(result.stage.as_deref(), Some("Main Sequence"));
    assert_eq!(result.matches[0].name, "Sun");
    assert!(result.matches.len() <= 4);
    assert!(result.matches.iter().all(|m| m.similarity_percent > 60.0));
}

#[tokio::test]
async fn test_compare_black_hole_has_no_matches() {
    let server = create_test_server();

    let response = server
        .post("/compare")
        .json(&json!({ "mass": 30.0, "stage": "Black Hole" }))
        .await;

    response.assert_status_ok();
    let result: CompareResponse = response.json();
    assert!(result.success);
    assert!(result.matches.is_empty());
}

#[tokio::test]
async fn test_compare_stage_name_is_case_insensitive() {
    let server = create_test_server();

    let response = server
        .post("/compare")
        .json(&json!({ "mass": 1.0, "stage": "red giant" }))
        .await;

    response.assert_status_ok();
    let result: CompareResponse = response.json();
    assert_eq!(result.stage.as_deref(), Some("Red Giant"));
}

#[tokio::test]
async fn test_compare_stage_absent_from_timeline() {
    let server = create_test_server();

    // Red dwarfs never become giants
    let response = server
        .post("/compare")
        .json(&json!({ "mass": 0.3, "stage": "Red Giant" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let result: CompareResponse = response.json();
    assert!(!result.success);
    assert!(result.error.unwrap().contains("Main Sequence, White Dwarf"));
}

#[tokio::test]
async fn test_compare_uses_state_catalog() {
    let server = create_sun_only_server();

    let response = server
        .post("/compare")
        .json(&json!({ "mass": 2.1, "stage": "Main Sequence" }))
        .await;

    let result: CompareResponse = response.json();
    assert!(result.matches.iter().all(|m| m.name == "Sun"));
}

// =============================================================================
// INSPECT ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_inspect_sun_main_sequence() {
    let server = create_test_server();

    let response = server.post("/inspect").json(&json!({ "mass": 1.0 })).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["stage"]["name"], "Main Sequence");
    assert_eq!(body["derived"]["age"], 5e9);
    assert_eq!(body["energy"]["power"], 3.828e26);
    assert_eq!(body["elements"]["hydrogen"], 0.7);
}

#[tokio::test]
async fn test_inspect_remnant_energy_is_null_when_unbounded() {
    let server = create_test_server();

    let response = server
        .post("/inspect")
        .json(&json!({ "mass": 1.0, "stage": "White Dwarf" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["energy"]["totalEnergy"].is_null());
    assert!(body["energy"]["duration"].is_null());
}

#[tokio::test]
async fn test_inspect_unknown_stage() {
    let server = create_test_server();

    let response = server
        .post("/inspect")
        .json(&json!({ "mass": 1.0, "stage": "Protostar" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Protostar"));
}

// =============================================================================
// ROUTING TESTS
// =============================================================================

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = create_test_server();

    let response = server.get("/nonexistent").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let server = create_test_server();

    let response = server.get("/simulate").await;

    assert_eq!(response.status_code().as_u16(), 405);
}

#[tokio::test]
async fn test_router_as_tower_service() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let router = create_router(AppState::default());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
