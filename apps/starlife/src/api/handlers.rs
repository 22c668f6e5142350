//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        CatalogResponse, CompareResponse, HealthResponse, InspectResponse, SimulateRequest,
        SimulateResponse, StageRequest, select_stage,
    },
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use starlife_core::SimilarityRanker;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CATALOG HANDLER
// =============================================================================

/// List the reference stars.
pub async fn catalog_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = CatalogResponse {
        count: state.catalog.len(),
        stars: state.catalog.stars().to_vec(),
    };

    (StatusCode::OK, Json(response))
}

// =============================================================================
// SIMULATE HANDLER
// =============================================================================

/// Compute a star's full timeline.
pub async fn simulate_handler(
    State(state): State<AppState>,
    Json(request): Json<SimulateRequest>,
) -> impl IntoResponse {
    let input = match request.to_input() {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!("Rejected simulate request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(SimulateResponse::error(e.to_string())),
            );
        }
    };

    let star = state.composer.compose(input);
    tracing::debug!(
        "Simulated {} with {} stages",
        star.mass,
        star.stages.len()
    );

    (StatusCode::OK, Json(SimulateResponse::success(star)))
}

// =============================================================================
// COMPARE HANDLER
// =============================================================================

/// Rank reference stars against one stage of a star.
pub async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<StageRequest>,
) -> impl IntoResponse {
    let input = match request.to_input() {
        Ok(input) => input,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(CompareResponse::error(e.to_string())),
            );
        }
    };

    let star = state.composer.compose(input);
    let stage = match select_stage(&star, request.stage.as_deref()) {
        Ok(stage) => stage,
        Err(msg) => return (StatusCode::BAD_REQUEST, Json(CompareResponse::error(msg))),
    };

    let matches = SimilarityRanker::new(&state.catalog).rank_stage(&star, stage);
    (StatusCode::OK, Json(CompareResponse::success(stage, matches)))
}

// =============================================================================
// INSPECT HANDLER
// =============================================================================

/// Derived quantities, energy and element yields for one stage of a star.
pub async fn inspect_handler(
    State(state): State<AppState>,
    Json(request): Json<StageRequest>,
) -> impl IntoResponse {
    let input = match request.to_input() {
        Ok(input) => input,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(InspectResponse::error(e.to_string())),
            );
        }
    };

    let composer = &state.composer;
    let star = composer.compose(input);
    let stage = match select_stage(&star, request.stage.as_deref()) {
        Ok(stage) => stage,
        Err(msg) => return (StatusCode::BAD_REQUEST, Json(InspectResponse::error(msg))),
    };

    let derived = composer.derived_properties(&star, stage);
    let energy = composer.energy_output(stage);
    let elements = composer
        .calculator()
        .element_production(star.mass, star.metallicity);

    (
        StatusCode::OK,
        Json(InspectResponse::success(
            &star, stage, derived, energy, elements,
        )),
    )
}
