//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Non-finite numbers (the open end of a remnant, its infinite energy) are
//! written as `null`.

use serde::{Deserialize, Serialize};
use starlife_core::{
    DerivedProperties, ElementAbundances, EnergyOutput, ReferenceStar, SimilarStar, Stage,
    StarlifeError, StellarInput, StellarProperties, constants::REFERENCE_METALLICITY,
};

fn default_metallicity() -> f64 {
    REFERENCE_METALLICITY
}

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// CATALOG RESPONSE
// =============================================================================

/// Reference catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub stars: Vec<ReferenceStar>,
}

// =============================================================================
// SIMULATE REQUEST/RESPONSE
// =============================================================================

/// Simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub mass: f64,
    #[serde(default = "default_metallicity")]
    pub metallicity: f64,
}

impl SimulateRequest {
    /// Validate into an engine input.
    pub fn to_input(&self) -> Result<StellarInput, StarlifeError> {
        StellarInput::new(self.mass, self.metallicity)
    }
}

/// Simulation response with the full timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub success: bool,
    pub star_class: Option<String>,
    pub star: Option<StellarProperties>,
    pub error: Option<String>,
}

impl SimulateResponse {
    pub fn success(star: StellarProperties) -> Self {
        Self {
            success: true,
            star_class: Some(starlife_core::star_class_label(star.mass).to_string()),
            star: Some(star),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            star_class: None,
            star: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// STAGE REQUEST (compare + inspect)
// =============================================================================

/// A star and one of its stages.
///
/// `stage` is a display name such as `"Red Giant"`; when absent the main
/// sequence is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRequest {
    pub mass: f64,
    #[serde(default = "default_metallicity")]
    pub metallicity: f64,
    #[serde(default)]
    pub stage: Option<String>,
}

impl StageRequest {
    /// Validate into an engine input.
    pub fn to_input(&self) -> Result<StellarInput, StarlifeError> {
        StellarInput::new(self.mass, self.metallicity)
    }
}

/// Pick a stage from a computed star by optional display name.
pub fn select_stage<'a>(
    star: &'a StellarProperties,
    name: Option<&str>,
) -> Result<&'a Stage, String> {
    match name {
        None => star
            .main_sequence()
            .ok_or_else(|| "Star has no stages".to_string()),
        Some(name) => star.stage_named(name).ok_or_else(|| {
            let available: Vec<&str> = star.stages.iter().map(Stage::name).collect();
            format!(
                "Stage '{}' not in this star's timeline (available: {})",
                name,
                available.join(", ")
            )
        }),
    }
}

// =============================================================================
// COMPARE RESPONSE
// =============================================================================

/// Reference stars resembling a star at one stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub success: bool,
    pub stage: Option<String>,
    #[serde(default)]
    pub matches: Vec<SimilarStar>,
    pub error: Option<String>,
}

impl CompareResponse {
    pub fn success(stage: &Stage, matches: Vec<SimilarStar>) -> Self {
        Self {
            success: true,
            stage: Some(stage.name().to_string()),
            matches,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            stage: None,
            matches: Vec::new(),
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// INSPECT RESPONSE
// =============================================================================

/// Secondary quantities of a star at one stage.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResponse {
    pub success: bool,
    pub star_class: Option<String>,
    pub stage: Option<Stage>,
    pub derived: Option<DerivedProperties>,
    pub energy: Option<EnergyOutput>,
    pub elements: Option<ElementAbundances>,
    pub error: Option<String>,
}

impl InspectResponse {
    pub fn success(
        star: &StellarProperties,
        stage: &Stage,
        derived: DerivedProperties,
        energy: EnergyOutput,
        elements: ElementAbundances,
    ) -> Self {
        Self {
            success: true,
            star_class: Some(starlife_core::star_class_label(star.mass).to_string()),
            stage: Some(stage.clone()),
            derived: Some(derived),
            energy: Some(energy),
            elements: Some(elements),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            star_class: None,
            stage: None,
            derived: None,
            energy: None,
            elements: None,
            error: Some(msg.into()),
        }
    }
}
