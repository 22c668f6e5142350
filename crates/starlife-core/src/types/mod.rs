//! # Core Type Definitions
//!
//! This module contains all core types for the Starlife engine:
//! - Validated inputs (`SolarMass`, `Metallicity`, `StellarInput`)
//! - Terminal-fate classification (`MassClass`, `FinalState`, `EvolutionPath`)
//! - Timeline structures (`StageKind`, `Stage`, `StellarProperties`)
//! - Error types (`StarlifeError`)
//!
//! ## Validation Guarantees
//!
//! A `SolarMass` or `Metallicity` can only be built from a finite, strictly
//! positive value. Every scaling law takes these newtypes, so power laws and
//! logarithms never see a zero or negative argument.

mod open_ended;

use crate::constants::{BLACK_HOLE_LIMIT, LOW_MASS_LIMIT, REFERENCE_METALLICITY, SUPERNOVA_LIMIT};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// VALIDATED INPUTS
// =============================================================================

/// Stellar mass in solar masses (M☉).
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SolarMass(f64);

impl SolarMass {
    /// The Sun.
    pub const SUN: SolarMass = SolarMass(1.0);

    /// Create a mass, rejecting non-finite and non-positive values.
    pub fn new(value: f64) -> Result<Self, StarlifeError> {
        check_positive("mass", value).map(Self)
    }

    /// Get the raw value in solar masses.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SolarMass {
    type Error = StarlifeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SolarMass> for f64 {
    fn from(mass: SolarMass) -> Self {
        mass.0
    }
}

impl fmt::Display for SolarMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} M☉", self.0)
    }
}

/// Metallicity Z: mass fraction of elements heavier than helium.
///
/// Always finite and strictly positive. Solar is 0.02.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Metallicity(f64);

impl Metallicity {
    /// Solar metallicity (Z = 0.02).
    pub const SOLAR: Metallicity = Metallicity(REFERENCE_METALLICITY);

    /// Create a metallicity, rejecting non-finite and non-positive values.
    pub fn new(value: f64) -> Result<Self, StarlifeError> {
        check_positive("metallicity", value).map(Self)
    }

    /// Get the raw mass fraction.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Ratio to solar metallicity (Z / 0.02).
    #[must_use]
    pub fn relative_to_solar(self) -> f64 {
        self.0 / REFERENCE_METALLICITY
    }
}

impl Default for Metallicity {
    fn default() -> Self {
        Self::SOLAR
    }
}

impl TryFrom<f64> for Metallicity {
    type Error = StarlifeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Metallicity> for f64 {
    fn from(z: Metallicity) -> Self {
        z.0
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<f64, StarlifeError> {
    if !value.is_finite() {
        return Err(StarlifeError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(StarlifeError::InvalidInput {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// The input to a simulation: a mass and a metallicity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarInput {
    pub mass: SolarMass,
    #[serde(default)]
    pub metallicity: Metallicity,
}

impl StellarInput {
    /// Validate raw values into an input.
    pub fn new(mass: f64, metallicity: f64) -> Result<Self, StarlifeError> {
        Ok(Self {
            mass: SolarMass::new(mass)?,
            metallicity: Metallicity::new(metallicity)?,
        })
    }

    /// Input at solar metallicity.
    #[must_use]
    pub fn with_mass(mass: SolarMass) -> Self {
        Self {
            mass,
            metallicity: Metallicity::SOLAR,
        }
    }
}

// =============================================================================
// EVOLUTION PATH
// =============================================================================

/// Mass band that decides a star's terminal fate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MassClass {
    /// Below 0.5 M☉: red dwarfs that never become giants.
    LowMass,
    /// 0.5 to 8 M☉.
    IntermediateMass,
    /// 8 to 20 M☉.
    HighMass,
    /// 20 M☉ and above.
    VeryHighMass,
}

impl MassClass {
    /// Classify a mass using the shared thresholds.
    #[must_use]
    pub fn of(mass: SolarMass) -> Self {
        let m = mass.value();
        if m < LOW_MASS_LIMIT {
            MassClass::LowMass
        } else if m < SUPERNOVA_LIMIT {
            MassClass::IntermediateMass
        } else if m < BLACK_HOLE_LIMIT {
            MassClass::HighMass
        } else {
            MassClass::VeryHighMass
        }
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MassClass::LowMass => "Low Mass",
            MassClass::IntermediateMass => "Intermediate Mass",
            MassClass::HighMass => "High Mass",
            MassClass::VeryHighMass => "Very High Mass",
        }
    }
}

impl fmt::Display for MassClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The compact object left when fusion ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FinalState {
    WhiteDwarf,
    NeutronStar,
    BlackHole,
}

impl FinalState {
    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FinalState::WhiteDwarf => "White Dwarf",
            FinalState::NeutronStar => "Neutron Star",
            FinalState::BlackHole => "Black Hole",
        }
    }

    /// The timeline stage that represents this remnant.
    #[must_use]
    pub fn stage_kind(&self) -> StageKind {
        match self {
            FinalState::WhiteDwarf => StageKind::WhiteDwarf,
            FinalState::NeutronStar => StageKind::NeutronStar,
            FinalState::BlackHole => StageKind::BlackHole,
        }
    }
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terminal-fate classification of a star. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPath {
    #[serde(rename = "type")]
    pub class: MassClass,
    pub final_state: FinalState,
    pub description: String,
    pub supernova: bool,
}

impl EvolutionPath {
    /// Build the path for a mass class.
    #[must_use]
    pub fn for_class(class: MassClass) -> Self {
        let (final_state, description, supernova) = match class {
            MassClass::LowMass => (FinalState::WhiteDwarf, "Red dwarf → White dwarf", false),
            MassClass::IntermediateMass => (
                FinalState::WhiteDwarf,
                "Main sequence → Red giant → White dwarf",
                false,
            ),
            MassClass::HighMass => (
                FinalState::NeutronStar,
                "Main sequence → Red supergiant → Supernova → Neutron star",
                true,
            ),
            MassClass::VeryHighMass => (
                FinalState::BlackHole,
                "Main sequence → Blue supergiant → Supernova → Black hole",
                true,
            ),
        };

        Self {
            class,
            final_state,
            description: description.to_string(),
            supernova,
        }
    }
}

// =============================================================================
// STAGES
// =============================================================================

/// One leg of the evolutionary timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageKind {
    #[serde(rename = "Main Sequence")]
    MainSequence,
    #[serde(rename = "Red Giant")]
    RedGiant,
    #[serde(rename = "Red Supergiant")]
    RedSupergiant,
    #[serde(rename = "Advanced Burning")]
    AdvancedBurning,
    #[serde(rename = "Supernova")]
    Supernova,
    #[serde(rename = "White Dwarf")]
    WhiteDwarf,
    #[serde(rename = "Neutron Star")]
    NeutronStar,
    #[serde(rename = "Black Hole")]
    BlackHole,
}

impl StageKind {
    /// All stage kinds in timeline order.
    pub const ALL: [StageKind; 8] = [
        StageKind::MainSequence,
        StageKind::RedGiant,
        StageKind::RedSupergiant,
        StageKind::AdvancedBurning,
        StageKind::Supernova,
        StageKind::WhiteDwarf,
        StageKind::NeutronStar,
        StageKind::BlackHole,
    ];

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            StageKind::MainSequence => "Main Sequence",
            StageKind::RedGiant => "Red Giant",
            StageKind::RedSupergiant => "Red Supergiant",
            StageKind::AdvancedBurning => "Advanced Burning",
            StageKind::Supernova => "Supernova",
            StageKind::WhiteDwarf => "White Dwarf",
            StageKind::NeutronStar => "Neutron Star",
            StageKind::BlackHole => "Black Hole",
        }
    }

    /// Parse a display name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
    }

    /// Check if this is a terminal remnant stage.
    #[must_use]
    pub fn is_remnant(&self) -> bool {
        matches!(
            self,
            StageKind::WhiteDwarf | StageKind::NeutronStar | StageKind::BlackHole
        )
    }

    /// Fraction of the stellar lifetime elapsed while in this stage.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self {
            StageKind::MainSequence => 0.5,
            StageKind::RedGiant => 0.95,
            StageKind::RedSupergiant => 0.98,
            StageKind::AdvancedBurning => 0.99,
            StageKind::Supernova
            | StageKind::WhiteDwarf
            | StageKind::NeutronStar
            | StageKind::BlackHole => 1.0,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stage of the timeline with its physical properties.
///
/// Times and durations are in years. The terminal remnant has an infinite
/// duration and end time; these serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[serde(rename = "name")]
    pub kind: StageKind,
    #[serde(with = "open_ended")]
    pub duration: f64,
    pub start_time: f64,
    #[serde(with = "open_ended")]
    pub end_time: f64,
    /// Effective temperature in kelvin.
    pub temperature: f64,
    /// Luminosity in solar luminosities (L☉).
    pub luminosity: f64,
    /// Radius in solar radii (R☉).
    pub radius: f64,
    pub fusion_process: String,
    /// Display color as a `#rrggbb` hex string.
    pub color: String,
    pub description: String,
}

impl Stage {
    /// Get the stage's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Check if this stage never ends.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.duration.is_infinite()
    }
}

// =============================================================================
// STELLAR PROPERTIES
// =============================================================================

/// The full result of a simulation. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarProperties {
    pub mass: SolarMass,
    pub metallicity: Metallicity,
    /// Main-sequence radius (R☉).
    pub radius: f64,
    /// Main-sequence luminosity (L☉).
    pub luminosity: f64,
    /// Main-sequence effective temperature (K).
    pub temperature: f64,
    /// Total lifetime before the remnant stage, in years.
    pub lifetime: f64,
    pub evolution_path: EvolutionPath,
    pub stages: Vec<Stage>,
}

impl StellarProperties {
    /// The input this timeline was computed from.
    #[must_use]
    pub fn input(&self) -> StellarInput {
        StellarInput {
            mass: self.mass,
            metallicity: self.metallicity,
        }
    }

    /// Find a stage by kind.
    #[must_use]
    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    /// Find a stage by display name, case-insensitively.
    #[must_use]
    pub fn stage_named(&self, name: &str) -> Option<&Stage> {
        StageKind::from_name(name).and_then(|kind| self.stage(kind))
    }

    /// The first stage (always the main sequence).
    #[must_use]
    pub fn main_sequence(&self) -> Option<&Stage> {
        self.stages.first()
    }

    /// The last stage (always the remnant).
    #[must_use]
    pub fn remnant(&self) -> Option<&Stage> {
        self.stages.last()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Starlife system.
///
/// - No silent failures
/// - Use `Result<T, StarlifeError>` for fallible operations
/// - The engine never panics; all errors are recoverable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StarlifeError {
    /// A mass or metallicity outside the domain of the scaling laws.
    #[error("Invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A reference catalog entry is malformed.
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// A configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
