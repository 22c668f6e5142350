//! # Evolution Composer
//!
//! Builds the ordered stage timeline for a star.
//!
//! ## Stage Sequence
//!
//! | Stage            | Present when   | Interval (years)              |
//! |------------------|----------------|-------------------------------|
//! | Main Sequence    | always         | [0, 0.9 t)                    |
//! | Red (Super)giant | M ≥ 0.5        | [0.9 t, 0.98 t)               |
//! | Advanced Burning | M ≥ 8          | [0.98 t, t)                   |
//! | Supernova        | M ≥ 8          | [t, t + 0.01)                 |
//! | Remnant          | always         | [t, ∞) or [t + 0.01, ∞)       |
//!
//! `t` is the metallicity-corrected lifetime. The mass thresholds are the
//! same ones [`MassClass`](crate::MassClass) uses, so the stages present
//! always agree with the evolution path's description.

use crate::color::color_for;
use crate::constants::{
    LOW_MASS_LIMIT, SECONDS_PER_YEAR, SUPERNOVA_DURATION_YEARS, SUPERNOVA_LIMIT,
};
use crate::properties::PropertyCalculator;
use crate::types::{
    FinalState, SolarMass, Stage, StageKind, StarlifeError, StellarInput, StellarProperties,
};
use serde::{Deserialize, Serialize};

/// Fraction of the lifetime spent on the main sequence.
const MAIN_SEQUENCE_FRACTION: f64 = 0.9;

/// Fraction of the lifetime spent as a giant or supergiant.
const GIANT_FRACTION: f64 = 0.08;

/// Fraction of the lifetime at which the giant phase ends.
const GIANT_END_FRACTION: f64 = 0.98;

/// Fraction of the lifetime spent in shell burning past helium.
const ADVANCED_FRACTION: f64 = 0.02;

// =============================================================================
// ENERGY OUTPUT
// =============================================================================

/// Radiated power and energy of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyOutput {
    /// Power in watts.
    pub power: f64,
    /// Energy radiated over the whole stage, in joules.
    pub total_energy: f64,
    /// Stage duration in years (infinite for remnants).
    pub duration: f64,
}

impl EnergyOutput {
    /// Energy output of a stage.
    ///
    /// A stage that emits nothing radiates zero energy, even forever.
    #[must_use]
    pub fn of(stage: &Stage, calculator: &PropertyCalculator) -> Self {
        let power = stage.luminosity * calculator.constants().solar_luminosity_w;
        let total_energy = if power == 0.0 {
            0.0
        } else {
            power * stage.duration * SECONDS_PER_YEAR
        };

        Self {
            power,
            total_energy,
            duration: stage.duration,
        }
    }
}

// =============================================================================
// DERIVED PROPERTIES
// =============================================================================

/// Secondary quantities for a star while it is in one stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedProperties {
    /// Age in years at this stage.
    pub age: f64,
    /// Wind mass loss in solar masses per year.
    pub mass_loss_rate: f64,
    /// Rotation period in days.
    pub rotation_period: f64,
    /// Surface magnetic field in tesla.
    pub magnetic_field: f64,
    /// Mean density in kg/m³.
    pub density: f64,
}

// =============================================================================
// EVOLUTION COMPOSER
// =============================================================================

/// Evolution Composer - pure function from input to stage timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvolutionComposer {
    calculator: PropertyCalculator,
}

impl EvolutionComposer {
    /// Create a composer with the standard calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer around a custom calculator.
    #[must_use]
    pub fn with_calculator(calculator: PropertyCalculator) -> Self {
        Self { calculator }
    }

    /// The calculator this composer uses.
    #[must_use]
    pub fn calculator(&self) -> &PropertyCalculator {
        &self.calculator
    }

    /// Compute the full properties and timeline for an input.
    #[must_use]
    pub fn compose(&self, input: StellarInput) -> StellarProperties {
        let calc = &self.calculator;
        let mass = input.mass;

        StellarProperties {
            mass,
            metallicity: input.metallicity,
            radius: calc.radius(mass),
            luminosity: calc.luminosity(mass),
            temperature: calc.temperature(mass),
            lifetime: calc.lifetime(mass, input.metallicity),
            evolution_path: calc.evolution_path(mass),
            stages: self.stages(input),
        }
    }

    /// Build the ordered stages for an input.
    ///
    /// Never empty: the main sequence and the remnant are always present.
    #[must_use]
    pub fn stages(&self, input: StellarInput) -> Vec<Stage> {
        let calc = &self.calculator;
        let mass = input.mass;
        let m = mass.value();

        let lifetime = calc.lifetime(mass, input.metallicity);
        let path = calc.evolution_path(mass);
        let base_luminosity = calc.luminosity(mass);
        let base_radius = calc.radius(mass);

        let main_sequence_end = lifetime * MAIN_SEQUENCE_FRACTION;
        let giant_end = lifetime * GIANT_END_FRACTION;
        let collapse_end = lifetime + SUPERNOVA_DURATION_YEARS;

        let mut stages = Vec::with_capacity(6);

        stages.push(stage(
            StageKind::MainSequence,
            Interval::new(0.0, main_sequence_end, main_sequence_end),
            calc.temperature(mass),
            base_luminosity,
            base_radius,
            "Hydrogen → Helium",
            "Core hydrogen fusion, stable burning",
        ));

        if m >= LOW_MASS_LIMIT {
            let supergiant = m >= SUPERNOVA_LIMIT;
            stages.push(stage(
                if supergiant {
                    StageKind::RedSupergiant
                } else {
                    StageKind::RedGiant
                },
                Interval::new(main_sequence_end, giant_end, lifetime * GIANT_FRACTION),
                if supergiant { 3500.0 } else { 3000.0 },
                base_luminosity * 100.0,
                base_radius * 50.0,
                "Helium → Carbon/Oxygen",
                "Shell hydrogen burning, core helium fusion",
            ));

            if supergiant {
                stages.push(stage(
                    StageKind::AdvancedBurning,
                    Interval::new(giant_end, lifetime, lifetime * ADVANCED_FRACTION),
                    5000.0,
                    base_luminosity * 1000.0,
                    base_radius * 100.0,
                    "Carbon → Oxygen → Silicon → Iron",
                    "Multiple shell burning, onion-like structure",
                ));
            }
        }

        if path.supernova {
            stages.push(stage(
                StageKind::Supernova,
                Interval::new(lifetime, collapse_end, SUPERNOVA_DURATION_YEARS),
                1e9,
                base_luminosity * 1e9,
                0.001,
                "Core collapse",
                "Core collapse, explosive nucleosynthesis",
            ));
        }

        let remnant_start = if path.supernova {
            collapse_end
        } else {
            lifetime
        };
        stages.push(self.remnant_stage(path.final_state, mass, remnant_start));

        stages
    }

    fn remnant_stage(&self, state: FinalState, mass: SolarMass, start: f64) -> Stage {
        let (temperature, luminosity, radius, description) = match state {
            FinalState::WhiteDwarf => (
                10_000.0,
                0.01,
                0.01,
                "Degenerate electron core, slowly cooling over billions of years".to_string(),
            ),
            FinalState::NeutronStar => (
                1e6,
                0.001,
                0.0001,
                "Degenerate neutron core, extremely dense, may be a pulsar".to_string(),
            ),
            FinalState::BlackHole => (
                0.0,
                0.0,
                0.00001,
                format!(
                    "Gravitational singularity, event horizon at {:.2} km",
                    self.calculator.schwarzschild_radius_km(mass)
                ),
            ),
        };

        let kind = state.stage_kind();
        Stage {
            kind,
            duration: f64::INFINITY,
            start_time: start,
            end_time: f64::INFINITY,
            temperature,
            luminosity,
            radius,
            fusion_process: "None".to_string(),
            color: color_for(kind, temperature).to_string(),
            description,
        }
    }

    /// Age of a star in years while it is in the given stage.
    #[must_use]
    pub fn stellar_age(&self, input: StellarInput, kind: StageKind) -> f64 {
        self.calculator.lifetime(input.mass, input.metallicity) * kind.progress()
    }

    /// Derived quantities for one stage of a computed star.
    #[must_use]
    pub fn derived_properties(&self, star: &StellarProperties, stage: &Stage) -> DerivedProperties {
        let calc = &self.calculator;
        let age = self.stellar_age(star.input(), stage.kind);
        let rotation_period = calc.rotation_period(star.mass, age);

        DerivedProperties {
            age,
            mass_loss_rate: calc.mass_loss_rate(star.mass, stage.luminosity, stage.radius),
            rotation_period,
            magnetic_field: calc.magnetic_field(star.mass, rotation_period),
            density: calc.density(star.mass, stage.radius),
        }
    }

    /// Energy output of one stage.
    #[must_use]
    pub fn energy_output(&self, stage: &Stage) -> EnergyOutput {
        EnergyOutput::of(stage, &self.calculator)
    }
}

/// Placement of a stage on the timeline, in years.
#[derive(Debug, Clone, Copy)]
struct Interval {
    start: f64,
    end: f64,
    duration: f64,
}

impl Interval {
    /// A stage spanning `[start, end)` that lasts `duration`.
    ///
    /// Boundaries are taken as given so that consecutive stages share the
    /// exact same float at their seam.
    fn new(start: f64, end: f64, duration: f64) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }
}

fn stage(
    kind: StageKind,
    interval: Interval,
    temperature: f64,
    luminosity: f64,
    radius: f64,
    fusion_process: &str,
    description: &str,
) -> Stage {
    Stage {
        kind,
        duration: interval.duration,
        start_time: interval.start,
        end_time: interval.end,
        temperature,
        luminosity,
        radius,
        fusion_process: fusion_process.to_string(),
        color: color_for(kind, temperature).to_string(),
        description: description.to_string(),
    }
}

/// Compute the full timeline for raw mass and metallicity values.
///
/// This is the single construction path for [`StellarProperties`]. Returns
/// `StarlifeError::InvalidInput` when either value is not a finite positive
/// number.
pub fn compute_stellar_properties(
    mass: f64,
    metallicity: f64,
) -> Result<StellarProperties, StarlifeError> {
    let input = StellarInput::new(mass, metallicity)?;
    Ok(EvolutionComposer::new().compose(input))
}

// =============================================================================
// TESTS
// =============================================================================
