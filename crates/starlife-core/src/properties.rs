//! # Property Calculator
//!
//! Closed-form scaling laws mapping mass (and metallicity) to the physical
//! properties of a main-sequence star, plus a few derived quantities.
//!
//! | Quantity    | Law                                   |
//! |-------------|---------------------------------------|
//! | Radius      | R = M^p, p ∈ {0.8, 0.8, 0.6, 0.5}     |
//! | Luminosity  | L = M^q, q ∈ {2.3, 4, 3.5, 3}         |
//! | Temperature | T = (L / 4πσR²)^¼ in SI units         |
//! | Lifetime    | t = 10¹⁰ M^-2.5 (Z / 0.02)^0.1 years  |
//!
//! All functions are pure. They take validated [`SolarMass`] and
//! [`Metallicity`] values, so they never see a non-positive argument.

use crate::constants::{
    BASE_MAGNETIC_FIELD_T, BLACK_HOLE_LIMIT, FULLY_CONVECTIVE_LIMIT, GRAVITATIONAL_CONSTANT,
    LOW_MASS_LIMIT, REIMERS_COEFFICIENT, SOLAR_AGE_YEARS, SOLAR_LIFETIME_YEARS,
    SOLAR_LUMINOSITY_W, SOLAR_MASS_KG, SOLAR_RADIUS_M, SOLAR_ROTATION_DAYS, SOLAR_TYPE_LIMIT,
    SPEED_OF_LIGHT, STEFAN_BOLTZMANN, SUPERNOVA_LIMIT,
};
use crate::types::{EvolutionPath, MassClass, Metallicity, SolarMass};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// =============================================================================
// POWER-LAW BANDS
// =============================================================================

/// One mass band of a piecewise power law: `value = mass^exponent` for
/// masses below `upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawBand {
    pub upper: f64,
    pub exponent: f64,
}

impl PowerLawBand {
    const fn new(upper: f64, exponent: f64) -> Self {
        Self { upper, exponent }
    }
}

/// Mass-radius relation. The two bands below 2 M☉ share an exponent but are
/// kept separate so either can be tuned on its own.
pub const RADIUS_BANDS: [PowerLawBand; 4] = [
    PowerLawBand::new(LOW_MASS_LIMIT, 0.8),
    PowerLawBand::new(SOLAR_TYPE_LIMIT, 0.8),
    PowerLawBand::new(BLACK_HOLE_LIMIT, 0.6),
    PowerLawBand::new(f64::INFINITY, 0.5),
];

/// Mass-luminosity relation.
pub const LUMINOSITY_BANDS: [PowerLawBand; 4] = [
    PowerLawBand::new(FULLY_CONVECTIVE_LIMIT, 2.3),
    PowerLawBand::new(SOLAR_TYPE_LIMIT, 4.0),
    PowerLawBand::new(BLACK_HOLE_LIMIT, 3.5),
    PowerLawBand::new(f64::INFINITY, 3.0),
];

/// Exponent of the band containing `mass`. The last band must be unbounded.
fn band_exponent(bands: &[PowerLawBand], mass: f64) -> f64 {
    bands
        .iter()
        .find(|band| mass < band.upper)
        .or(bands.last())
        .map_or(1.0, |band| band.exponent)
}

/// Evaluate a piecewise power law.
fn piecewise_power(bands: &[PowerLawBand], mass: f64) -> f64 {
    mass.powf(band_exponent(bands, mass))
}

// =============================================================================
// PHYSICAL CONSTANTS
// =============================================================================

/// The physical constants the calculator converts solar units with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    pub solar_mass_kg: f64,
    pub solar_radius_m: f64,
    pub solar_luminosity_w: f64,
    pub gravitational_constant: f64,
    pub speed_of_light: f64,
    pub stefan_boltzmann: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            solar_mass_kg: SOLAR_MASS_KG,
            solar_radius_m: SOLAR_RADIUS_M,
            solar_luminosity_w: SOLAR_LUMINOSITY_W,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            speed_of_light: SPEED_OF_LIGHT,
            stefan_boltzmann: STEFAN_BOLTZMANN,
        }
    }
}

// =============================================================================
// ELEMENT PRODUCTION
// =============================================================================

/// Illustrative mass fractions of the elements a star returns to space.
///
/// Fractions are not renormalized and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementAbundances {
    pub hydrogen: f64,
    pub helium: f64,
    pub carbon: f64,
    pub oxygen: f64,
    pub nitrogen: f64,
    pub iron: f64,
    pub other: f64,
}

impl ElementAbundances {
    /// Solar baseline before mass and metallicity adjustments.
    pub const BASELINE: ElementAbundances = ElementAbundances {
        hydrogen: 0.70,
        helium: 0.28,
        carbon: 0.01,
        oxygen: 0.005,
        nitrogen: 0.001,
        iron: 0.001,
        other: 0.003,
    };

    /// Named fractions in a fixed order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("hydrogen", self.hydrogen),
            ("helium", self.helium),
            ("carbon", self.carbon),
            ("oxygen", self.oxygen),
            ("nitrogen", self.nitrogen),
            ("iron", self.iron),
            ("other", self.other),
        ]
    }

    /// Scale every metal (all but hydrogen and helium) by `factor`.
    fn scale_metals(mut self, factor: f64) -> Self {
        self.carbon *= factor;
        self.oxygen *= factor;
        self.nitrogen *= factor;
        self.iron *= factor;
        self.other *= factor;
        self
    }
}

// =============================================================================
// PROPERTY CALCULATOR
// =============================================================================

/// Property Calculator - pure scaling laws over validated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropertyCalculator {
    constants: PhysicalConstants,
}

impl PropertyCalculator {
    /// Create a calculator with the standard constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom constants.
    #[must_use]
    pub fn with_constants(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    /// The constants in use.
    #[must_use]
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Main-sequence radius in solar radii.
    #[must_use]
    pub fn radius(&self, mass: SolarMass) -> f64 {
        piecewise_power(&RADIUS_BANDS, mass.value())
    }

    /// Main-sequence luminosity in solar luminosities.
    #[must_use]
    pub fn luminosity(&self, mass: SolarMass) -> f64 {
        piecewise_power(&LUMINOSITY_BANDS, mass.value())
    }

    /// Effective temperature in kelvin, from the Stefan–Boltzmann law.
    ///
    /// The SI factor for one solar luminosity and radius is taken out, and
    /// `L / R²` is evaluated as a single power of mass. Stays finite and
    /// positive for every finite positive mass.
    #[must_use]
    pub fn temperature(&self, mass: SolarMass) -> f64 {
        let c = &self.constants;
        let unit = (c.solar_luminosity_w
            / (4.0 * PI * c.stefan_boltzmann * c.solar_radius_m.powi(2)))
        .powf(0.25);

        let m = mass.value();
        let exponent = (band_exponent(&LUMINOSITY_BANDS, m)
            - 2.0 * band_exponent(&RADIUS_BANDS, m))
            / 4.0;
        unit * m.powf(exponent)
    }

    /// Lifetime in years, corrected for metallicity.
    #[must_use]
    pub fn lifetime(&self, mass: SolarMass, metallicity: Metallicity) -> f64 {
        let main_sequence = mass.value().powf(-2.5) * SOLAR_LIFETIME_YEARS;
        main_sequence * metallicity.relative_to_solar().powf(0.1)
    }

    /// Classify the terminal fate of a star.
    #[must_use]
    pub fn evolution_path(&self, mass: SolarMass) -> EvolutionPath {
        EvolutionPath::for_class(MassClass::of(mass))
    }

    /// Reimers wind mass-loss rate in solar masses per year. Never negative.
    ///
    /// `luminosity` and `radius` are in solar units.
    #[must_use]
    pub fn mass_loss_rate(&self, mass: SolarMass, luminosity: f64, radius: f64) -> f64 {
        (REIMERS_COEFFICIENT * luminosity * radius / mass.value()).max(0.0)
    }

    /// Rotation period in days for a star of the given age in years.
    ///
    /// Negative ages are treated as zero.
    #[must_use]
    pub fn rotation_period(&self, mass: SolarMass, age: f64) -> f64 {
        let mass_factor = mass.value().powf(-0.5);
        let age_factor = (age.max(0.0) / SOLAR_AGE_YEARS).powf(0.5);
        SOLAR_ROTATION_DAYS * mass_factor * age_factor
    }

    /// Surface magnetic field in tesla for a rotation period in days.
    ///
    /// A zero period (a newborn star) gives an infinite field.
    #[must_use]
    pub fn magnetic_field(&self, mass: SolarMass, rotation_period: f64) -> f64 {
        let rotation_factor = (SOLAR_ROTATION_DAYS / rotation_period).powf(0.5);
        BASE_MAGNETIC_FIELD_T * mass.value().powf(0.5) * rotation_factor
    }

    /// Mean density in kg/m³ for a radius in solar radii.
    #[must_use]
    pub fn density(&self, mass: SolarMass, radius: f64) -> f64 {
        let c = &self.constants;
        let volume = 4.0 / 3.0 * PI * (radius * c.solar_radius_m).powi(3);
        mass.value() * c.solar_mass_kg / volume
    }

    /// Schwarzschild radius (2GM/c²) in kilometers.
    #[must_use]
    pub fn schwarzschild_radius_km(&self, mass: SolarMass) -> f64 {
        let c = &self.constants;
        2.0 * c.gravitational_constant * mass.value() * c.solar_mass_kg
            / (c.speed_of_light * c.speed_of_light)
            / 1000.0
    }

    /// Element mass fractions returned to space.
    ///
    /// Stars above 8 M☉ add carbon, oxygen and iron; above 20 M☉ they add
    /// more iron and heavier elements. Metals then scale with Z / 0.02.
    #[must_use]
    pub fn element_production(&self, mass: SolarMass, metallicity: Metallicity) -> ElementAbundances {
        let mut elements = ElementAbundances::BASELINE;
        let m = mass.value();

        if m > SUPERNOVA_LIMIT {
            elements.carbon += 0.02;
            elements.oxygen += 0.02;
            elements.iron += 0.01;
        }

        if m > BLACK_HOLE_LIMIT {
            elements.iron += 0.05;
            elements.other += 0.02;
        }

        elements.scale_metals(metallicity.relative_to_solar())
    }
}

/// Human-friendly label for a star of the given mass.
#[must_use]
pub fn star_class_label(mass: SolarMass) -> &'static str {
    let m = mass.value();
    if m < LOW_MASS_LIMIT {
        "Red Dwarf"
    } else if m < 1.5 {
        "Solar-type Star"
    } else if m < SUPERNOVA_LIMIT {
        "Intermediate Mass Star"
    } else if m < BLACK_HOLE_LIMIT {
        "High Mass Star"
    } else {
        "Very High Mass Star"
    }
}

// =============================================================================
// TESTS
// =============================================================================
