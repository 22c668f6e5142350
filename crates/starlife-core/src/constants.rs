//! # Constants
//!
//! Physical constants and model thresholds for the Starlife engine.
//!
//! Every number the scaling laws depend on lives here and is compiled into
//! the binary. Changing a threshold changes both the evolution path and the
//! stage timeline, since both read from this module.

// =============================================================================
// PHYSICAL CONSTANTS (SI)
// =============================================================================

/// Solar mass in kilograms.
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Solar radius in meters.
pub const SOLAR_RADIUS_M: f64 = 6.96e8;

/// Solar luminosity in watts.
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Solar effective temperature in kelvin.
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Gravitational constant (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Speed of light (m/s).
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Seconds in a 365.25-day year.
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

// =============================================================================
// MASS THRESHOLDS (solar masses)
// =============================================================================

/// Below this mass luminosity follows the fully-convective M^2.3 law.
pub const FULLY_CONVECTIVE_LIMIT: f64 = 0.43;

/// Below this mass a star never becomes a giant (LowMass path).
pub const LOW_MASS_LIMIT: f64 = 0.5;

/// Upper edge of the solar-type band for radius and luminosity.
pub const SOLAR_TYPE_LIMIT: f64 = 2.0;

/// At or above this mass a star ends in a core-collapse supernova.
pub const SUPERNOVA_LIMIT: f64 = 8.0;

/// At or above this mass the remnant is a black hole.
pub const BLACK_HOLE_LIMIT: f64 = 20.0;

// =============================================================================
// MODEL PARAMETERS
// =============================================================================

/// Reference metallicity (solar). Lifetime correction factor is 1 here.
pub const REFERENCE_METALLICITY: f64 = 0.02;

/// Main-sequence lifetime of a one-solar-mass star, in years.
pub const SOLAR_LIFETIME_YEARS: f64 = 1e10;

/// Age of the Sun in years, used to scale rotation periods.
pub const SOLAR_AGE_YEARS: f64 = 4.6e9;

/// Solar rotation period in days.
pub const SOLAR_ROTATION_DAYS: f64 = 25.0;

/// Baseline surface magnetic field in tesla.
pub const BASE_MAGNETIC_FIELD_T: f64 = 1e-4;

/// Reimers mass-loss coefficient (solar masses per year).
pub const REIMERS_COEFFICIENT: f64 = 4e-13;

/// Duration of the supernova stage in years.
///
/// This is also the gap between the end of the progenitor's lifetime and
/// the start of its remnant stage.
pub const SUPERNOVA_DURATION_YEARS: f64 = 0.01;

// =============================================================================
// RANKING LIMITS
// =============================================================================

/// Minimum similarity (exclusive, 0..1) for a catalog entry to be reported.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Maximum number of similar stars returned by a ranking.
pub const MAX_SIMILAR_STARS: usize = 4;

// =============================================================================
// PRESENTATION HINTS
// =============================================================================

/// Smallest mass offered by interactive front ends.
///
/// The engine itself accepts any positive finite mass.
pub const MIN_INTERACTIVE_MASS: f64 = 0.1;

/// Largest mass offered by interactive front ends.
pub const MAX_INTERACTIVE_MASS: f64 = 100.0;
