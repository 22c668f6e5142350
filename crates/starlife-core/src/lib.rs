//! # starlife-core
//!
//! The deterministic stellar-evolution engine for Starlife - THE LOGIC.
//!
//! Given a mass (in solar masses) and a metallicity, this crate computes a
//! star's main-sequence properties, its terminal fate, and an ordered
//! timeline of evolutionary stages ending in a remnant. A simulated star can
//! also be ranked against a small catalog of real reference stars.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no I/O, no logging
//! - Deterministic: identical inputs give identical outputs
//! - Stateless: every call returns owned data; nothing is cached but the
//!   compiled-in catalog
//!
//! ## Example
//!
//! ```
//! use starlife_core::{StageKind, compute_stellar_properties, rank_similar_stars};
//!
//! let sun = compute_stellar_properties(1.0, 0.02)?;
//! assert_eq!(sun.stages[0].kind, StageKind::MainSequence);
//! assert_eq!(sun.remnant().map(|s| s.kind), Some(StageKind::WhiteDwarf));
//!
//! let similar = rank_similar_stars(1.0, 5778.0, 1.0);
//! assert_eq!(similar[0].name, "Sun");
//! # Ok::<(), starlife_core::StarlifeError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod color;
pub mod constants;
pub mod evolution;
pub mod properties;
pub mod similarity;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    EvolutionPath, FinalState, MassClass, Metallicity, SolarMass, Stage, StageKind,
    StarlifeError, StellarInput, StellarProperties,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use evolution::{DerivedProperties, EnergyOutput, EvolutionComposer, compute_stellar_properties};
pub use properties::{ElementAbundances, PhysicalConstants, PropertyCalculator, star_class_label};

// =============================================================================
// RE-EXPORTS: Reference Catalog
// =============================================================================

pub use catalog::{Catalog, ReferenceStar};
pub use similarity::{SimilarStar, SimilarityRanker, rank_similar_stars};
