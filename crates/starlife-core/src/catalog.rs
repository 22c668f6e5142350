//! # Reference Catalog
//!
//! Real stars the simulator compares against. The built-in catalog is
//! compiled-in constant data; a [`Catalog`] can also be built from entries
//! loaded elsewhere, after validation.
//!
//! Catalog order matters: it breaks ties when ranking by similarity.

use crate::types::StarlifeError;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A real star with observed properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceStar {
    pub name: String,
    /// Mass in solar masses.
    pub mass: f64,
    pub metallicity: f64,
    /// Effective temperature in kelvin.
    pub temperature: f64,
    /// Luminosity in solar luminosities.
    pub luminosity: f64,
    /// Radius in solar radii.
    pub radius: f64,
    /// Age in years.
    pub age: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl ReferenceStar {
    /// Check that the entry can take part in a similarity ranking.
    ///
    /// Mass, temperature and luminosity feed ratios and logarithms, so they
    /// must be finite and positive.
    pub fn validate(&self) -> Result<(), StarlifeError> {
        if self.name.trim().is_empty() {
            return Err(StarlifeError::Catalog("star with empty name".to_string()));
        }

        let fields = [
            ("mass", self.mass),
            ("metallicity", self.metallicity),
            ("temperature", self.temperature),
            ("luminosity", self.luminosity),
            ("radius", self.radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(StarlifeError::Catalog(format!(
                    "{}: {} must be a positive number, got {}",
                    self.name, field, value
                )));
            }
        }

        if !self.age.is_finite() || self.age < 0.0 {
            return Err(StarlifeError::Catalog(format!(
                "{}: age must be a non-negative number, got {}",
                self.name, self.age
            )));
        }

        Ok(())
    }
}

/// An ordered, validated, read-only set of reference stars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    stars: Vec<ReferenceStar>,
}

impl Catalog {
    /// Build a catalog from entries, validating each and rejecting duplicates.
    pub fn new(stars: Vec<ReferenceStar>) -> Result<Self, StarlifeError> {
        for (i, star) in stars.iter().enumerate() {
            star.validate()?;
            if stars[..i].iter().any(|other| other.name == star.name) {
                return Err(StarlifeError::Catalog(format!(
                    "duplicate star name: {}",
                    star.name
                )));
            }
        }
        Ok(Self { stars })
    }

    /// The compiled-in catalog, shared process-wide.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog {
            stars: builtin_stars(),
        })
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn stars(&self) -> &[ReferenceStar] {
        &self.stars
    }

    /// Find an entry by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ReferenceStar> {
        self.stars.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    mass: f64,
    temperature: f64,
    luminosity: f64,
    radius: f64,
    age: f64,
    kind: &str,
    description: &str,
) -> ReferenceStar {
    ReferenceStar {
        name: name.to_string(),
        mass,
        metallicity: 0.02,
        temperature,
        luminosity,
        radius,
        age,
        kind: kind.to_string(),
        description: description.to_string(),
    }
}

fn builtin_stars() -> Vec<ReferenceStar> {
    vec![
        entry(
            "Sun",
            1.0,
            5778.0,
            1.0,
            1.0,
            4.6e9,
            "G-type main sequence",
            "Our home star, middle-aged and stable",
        ),
        entry(
            "Proxima Centauri",
            0.12,
            3042.0,
            0.0017,
            0.14,
            4.8e9,
            "M-type red dwarf",
            "Nearest star to Earth, will live trillions of years",
        ),
        entry(
            "Betelgeuse",
            20.0,
            3600.0,
            120_000.0,
            1000.0,
            8e6,
            "M-type red supergiant",
            "Massive star near the end of its life, future supernova",
        ),
        entry(
            "Sirius A",
            2.1,
            9940.0,
            25.0,
            1.7,
            2.3e8,
            "A-type main sequence",
            "Brightest star in Earth's night sky",
        ),
        entry(
            "Vega",
            2.1,
            9602.0,
            40.0,
            2.4,
            4.5e8,
            "A-type main sequence",
            "Former pole star, rapidly rotating",
        ),
        entry(
            "Rigel",
            23.0,
            12_100.0,
            120_000.0,
            78.0,
            8e6,
            "B-type blue supergiant",
            "One of the most luminous stars known",
        ),
        entry(
            "Antares",
            15.0,
            3600.0,
            10_000.0,
            800.0,
            1.2e7,
            "M-type red supergiant",
            "Heart of Scorpius, massive and unstable",
        ),
        entry(
            "Capella",
            2.5,
            4940.0,
            78.0,
            12.0,
            6.2e8,
            "G-type giant",
            "Binary star system, evolved off main sequence",
        ),
    ]
}
