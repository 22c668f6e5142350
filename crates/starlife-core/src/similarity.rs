//! # Similarity Ranking
//!
//! Finds the reference stars that most resemble a simulated star.
//!
//! The score averages three normalized distances:
//! - relative mass difference, `|m - m_ref| / max(m, m_ref)`
//! - temperature difference in decades, `|log10 T - log10 T_ref|`
//! - luminosity difference in decades, `|log10 L - log10 L_ref|`
//!
//! `similarity = 1 - mean(distances)`. Only entries scoring above
//! [`SIMILARITY_THRESHOLD`] are kept, best first, at most
//! [`MAX_SIMILAR_STARS`] of them. Equal scores keep catalog order.

use crate::catalog::{Catalog, ReferenceStar};
use crate::constants::{MAX_SIMILAR_STARS, SIMILARITY_THRESHOLD};
use crate::types::{Stage, StellarProperties};
use serde::{Deserialize, Serialize};

/// A reference star that resembles the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarStar {
    pub name: String,
    /// Similarity score in percent, in (60, 100].
    pub similarity_percent: f64,
    pub star: ReferenceStar,
}

/// Ranks candidates against a reference catalog.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker<'a> {
    catalog: &'a Catalog,
}

impl Default for SimilarityRanker<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'a> SimilarityRanker<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Rank catalog entries by similarity to a candidate.
    ///
    /// A candidate with a non-positive or non-finite mass, temperature or
    /// luminosity (a black hole, for instance) has no comparable reference
    /// and yields an empty list.
    #[must_use]
    pub fn rank(&self, mass: f64, temperature: f64, luminosity: f64) -> Vec<SimilarStar> {
        if !is_comparable(mass, temperature, luminosity) {
            return Vec::new();
        }

        let mut matches: Vec<(f64, &ReferenceStar)> = self
            .catalog
            .stars()
            .iter()
            .filter_map(|star| {
                let score = similarity(mass, temperature, luminosity, star)?;
                (score > SIMILARITY_THRESHOLD).then_some((score, star))
            })
            .collect();

        // sort_by is stable, so ties stay in catalog order
        matches.sort_by(|a, b| b.0.total_cmp(&a.0));
        matches.truncate(MAX_SIMILAR_STARS);

        matches
            .into_iter()
            .map(|(score, star)| SimilarStar {
                name: star.name.clone(),
                similarity_percent: score * 100.0,
                star: star.clone(),
            })
            .collect()
    }

    /// Rank a simulated star as it appears during one of its stages.
    ///
    /// The mass is the initial mass; temperature and luminosity are the
    /// stage's own.
    #[must_use]
    pub fn rank_stage(&self, star: &StellarProperties, stage: &Stage) -> Vec<SimilarStar> {
        self.rank(star.mass.value(), stage.temperature, stage.luminosity)
    }
}

/// Similarity score of a candidate to one reference entry, as a fraction.
///
/// Returns `None` when either side has a value the metric cannot handle.
#[must_use]
pub fn similarity(
    mass: f64,
    temperature: f64,
    luminosity: f64,
    reference: &ReferenceStar,
) -> Option<f64> {
    if !is_comparable(mass, temperature, luminosity)
        || !is_comparable(reference.mass, reference.temperature, reference.luminosity)
    {
        return None;
    }

    let mass_diff = (mass - reference.mass).abs() / mass.max(reference.mass);
    let temp_diff = (temperature.log10() - reference.temperature.log10()).abs();
    let lum_diff = (luminosity.log10() - reference.luminosity.log10()).abs();

    Some(1.0 - (mass_diff + temp_diff + lum_diff) / 3.0)
}

fn is_comparable(mass: f64, temperature: f64, luminosity: f64) -> bool {
    [mass, temperature, luminosity]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
}

/// Rank against the built-in catalog.
#[must_use]
pub fn rank_similar_stars(mass: f64, temperature: f64, luminosity: f64) -> Vec<SimilarStar> {
    SimilarityRanker::default().rank(mass, temperature, luminosity)
}
