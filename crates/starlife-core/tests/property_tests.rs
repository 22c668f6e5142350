//! # Property-Based Tests
//!
//! Timeline and ranking invariants checked with proptest over the whole
//! input domain.

use proptest::prelude::*;
use starlife_core::constants::{MAX_SIMILAR_STARS, SUPERNOVA_LIMIT};
use starlife_core::properties::{LUMINOSITY_BANDS, PowerLawBand, RADIUS_BANDS};
use starlife_core::{
    Metallicity, PropertyCalculator, SolarMass, StageKind, compute_stellar_properties,
    rank_similar_stars,
};

fn mass() -> impl Strategy<Value = f64> {
    0.05f64..150.0
}

fn metallicity() -> impl Strategy<Value = f64> {
    0.0001f64..0.1
}

/// Pick a band, then two masses inside it.
fn same_band_pair(bands: &'static [PowerLawBand]) -> impl Strategy<Value = (f64, f64)> {
    (0..bands.len()).prop_flat_map(move |i| {
        let lower = if i == 0 { 0.01 } else { bands[i - 1].upper };
        let upper = bands[i].upper.min(200.0);
        (lower..upper, lower..upper)
    })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Same input produces identical output.
    #[test]
    fn determinism(m in mass(), z in metallicity()) {
        let a = compute_stellar_properties(m, z).expect("valid");
        let b = compute_stellar_properties(m, z).expect("valid");
        prop_assert_eq!(a, b);
    }

    /// The timeline starts on the main sequence and ends in a remnant.
    #[test]
    fn timeline_shape(m in mass(), z in metallicity()) {
        let star = compute_stellar_properties(m, z).expect("valid");
        prop_assert!(!star.stages.is_empty());
        prop_assert_eq!(star.stages[0].kind, StageKind::MainSequence);

        let last = star.stages.last().expect("remnant");
        prop_assert!(last.kind.is_remnant());
        prop_assert!(last.duration.is_infinite());
        prop_assert!(last.end_time.is_infinite());
        prop_assert_eq!(last.kind, star.evolution_path.final_state.stage_kind());

        // Only the remnant is open-ended
        let open = star.stages.iter().filter(|s| s.is_open_ended()).count();
        prop_assert_eq!(open, 1);
    }

    /// Fusion stages are contiguous and no stage starts before the previous ends.
    #[test]
    fn stage_boundaries(m in mass(), z in metallicity()) {
        let star = compute_stellar_properties(m, z).expect("valid");
        let n = star.stages.len();

        for (i, pair) in star.stages.windows(2).enumerate() {
            prop_assert!(pair[1].start_time >= pair[0].start_time);
            prop_assert!(pair[1].start_time >= pair[0].end_time);
            if i + 2 < n {
                prop_assert_eq!(pair[1].start_time, pair[0].end_time);
            }
        }
    }

    /// A supernova occurs exactly when the mass reaches the threshold.
    #[test]
    fn supernova_iff_massive(m in mass()) {
        let star = compute_stellar_properties(m, 0.02).expect("valid");
        let has_supernova = star.stage(StageKind::Supernova).is_some();
        prop_assert_eq!(has_supernova, m >= SUPERNOVA_LIMIT);
        prop_assert_eq!(star.evolution_path.supernova, has_supernova);
        prop_assert_eq!(star.stage(StageKind::AdvancedBurning).is_some(), has_supernova);
    }

    /// The main sequence lasts 90% of the lifetime.
    #[test]
    fn main_sequence_fraction(m in mass(), z in metallicity()) {
        let star = compute_stellar_properties(m, z).expect("valid");
        let ms = star.main_sequence().expect("main sequence");
        prop_assert_eq!(ms.start_time, 0.0);
        prop_assert_eq!(ms.duration, star.lifetime * 0.9);
        prop_assert_eq!(ms.temperature, star.temperature);
    }

    /// Heavier stars burn out sooner; metal-rich stars live longer.
    #[test]
    fn lifetime_ordering(a in mass(), b in mass(), z in metallicity()) {
        let calc = PropertyCalculator::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = SolarMass::new(lo).expect("mass");
        let hi = SolarMass::new(hi).expect("mass");
        let zm = Metallicity::new(z).expect("z");
        prop_assert!(calc.lifetime(lo, zm) >= calc.lifetime(hi, zm));

        let richer = Metallicity::new(z * 2.0).expect("z");
        prop_assert!(calc.lifetime(lo, richer) > calc.lifetime(lo, zm));
    }

    /// Radius grows with mass inside each band.
    #[test]
    fn radius_monotonic_within_band((a, b) in same_band_pair(&RADIUS_BANDS)) {
        let calc = PropertyCalculator::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let r_lo = calc.radius(SolarMass::new(lo).expect("mass"));
        let r_hi = calc.radius(SolarMass::new(hi).expect("mass"));
        prop_assert!(r_lo <= r_hi);
    }

    /// Luminosity grows with mass inside each band.
    #[test]
    fn luminosity_monotonic_within_band((a, b) in same_band_pair(&LUMINOSITY_BANDS)) {
        let calc = PropertyCalculator::new();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let l_lo = calc.luminosity(SolarMass::new(lo).expect("mass"));
        let l_hi = calc.luminosity(SolarMass::new(hi).expect("mass"));
        prop_assert!(l_lo <= l_hi);
    }

    /// Ranking is capped, thresholded and ordered best first.
    #[test]
    fn ranking_bounds(m in mass(), t in 100.0f64..100_000.0, l in 1e-5f64..1e7) {
        let result = rank_similar_stars(m, t, l);
        prop_assert!(result.len() <= MAX_SIMILAR_STARS);
        for star in &result {
            prop_assert!(star.similarity_percent > 60.0);
            prop_assert!(star.similarity_percent <= 100.0);
        }
        for pair in result.windows(2) {
            prop_assert!(pair[0].similarity_percent >= pair[1].similarity_percent);
        }
    }

    /// Non-positive masses never produce a timeline.
    #[test]
    fn non_positive_mass_rejected(m in -100.0f64..=0.0) {
        prop_assert!(compute_stellar_properties(m, 0.02).is_err());
    }
}
