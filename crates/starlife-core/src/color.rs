//! # Display Colors
//!
//! Hex colors attached to each stage for front ends to render.
//! These are display hints only and take no part in any calculation.

use crate::types::{FinalState, StageKind};

/// Temperature floors (exclusive) and the color used above each, hottest first.
const TEMPERATURE_COLORS: [(f64, &str); 7] = [
    (30_000.0, "#9bb0ff"),
    (10_000.0, "#aabfff"),
    (7_500.0, "#cad7ff"),
    (6_000.0, "#f8f7ff"),
    (5_000.0, "#fff4ea"),
    (3_700.0, "#ffd700"),
    (3_000.0, "#ff6b6b"),
];

/// Color of anything at or below 3000 K.
const COOLEST_COLOR: &str = "#ff4500";

/// Map an effective temperature to a star color, blue-white to red.
#[must_use]
pub fn star_color(temperature: f64) -> &'static str {
    TEMPERATURE_COLORS
        .iter()
        .find(|(floor, _)| temperature > *floor)
        .map_or(COOLEST_COLOR, |(_, color)| *color)
}

/// Fixed color of a remnant.
#[must_use]
pub fn remnant_color(state: FinalState) -> &'static str {
    match state {
        FinalState::WhiteDwarf => "#ffffff",
        FinalState::NeutronStar => "#ff6b6b",
        FinalState::BlackHole => "#000000",
    }
}

/// Fixed color of a non-main-sequence stage, if it has one.
///
/// The main sequence is colored by temperature instead.
#[must_use]
pub fn stage_color(kind: StageKind) -> Option<&'static str> {
    match kind {
        StageKind::MainSequence => None,
        StageKind::RedGiant | StageKind::RedSupergiant => Some(COOLEST_COLOR),
        StageKind::AdvancedBurning => Some("#ff6b6b"),
        StageKind::Supernova => Some("#ffffff"),
        StageKind::WhiteDwarf => Some(remnant_color(FinalState::WhiteDwarf)),
        StageKind::NeutronStar => Some(remnant_color(FinalState::NeutronStar)),
        StageKind::BlackHole => Some(remnant_color(FinalState::BlackHole)),
    }
}

/// Color of a stage at the given temperature.
#[must_use]
pub fn color_for(kind: StageKind, temperature: f64) -> &'static str {
    stage_color(kind).unwrap_or_else(|| star_color(temperature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_is_yellow_white() {
        assert_eq!(star_color(5778.0), "#fff4ea");
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(star_color(30_000.0), "#aabfff");
        assert_eq!(star_color(30_000.1), "#9bb0ff");
        assert_eq!(star_color(3_000.0), "#ff4500");
    }

    #[test]
    fn cold_and_zero_are_red() {
        assert_eq!(star_color(0.0), "#ff4500");
        assert_eq!(star_color(2_400.0), "#ff4500");
    }

    #[test]
    fn remnant_stage_colors_match_remnant_table() {
        assert_eq!(stage_color(StageKind::BlackHole), Some("#000000"));
        assert_eq!(stage_color(StageKind::MainSequence), None);
    }

    #[test]
    fn main_sequence_color_follows_temperature() {
        assert_eq!(color_for(StageKind::MainSequence, 9_940.0), "#cad7ff");
        assert_eq!(color_for(StageKind::RedGiant, 9_940.0), "#ff4500");
    }
}
