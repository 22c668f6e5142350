//! # Stage Playback
//!
//! Presentation-side cursor over a computed timeline. The engine returns an
//! immutable stage list; which stage is on screen lives here.
//!
//! ```text
//! Idle ──start──▶ Showing(0) ──advance──▶ … ──advance──▶ Complete(last)
//!   ▲                  │                                       │
//!   └──────stop────────┴───────────────────stop────────────────┘
//! ```
//!
//! Transitions happen only on explicit events. Advancing from `Idle` or
//! `Complete` does nothing.

use starlife_core::{Stage, StarlifeError, StellarProperties};
use std::fmt;
use std::io::{BufRead, Write};

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Where playback currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing shown.
    #[default]
    Idle,
    /// Showing the stage at this index; more stages follow.
    Showing(usize),
    /// Showing the last stage.
    Complete(usize),
}

impl PlaybackState {
    /// Index of the stage on screen, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Showing(i) | PlaybackState::Complete(i) => Some(*i),
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Idle => f.write_str("Idle"),
            PlaybackState::Showing(i) => write!(f, "Showing stage {}", i + 1),
            PlaybackState::Complete(i) => write!(f, "Complete at stage {}", i + 1),
        }
    }
}

/// Stage cursor for a timeline of a known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    stage_count: usize,
    state: PlaybackState,
}

impl Playback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Begin at the first stage. An empty timeline stays idle.
    pub fn start(&mut self, stage_count: usize) -> PlaybackState {
        self.stage_count = stage_count;
        self.state = match stage_count {
            0 => PlaybackState::Idle,
            1 => PlaybackState::Complete(0),
            _ => PlaybackState::Showing(0),
        };
        self.state
    }

    /// Move to the next stage, completing on the last one.
    pub fn advance(&mut self) -> PlaybackState {
        if let PlaybackState::Showing(i) = self.state {
            let next = i + 1;
            self.state = if next + 1 >= self.stage_count {
                PlaybackState::Complete(next)
            } else {
                PlaybackState::Showing(next)
            };
        }
        self.state
    }

    /// Return to idle.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Idle;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, PlaybackState::Complete(_))
    }
}

// =============================================================================
// INTERACTIVE DRIVER
// =============================================================================

/// Step through a star's stages, one line of input per advance.
///
/// An empty line or `n` advances, `q` stops. Returns the final state.
pub fn play<R: BufRead, W: Write>(
    star: &StellarProperties,
    input: R,
    mut out: W,
) -> Result<PlaybackState, StarlifeError> {
    let mut playback = Playback::new();
    playback.start(star.stages.len());
    show(&mut out, star, &playback)?;

    for line in input.lines() {
        if playback.is_complete() {
            break;
        }
        let line = line.map_err(|e| StarlifeError::Io(format!("Read input: {}", e)))?;
        match line.trim() {
            "" | "n" | "next" => {
                playback.advance();
                show(&mut out, star, &playback)?;
            }
            "q" | "quit" => {
                playback.stop();
                break;
            }
            other => {
                writeln!(out, "Unknown input '{}': press Enter to advance, q to quit", other)
                    .map_err(write_error)?;
            }
        }
    }

    tracing::debug!("Playback ended: {}", playback.state());
    Ok(playback.state())
}

fn show<W: Write>(
    out: &mut W,
    star: &StellarProperties,
    playback: &Playback,
) -> Result<(), StarlifeError> {
    let Some(stage) = playback.state().index().and_then(|i| star.stages.get(i)) else {
        return Ok(());
    };
    let total = star.stages.len();
    let position = playback.state().index().map_or(0, |i| i + 1);

    writeln!(out, "[{}/{}] {}", position, total, describe(stage)).map_err(write_error)?;
    if playback.is_complete() {
        writeln!(out, "Complete").map_err(write_error)?;
    } else {
        writeln!(out, "Press Enter for the next stage, q to quit").map_err(write_error)?;
    }
    Ok(())
}

fn describe(stage: &Stage) -> String {
    format!(
        "{}: {:.0} K, {:.3e} L☉, {:.3e} R☉, fusion: {}. {}",
        stage.name(),
        stage.temperature,
        stage.luminosity,
        stage.radius,
        stage.fusion_process,
        stage.description
    )
}

fn write_error(e: std::io::Error) -> StarlifeError {
    StarlifeError::Io(format!("Write output: {}", e))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use starlife_core::compute_stellar_properties;
    use std::io::Cursor;

    #[test]
    fn starts_idle() {
        let playback = Playback::new();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.state().index(), None);
    }

    #[test]
    fn advances_to_complete() {
        let mut playback = Playback::new();
        assert_eq!(playback.start(3), PlaybackState::Showing(0));
        assert_eq!(playback.advance(), PlaybackState::Showing(1));
        assert_eq!(playback.advance(), PlaybackState::Complete(2));
        assert!(playback.is_complete());
    }

    #[test]
    fn advance_is_noop_when_idle_or_complete() {
        let mut playback = Playback::new();
        assert_eq!(playback.advance(), PlaybackState::Idle);

        playback.start(2);
        assert_eq!(playback.advance(), PlaybackState::Complete(1));
        assert_eq!(playback.advance(), PlaybackState::Complete(1));
    }

    #[test]
    fn single_stage_completes_immediately() {
        let mut playback = Playback::new();
        assert_eq!(playback.start(1), PlaybackState::Complete(0));
    }

    #[test]
    fn empty_timeline_stays_idle() {
        let mut playback = Playback::new();
        assert_eq!(playback.start(0), PlaybackState::Idle);
    }

    #[test]
    fn stop_resets_and_restart_begins_again() {
        let mut playback = Playback::new();
        playback.start(5);
        playback.advance();
        playback.stop();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.start(5), PlaybackState::Showing(0));
    }

    #[test]
    fn play_runs_to_completion() {
        let star = compute_stellar_properties(12.0, 0.02).expect("valid");
        let mut out = Vec::new();
        let state = play(&star, Cursor::new("\n\n\n\n\n\n"), &mut out).expect("play");

        assert_eq!(state, PlaybackState::Complete(4));
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("[1/5] Main Sequence"));
        assert!(text.contains("[5/5] Neutron Star"));
        assert!(text.ends_with("Complete\n"));
    }

    #[test]
    fn play_quits_early() {
        let star = compute_stellar_properties(1.0, 0.02).expect("valid");
        let mut out = Vec::new();
        let state = play(&star, Cursor::new("n\nq\n"), &mut out).expect("play");
        assert_eq!(state, PlaybackState::Idle);
    }

    #[test]
    fn play_reports_unknown_input() {
        let star = compute_stellar_properties(1.0, 0.02).expect("valid");
        let mut out = Vec::new();
        let state = play(&star, Cursor::new("jump\n"), &mut out).expect("play");
        assert_eq!(state, PlaybackState::Showing(0));
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Unknown input 'jump'"));
    }
}
