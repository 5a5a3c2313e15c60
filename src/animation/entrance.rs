use std::time::{Duration, Instant};

use crate::constants::{
    INTERACTIVE_SETTLE_MS, SUBTITLE_TYPING_AT_MS, TITLE_REVEAL_AT_MS, TYPE_MARGIN_PER_CHAR_MS,
};

/// Phase enum for the staged entrance narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Initializing,
    TitleReveal,
    SubtitleTyping,
    Interactive,
}

impl Phase {
    /// Returns true once the title should be on screen.
    pub fn title_visible(&self) -> bool {
        *self != Phase::Initializing
    }

    /// Returns true while the typed subtitle is part of the layout.
    pub fn typing_eligible(&self) -> bool {
        matches!(self, Phase::SubtitleTyping | Phase::Interactive)
    }

    /// Returns true in the terminal, pointer-reactive phase.
    pub fn is_interactive(&self) -> bool {
        *self == Phase::Interactive
    }
}

/// Time-driven state machine sequencing the entrance.
///
/// Transitions are wall-clock deadlines relative to launch, never user input.
/// The order is fixed: Initializing -> TitleReveal -> SubtitleTyping ->
/// Interactive, and Interactive is terminal.
#[derive(Debug)]
pub struct EntranceSequence {
    started: Instant,
    phase: Phase,
    interactive_at: Duration,
}

impl EntranceSequence {
    /// Starts the sequence at `now`. The Interactive deadline is derived from
    /// the subtitle length at the margin rate, not the real typing rate.
    pub fn new(now: Instant, subtitle: &str) -> Self {
        Self {
            started: now,
            phase: Phase::Initializing,
            interactive_at: interactive_deadline(subtitle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Advances at most one transition whose deadline has passed, returning
    /// the newly entered phase. Callers loop this so a late tick still
    /// observes every transition in order.
    pub fn poll(&mut self, now: Instant) -> Option<Phase> {
        let elapsed = now.saturating_duration_since(self.started);
        let next = match self.phase {
            Phase::Initializing if elapsed >= Duration::from_millis(TITLE_REVEAL_AT_MS) => {
                Phase::TitleReveal
            }
            Phase::TitleReveal if elapsed >= Duration::from_millis(SUBTITLE_TYPING_AT_MS) => {
                Phase::SubtitleTyping
            }
            Phase::SubtitleTyping if elapsed >= self.interactive_at => Phase::Interactive,
            _ => return None,
        };
        self.phase = next;
        Some(next)
    }
}

/// Deadline for entering Interactive: the subtitle trigger plus a per-character
/// margin plus a settle delay. Uses the 40ms margin rate on purpose; see
/// `constants::TYPE_MARGIN_PER_CHAR_MS`.
pub fn interactive_deadline(subtitle: &str) -> Duration {
    let chars = subtitle.chars().count() as u64;
    Duration::from_millis(
        SUBTITLE_TYPING_AT_MS + chars * TYPE_MARGIN_PER_CHAR_MS + INTERACTIVE_SETTLE_MS,
    )
}
