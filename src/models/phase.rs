//! Lifecycle phase of an event relative to a reference instant.

use serde::{Deserialize, Serialize};

/// Prefix for presentation-layer style tokens derived from a phase.
pub const STYLE_TAG_PREFIX: &str = "event-";

/// The three lifecycle phases of an event.
///
/// The phases form a strictly ordered, time-driven, one-directional
/// progression — `Upcoming → Ongoing → Completed` — with transitions occurring
/// automatically as the reference instant advances past the start and the
/// effective end. Nothing is persisted: the phase is recomputed from scratch
/// on every evaluation.
///
/// The enum is closed on purpose. Display and style mappings below are total
/// functions with no fallback arm; an out-of-enum phase is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Upcoming,
    Ongoing,
    Completed,
}

impl Phase {
    /// Neutral display label for this phase. Localization happens in the
    /// presentation layer, not here.
    pub fn display_text(&self) -> &'static str {
        match self {
            Phase::Upcoming => "Upcoming",
            Phase::Ongoing => "Ongoing",
            Phase::Completed => "Completed",
        }
    }

    /// Stable lowercase style token for this phase (CSS-class-like).
    pub fn style_tag(&self) -> &'static str {
        match self {
            Phase::Upcoming => "event-upcoming",
            Phase::Ongoing => "event-ongoing",
            Phase::Completed => "event-completed",
        }
    }
}
