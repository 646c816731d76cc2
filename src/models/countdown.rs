//! Countdown decompositions for human-readable remaining-time display.
//!
//! The evaluator returns raw `TimeDelta` values; these types carry the
//! whole-unit decomposition the frontend renders. Two shapes exist because the
//! two countdowns differ: time-until-start may span days, while time-until-end
//! is shown as hours and minutes only (hours grow unbounded for the rare
//! multi-day event, which is acceptable).

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Remaining time before an upcoming event starts, in whole display units.
///
/// Decomposed by floor division in descending unit order, each remainder
/// carried into the next-smaller unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartCountdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl StartCountdown {
    /// Decompose a non-negative delta into whole days, hours and minutes.
    pub fn from_delta(delta: TimeDelta) -> Self {
        let total_minutes = delta.num_minutes().max(0);
        Self {
            days: total_minutes / 1440,
            hours: (total_minutes % 1440) / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl fmt::Display for StartCountdown {
    /// Display policy: with days present, minutes are dropped; with hours
    /// present, minutes are kept; under one hour, minutes only. `"0m"` under
    /// one minute remaining is intentional.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}d {}h", self.days, self.hours)
        } else if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}m", self.minutes)
        }
    }
}

/// Remaining time before an ongoing event ends, in whole display units.
///
/// No days component: an ongoing event is assumed to have under a day
/// remaining, and the hours value simply grows when it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndCountdown {
    pub hours: i64,
    pub minutes: i64,
}

impl EndCountdown {
    /// Decompose a non-negative delta into whole hours and minutes.
    pub fn from_delta(delta: TimeDelta) -> Self {
        let total_minutes = delta.num_minutes().max(0);
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl fmt::Display for EndCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
