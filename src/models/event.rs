//! Event window representation.
//!
//! An [`EventWindow`] is the temporal definition of an event: a required start
//! instant, an optional explicit end instant, and a duration-in-hours fallback
//! used only when the explicit end is absent. The window owns no other state
//! and is never mutated by the evaluator.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{LifecycleError, Result};

/// Fallback event duration when neither an explicit end nor a duration is given.
pub const DEFAULT_DURATION_HOURS: f64 = 2.0;

/// The temporal bounds of a single event.
///
/// The effective end boundary is resolved per evaluation call, never cached:
/// the explicit `end` wins when present, otherwise `start + duration_hours`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use eventfox::EventWindow;
///
/// let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
/// let window = EventWindow::new(start, 2.0, None).unwrap();
///
/// assert_eq!(window.effective_end(), Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventWindow {
    start: DateTime<Utc>,
    duration_hours: f64,
    end: Option<DateTime<Utc>>,
}

impl EventWindow {
    /// Creates a new event window.
    ///
    /// `duration_hours` must be finite and non-negative, and — when no
    /// explicit `end` is given — small enough that `start + duration` stays a
    /// representable instant. An explicit `end` earlier than `start` is
    /// accepted: no invariant requires the resolved end to follow the start,
    /// and such a window is simply completed as soon as the reference instant
    /// reaches `start`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidDuration`] when `duration_hours` is
    /// NaN, infinite, or negative, or when it would push the end boundary out
    /// of the representable time range.
    pub fn new(
        start: DateTime<Utc>,
        duration_hours: f64,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return Err(LifecycleError::InvalidDuration(duration_hours));
        }
        // The duration only ever feeds end-boundary resolution, so it only
        // needs to be addable to `start` when there is no explicit end.
        if end.is_none() && start.checked_add_signed(hours_delta(duration_hours)).is_none() {
            return Err(LifecycleError::InvalidDuration(duration_hours));
        }
        Ok(Self {
            start,
            duration_hours,
            end,
        })
    }

    /// Creates a window with the default two-hour duration and no explicit end.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            duration_hours: DEFAULT_DURATION_HOURS,
            end: None,
        }
    }

    /// Scheduled start of the event.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Duration fallback in hours, used only when no explicit end is set.
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Explicit end instant, if one was set.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Resolves the end boundary used for all phase computations.
    ///
    /// The explicit `end` takes precedence; otherwise the boundary is
    /// `start + duration_hours`, converted at millisecond resolution.
    /// Construction already rejected durations that cannot be added to
    /// `start`, so the addition here is in range.
    pub fn effective_end(&self) -> DateTime<Utc> {
        match self.end {
            Some(end) => end,
            None => self.start + hours_delta(self.duration_hours),
        }
    }
}

/// Convert a fractional hour count to a `TimeDelta` at millisecond resolution.
fn hours_delta(hours: f64) -> TimeDelta {
    TimeDelta::milliseconds((hours * 3_600_000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_effective_end_from_duration() {
        let window = EventWindow::new(at(10, 0), 2.0, None).unwrap();
        assert_eq!(window.effective_end(), at(12, 0));
    }

    #[test]
    fn test_effective_end_fractional_duration() {
        let window = EventWindow::new(at(10, 0), 1.5, None).unwrap();
        assert_eq!(window.effective_end(), at(11, 30));
    }

    #[test]
    fn test_explicit_end_wins_over_duration() {
        let window = EventWindow::new(at(10, 0), 5.0, Some(at(10, 30))).unwrap();
        assert_eq!(window.effective_end(), at(10, 30));
    }

    #[test]
    fn test_zero_duration_collapses_to_start() {
        let window = EventWindow::new(at(10, 0), 0.0, None).unwrap();
        assert_eq!(window.effective_end(), at(10, 0));
    }

    #[test]
    fn test_explicit_end_before_start_is_accepted() {
        let window = EventWindow::new(at(10, 0), 2.0, Some(at(9, 0))).unwrap();
        assert_eq!(window.effective_end(), at(9, 0));
    }

    #[test]
    fn test_rejects_negative_duration() {
        let err = EventWindow::new(at(10, 0), -1.0, None).unwrap_err();
        assert_eq!(err.code(), "INVALID_DURATION");
    }

    #[test]
    fn test_rejects_duration_past_representable_time() {
        // Finite and non-negative, but start + duration overflows the
        // instant range; must fail construction, not panic later.
        let err = EventWindow::new(at(10, 0), 1e15, None).unwrap_err();
        assert_eq!(err.code(), "INVALID_DURATION");
    }

    #[test]
    fn test_oversized_duration_is_ignored_with_explicit_end() {
        // The duration fallback is only used when no explicit end is set, so
        // it does not need to be addable when one is.
        let window = EventWindow::new(at(10, 0), 1e15, Some(at(12, 0))).unwrap();
        assert_eq!(window.effective_end(), at(12, 0));
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        assert!(EventWindow::new(at(10, 0), f64::NAN, None).is_err());
        assert!(EventWindow::new(at(10, 0), f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_starting_at_uses_default_duration() {
        let window = EventWindow::starting_at(at(10, 0));
        assert_eq!(window.duration_hours(), DEFAULT_DURATION_HOURS);
        assert_eq!(window.effective_end(), at(12, 0));
    }
}
