//! Event lifecycle evaluation.
//!
//! Classifies an event window against a caller-supplied reference instant and
//! answers the derived questions: can a user still join, how long until the
//! event starts, how long until it ends. All functions here are pure and
//! side-effect free; callers supply "now" explicitly (typically wall-clock
//! time at the API boundary), which keeps every result reproducible.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{EventWindow, Phase};

/// Classify an event window relative to a reference instant.
///
/// Both boundaries are inclusive on the ongoing side: an event whose start or
/// effective end equals `now` exactly counts as ongoing. A window whose
/// effective end precedes its start (zero duration, or an explicit end before
/// the start) skips the ongoing phase and is completed as soon as `now`
/// reaches the start.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use eventfox::{lifecycle, EventWindow, Phase};
///
/// let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
/// let window = EventWindow::new(start, 2.0, None).unwrap();
///
/// let before = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
/// assert_eq!(lifecycle::classify(before, &window), Phase::Upcoming);
///
/// let during = Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap();
/// assert_eq!(lifecycle::classify(during, &window), Phase::Ongoing);
/// ```
pub fn classify(now: DateTime<Utc>, window: &EventWindow) -> Phase {
    if window.start() > now {
        Phase::Upcoming
    } else if now <= window.effective_end() {
        Phase::Ongoing
    } else {
        Phase::Completed
    }
}

/// Whether a user can still join the event.
///
/// True exactly when the event is upcoming. Capacity and membership rules are
/// the registration collaborator's concern, not evaluated here.
pub fn can_join(now: DateTime<Utc>, window: &EventWindow) -> bool {
    classify(now, window) == Phase::Upcoming
}

/// Time remaining until the event starts.
///
/// `None` once the event has started (or passed); otherwise the strictly
/// positive delta `start - now`.
pub fn time_until_start(now: DateTime<Utc>, window: &EventWindow) -> Option<TimeDelta> {
    if window.start() <= now {
        None
    } else {
        Some(window.start() - now)
    }
}

/// Time remaining until an ongoing event ends.
///
/// `None` before the event starts and after it has ended; otherwise the
/// non-negative delta `effective_end - now`.
pub fn time_until_end(now: DateTime<Utc>, window: &EventWindow) -> Option<TimeDelta> {
    let end = window.effective_end();
    if now < window.start() || now > end {
        None
    } else {
        Some(end - now)
    }
}
