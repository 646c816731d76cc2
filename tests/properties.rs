//! Property-based tests for the lifecycle evaluator.
//!
//! These check the universally-quantified guarantees: effective-end
//! resolution, the three-way phase partition, eligibility equivalence, and
//! countdown presence conditions.

use chrono::{DateTime, TimeDelta, Utc};
use eventfox::{lifecycle, EventWindow, Phase};
use proptest::prelude::*;

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

/// Generator domain: starts within a few decades of the epoch offset,
/// durations as whole minutes so the millisecond conversion is exact.
const BASE: i64 = 1_600_000_000;

prop_compose! {
    fn window_parts()(
        start_offset in 0i64..100_000_000,
        duration_minutes in 0i64..6_000,
        end_offset in proptest::option::of(-100_000i64..100_000),
    ) -> (DateTime<Utc>, i64, Option<DateTime<Utc>>) {
        let start = ts(BASE + start_offset);
        let end = end_offset.map(|off| start + TimeDelta::seconds(off));
        (start, duration_minutes, end)
    }
}

proptest! {
    #[test]
    fn effective_end_resolution((start, duration_minutes, end) in window_parts()) {
        let window = EventWindow::new(start, duration_minutes as f64 / 60.0, end).unwrap();
        match end {
            Some(explicit) => prop_assert_eq!(window.effective_end(), explicit),
            None => prop_assert_eq!(
                window.effective_end(),
                start + TimeDelta::minutes(duration_minutes)
            ),
        }
    }

    #[test]
    fn phase_partition_is_exhaustive_and_exclusive(
        (start, duration_minutes, end) in window_parts(),
        now_offset in -200_000i64..400_000,
    ) {
        let window = EventWindow::new(start, duration_minutes as f64 / 60.0, end).unwrap();
        let now = start + TimeDelta::seconds(now_offset);
        let effective_end = window.effective_end();

        let phase = lifecycle::classify(now, &window);
        match phase {
            Phase::Upcoming => prop_assert!(start > now),
            Phase::Ongoing => prop_assert!(now >= start && now <= effective_end),
            Phase::Completed => prop_assert!(now >= start && now > effective_end),
        }
    }

    #[test]
    fn can_join_iff_upcoming(
        (start, duration_minutes, end) in window_parts(),
        now_offset in -200_000i64..400_000,
    ) {
        let window = EventWindow::new(start, duration_minutes as f64 / 60.0, end).unwrap();
        let now = start + TimeDelta::seconds(now_offset);

        prop_assert_eq!(
            lifecycle::can_join(now, &window),
            lifecycle::classify(now, &window) == Phase::Upcoming
        );
    }

    #[test]
    fn countdown_presence_matches_phase(
        (start, duration_minutes, end) in window_parts(),
        now_offset in -200_000i64..400_000,
    ) {
        let window = EventWindow::new(start, duration_minutes as f64 / 60.0, end).unwrap();
        let now = start + TimeDelta::seconds(now_offset);
        let phase = lifecycle::classify(now, &window);

        match lifecycle::time_until_start(now, &window) {
            Some(delta) => {
                prop_assert_eq!(phase, Phase::Upcoming);
                prop_assert!(delta > TimeDelta::zero());
                prop_assert_eq!(delta, start - now);
            }
            None => prop_assert_ne!(phase, Phase::Upcoming),
        }

        match lifecycle::time_until_end(now, &window) {
            Some(delta) => {
                prop_assert_eq!(phase, Phase::Ongoing);
                prop_assert!(delta >= TimeDelta::zero());
                prop_assert_eq!(delta, window.effective_end() - now);
            }
            None => prop_assert_ne!(phase, Phase::Ongoing),
        }
    }

    #[test]
    fn classify_is_idempotent(
        (start, duration_minutes, end) in window_parts(),
        now_offset in -200_000i64..400_000,
    ) {
        let window = EventWindow::new(start, duration_minutes as f64 / 60.0, end).unwrap();
        let now = start + TimeDelta::seconds(now_offset);

        prop_assert_eq!(
            lifecycle::classify(now, &window),
            lifecycle::classify(now, &window)
        );
    }

    #[test]
    fn negative_durations_are_rejected(
        start_offset in 0i64..100_000_000,
        duration in -1_000.0f64..-0.0001,
    ) {
        let start = ts(BASE + start_offset);
        prop_assert!(EventWindow::new(start, duration, None).is_err());
    }
}
