use super::*;
use crate::util::clock::{MS_PER_DAY, WallTime, ms_until_midnight};

// =============================================================
// Decomposition
// =============================================================

#[test]
fn one_second_to_midnight() {
    let t = WallTime { hours: 23, minutes: 59, seconds: 59, millis: 0 };
    let [hours, minutes, seconds] = time_units(ms_until_midnight(t));
    assert_eq!(hours.remaining, 0);
    assert_eq!(minutes.remaining, 0);
    assert_eq!(seconds.remaining, 1);
}

#[test]
fn half_a_second_past_midnight_truncates() {
    let t = WallTime { hours: 0, minutes: 0, seconds: 0, millis: 500 };
    let [hours, minutes, seconds] = time_units(ms_until_midnight(t));
    assert_eq!(hours.remaining, 23);
    assert_eq!(minutes.remaining, 59);
    assert_eq!(seconds.remaining, 59);
}

#[test]
fn exact_midnight_shows_a_full_day() {
    let [hours, minutes, seconds] = time_units(MS_PER_DAY);
    assert_eq!(hours.remaining, 24);
    assert_eq!(minutes.remaining, 0);
    assert_eq!(seconds.remaining, 0);
}

#[test]
fn decomposition_is_idempotent() {
    let t = WallTime { hours: 9, minutes: 41, seconds: 7, millis: 123 };
    let ms = ms_until_midnight(t);
    assert_eq!(time_units(ms), time_units(ms));
}

#[test]
fn remaining_stays_within_capacity_across_the_day() {
    let samples = [
        WallTime { hours: 0, minutes: 0, seconds: 0, millis: 1 },
        WallTime { hours: 1, minutes: 2, seconds: 3, millis: 4 },
        WallTime { hours: 11, minutes: 59, seconds: 59, millis: 999 },
        WallTime { hours: 12, minutes: 0, seconds: 0, millis: 0 },
        WallTime { hours: 18, minutes: 45, seconds: 30, millis: 500 },
        WallTime { hours: 23, minutes: 59, seconds: 59, millis: 999 },
    ];
    for t in samples {
        let units = time_units(ms_until_midnight(t));
        for unit in units {
            assert!(unit.remaining <= unit.total, "{t:?} -> {unit:?}");
        }
        assert!(units[0].remaining <= 23, "{t:?}");
        assert!(units[1].remaining <= 59, "{t:?}");
        assert!(units[2].remaining <= 59, "{t:?}");
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_units_are_full_and_ordered() {
    let units = initial_units();
    assert_eq!(units[0].label, "hours");
    assert_eq!(units[1].label, "minutes");
    assert_eq!(units[2].label, "seconds");
    for unit in units {
        assert_eq!(unit.remaining, unit.total);
    }
}
