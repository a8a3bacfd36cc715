//! Countdown model: time remaining until midnight as three dot-grid units.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use crate::util::clock::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// One dot-grid group: a capacity and how many dots are currently lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeUnit {
    pub total: u32,
    pub remaining: u32,
    pub label: &'static str,
}

/// The three units at full capacity, shown until the first tick replaces
/// them one second after mount.
pub fn initial_units() -> [TimeUnit; 3] {
    [
        TimeUnit { total: 24, remaining: 24, label: "hours" },
        TimeUnit { total: 60, remaining: 60, label: "minutes" },
        TimeUnit { total: 60, remaining: 60, label: "seconds" },
    ]
}

/// Decompose milliseconds-until-midnight into whole hours, whole minutes
/// within the hour, and whole seconds within the minute.
///
/// Truncating division only; each unit is recomputed independently from
/// `ms_left`. An exact-midnight sample carries a full day, so `hours` is 24
/// for that one instant (still within its capacity).
pub fn time_units(ms_left: u32) -> [TimeUnit; 3] {
    let hours = ms_left / MS_PER_HOUR;
    let minutes = (ms_left % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms_left % MS_PER_MINUTE) / MS_PER_SECOND;
    [
        TimeUnit { total: 24, remaining: hours, label: "hours" },
        TimeUnit { total: 60, remaining: minutes, label: "minutes" },
        TimeUnit { total: 60, remaining: seconds, label: "seconds" },
    ]
}
