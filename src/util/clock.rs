//! Local wall-clock sampling and midnight arithmetic.
//!
//! `WallTime` is a plain local-time sample so the countdown math stays pure
//! and natively testable; only `WallTime::now` touches the browser clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

pub const MS_PER_SECOND: u32 = 1_000;
pub const MS_PER_MINUTE: u32 = 60_000;
pub const MS_PER_HOUR: u32 = 3_600_000;
pub const MS_PER_DAY: u32 = 86_400_000;

/// A local wall-clock sample with millisecond precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl WallTime {
    /// Sample the current local time from the browser clock.
    ///
    /// Off-browser builds return midnight; the widget only runs under `csr`.
    pub fn now() -> Self {
        #[cfg(feature = "csr")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hours: date.get_hours(),
                minutes: date.get_minutes(),
                seconds: date.get_seconds(),
                millis: date.get_milliseconds(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Milliseconds elapsed since the most recent local midnight.
    fn ms_since_midnight(self) -> u32 {
        self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
            + self.millis
    }
}

/// Milliseconds from `now` until the next local midnight.
///
/// At exactly midnight the remainder is a full day (86,400,000 ms): the next
/// midnight is strictly tomorrow relative to the sampled instant.
pub fn ms_until_midnight(now: WallTime) -> u32 {
    MS_PER_DAY - now.ms_since_midnight()
}
