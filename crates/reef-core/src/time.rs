//! Simulation time model.
//!
//! # Design
//!
//! One step is one simulated hour.  `Clock` keeps three counters:
//!
//!   step — steps taken since the last reset (starts at 0)
//!   hour — absolute hour counter (starts at the configured start hour)
//!   day  — 1-based day number, bumped whenever `hour` crosses a multiple
//!          of `hours_per_day`
//!
//! Day and night are derived from `hour % hours_per_day` and never stored
//! here; the simulator copies the derived flag onto the field each step.

use std::fmt;

/// First daylight hour of the day (inclusive).
pub const DAWN_HOUR: u64 = 6;

/// Last daylight hour of the day (inclusive).
pub const DUSK_HOUR: u64 = 20;

/// Step / hour / day counters for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    /// Steps taken since the last reset.
    pub step: u64,
    /// Absolute hour counter.
    pub hour: u64,
    /// Current day, starting at 1.
    pub day: u64,
    /// Hours in one day.  Always positive.
    pub hours_per_day: u64,
}

impl Clock {
    /// A clock at step 0, day 1, `start_hour`.
    ///
    /// A zero `hours_per_day` is treated as 24.
    pub fn new(start_hour: u64, hours_per_day: u64) -> Self {
        let hours_per_day = if hours_per_day == 0 { 24 } else { hours_per_day };
        Self { step: 0, hour: start_hour, day: 1, hours_per_day }
    }

    /// Return to step 0, day 1, `start_hour`.
    pub fn reset(&mut self, start_hour: u64) {
        self.step = 0;
        self.hour = start_hour;
        self.day = 1;
    }

    /// Advance by one step (one hour).
    #[inline]
    pub fn advance(&mut self) {
        self.step += 1;
        self.hour += 1;
        if self.hour.is_multiple_of(self.hours_per_day) {
            self.day += 1;
        }
    }

    /// Hour within the current day, `0..hours_per_day`.
    #[inline]
    pub fn hour_of_day(&self) -> u64 {
        self.hour % self.hours_per_day
    }

    /// `true` between [`DAWN_HOUR`] and [`DUSK_HOUR`] inclusive.
    #[inline]
    pub fn is_daytime(&self) -> bool {
        (DAWN_HOUR..=DUSK_HOUR).contains(&self.hour_of_day())
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} (day {} {:02}:00)", self.step, self.day, self.hour_of_day())
    }
}
