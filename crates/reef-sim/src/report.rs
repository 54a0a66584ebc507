use std::fmt;

use reef_agent::{SpeciesCounts, Tally};
use reef_field::WeatherMode;

/// What one step did and what the world looks like after it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    pub step:        u64,
    pub day:         u64,
    /// Hour within the day.
    pub hour:        u64,
    pub is_day:      bool,
    pub weather:     WeatherMode,
    /// Live agents per species after the step settled.
    pub counts:      SpeciesCounts,
    /// Births and deaths during the step.
    pub tally:       Tally,
    pub total_krill: u64,
}

impl StepReport {
    #[inline]
    pub fn births(&self) -> usize {
        self.tally.births
    }

    #[inline]
    pub fn deaths(&self) -> usize {
        self.tally.total_deaths()
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} (day {} {:02}:00, {}, {}) {} | +{} -{} | krill {}",
            self.step,
            self.day,
            self.hour,
            if self.is_day { "day" } else { "night" },
            self.weather,
            self.counts,
            self.births(),
            self.deaths(),
            self.total_krill,
        )
    }
}
