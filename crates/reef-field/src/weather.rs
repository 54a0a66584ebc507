//! Three-state weather process.
//!
//! ```text
//!            rain roll (0.02)
//!   Normal ───────────────────▶ Raining ──┐
//!     │  ▲                                │ elapsed == duration
//!     │  └────────────────────────────────┤
//!     │      drought roll (0.007)         │
//!     └─────────────────────────▶ Drought ┘
//! ```
//!
//! The drought roll is only taken when the rain roll fails.  Durations are
//! drawn from `1..=MAX_DURATION`; zero is excluded so a spell always ends.

use std::fmt;

use reef_core::RandomSource;

/// Per-tick probability of rain starting under normal weather.
pub const RAIN_PROBABILITY: f64 = 0.02;

/// Per-tick probability of a drought starting (only rolled if rain did not).
pub const DROUGHT_PROBABILITY: f64 = 0.007;

/// Longest possible weather spell, in ticks.
pub const MAX_DURATION: u32 = 36;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherMode {
    #[default]
    Normal,
    Raining,
    Drought,
}

impl WeatherMode {
    /// Label used in reports and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherMode::Normal  => "Normal",
            WeatherMode::Raining => "Rain",
            WeatherMode::Drought => "Drought",
        }
    }

    /// Chance that an infected agent infects one uninfected neighbor.
    #[inline]
    pub fn disease_spread_rate(self) -> f64 {
        match self {
            WeatherMode::Raining => 0.025,
            _                    => 0.01,
        }
    }

    /// Chance that a cell's krill grows this step.
    #[inline]
    pub fn krill_growth_probability(self) -> f64 {
        match self {
            WeatherMode::Normal  => 0.80,
            WeatherMode::Raining => 0.99,
            WeatherMode::Drought => 0.10,
        }
    }
}

impl fmt::Display for WeatherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current weather plus the progress of any active spell.
///
/// Invariant: `mode != Normal` implies `elapsed < duration`;
/// `mode == Normal` implies `elapsed == duration == 0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weather {
    mode:     WeatherMode,
    elapsed:  u32,
    duration: u32,
}

impl Weather {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> WeatherMode {
        self.mode
    }

    /// Ticks spent in the current spell.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Total length of the current spell; 0 under normal weather.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[inline]
    pub fn is_raining(&self) -> bool {
        self.mode == WeatherMode::Raining
    }

    #[inline]
    pub fn is_drought(&self) -> bool {
        self.mode == WeatherMode::Drought
    }

    /// Advance the process by one step.
    pub fn tick<R: RandomSource>(&mut self, rng: &mut R) {
        match self.mode {
            WeatherMode::Normal => {
                if rng.chance(RAIN_PROBABILITY) {
                    self.begin(WeatherMode::Raining, rng);
                } else if rng.chance(DROUGHT_PROBABILITY) {
                    self.begin(WeatherMode::Drought, rng);
                }
            }
            WeatherMode::Raining | WeatherMode::Drought => {
                self.elapsed += 1;
                if self.elapsed >= self.duration {
                    self.reset();
                }
            }
        }
    }

    /// Back to normal weather.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn begin<R: RandomSource>(&mut self, mode: WeatherMode, rng: &mut R) {
        self.mode = mode;
        self.elapsed = 0;
        self.duration = rng.uniform_int(MAX_DURATION as usize) as u32 + 1;
    }
}
