//! Top-level simulation configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to `reef_sim::SimBuilder`.  Every field has a
//! default, so a config file only needs to name what it changes.

use tracing::warn;

use crate::{ReefError, ReefResult};

/// Field depth used when the configured dimensions are unusable.
pub const DEFAULT_DEPTH: usize = 130;

/// Field width used when the configured dimensions are unusable.
pub const DEFAULT_WIDTH: usize = 200;

// ── PopulationMix ─────────────────────────────────────────────────────────────

/// Per-cell creation probabilities for the initial population.
///
/// Bootstrap rolls these in a fixed priority order (fox, rabbit, megalodon,
/// whale, jellyfish); each roll is only taken if every earlier one failed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationMix {
    pub fox:       f64,
    pub rabbit:    f64,
    pub megalodon: f64,
    pub whale:     f64,
    pub jellyfish: f64,
}

impl Default for PopulationMix {
    fn default() -> Self {
        Self {
            fox:       0.07,
            rabbit:    0.35,
            megalodon: 0.03,
            whale:     0.055,
            jellyfish: 0.001,
        }
    }
}

impl PopulationMix {
    /// The five probabilities in bootstrap priority order.
    pub fn in_priority_order(&self) -> [f64; 5] {
        [self.fox, self.rabbit, self.megalodon, self.whale, self.jellyfish]
    }

    /// A mix that creates nothing.
    pub fn empty() -> Self {
        Self { fox: 0.0, rabbit: 0.0, megalodon: 0.0, whale: 0.0, jellyfish: 0.0 }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Field rows.  Zero falls back to [`DEFAULT_DEPTH`].
    pub depth: usize,

    /// Field columns.  Zero falls back to [`DEFAULT_WIDTH`].
    pub width: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Step budget for a full run.
    pub max_steps: u64,

    /// Hours per simulated day.  One step is one hour.
    pub hours_per_day: u64,

    /// Hour of day the clock shows after a reset.
    pub start_hour: u64,

    /// Write an agent snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,

    /// Initial species probabilities.
    pub population: PopulationMix,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            depth:                 DEFAULT_DEPTH,
            width:                 DEFAULT_WIDTH,
            seed:                  42,
            max_steps:             4_000,
            hours_per_day:         24,
            start_hour:            6,
            output_interval_steps: 24,
            population:            PopulationMix::default(),
        }
    }
}

impl SimConfig {
    /// `(depth, width)` with the documented fallback applied.
    ///
    /// If either dimension is zero both are replaced by the defaults and a
    /// warning is logged; this is not an error.
    pub fn resolved_dimensions(&self) -> (usize, usize) {
        if self.depth == 0 || self.width == 0 {
            warn!(
                depth = self.depth,
                width = self.width,
                "field dimensions must be greater than zero; using {DEFAULT_DEPTH}x{DEFAULT_WIDTH}"
            );
            (DEFAULT_DEPTH, DEFAULT_WIDTH)
        } else {
            (self.depth, self.width)
        }
    }

    /// Reject values the simulator cannot run with.
    ///
    /// Field dimensions are not checked here; they have a fallback.
    pub fn validate(&self) -> ReefResult<()> {
        if self.hours_per_day == 0 {
            return Err(ReefError::Config("hours_per_day must be positive".into()));
        }
        let names = ["fox", "rabbit", "megalodon", "whale", "jellyfish"];
        for (name, p) in names.iter().zip(self.population.in_priority_order()) {
            if !(0.0..=1.0).contains(&p) {
                return Err(ReefError::Config(format!(
                    "{name} creation probability {p} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}
