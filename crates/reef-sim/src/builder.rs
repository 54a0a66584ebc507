//! Fluent builder for constructing a [`Simulator`].

use reef_agent::{Agent, Population};
use reef_core::{Clock, PopulationMix, RandomSource, SimConfig};
use reef_field::Field;

use crate::{SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — dimensions, clock settings, population mix, …
/// - `R: RandomSource` — e.g. [`reef_core::SimRng`] for real runs or
///   [`reef_core::ScriptedSource`] in tests
///
/// # Optional inputs
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.empty()`      | Random bootstrap from `config.population`|
/// | `.agents(v)`    | No hand-placed agents                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, SimRng::new(config.seed))
///     .empty()
///     .agents(vec![Agent::new(Species::Fox, Location::new(0, 0), true)])
///     .build()?;
/// ```
pub struct SimBuilder<R: RandomSource> {
    config: SimConfig,
    rng:    R,
    empty:  bool,
    agents: Vec<Agent>,
}

impl<R: RandomSource> SimBuilder<R> {
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self { config, rng, empty: false, agents: Vec::new() }
    }

    /// Skip the random bootstrap.  Resets also leave the field empty.
    pub fn empty(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Place these agents after the bootstrap, in order.  Each must sit on a
    /// free in-bounds cell.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = agents;
        self
    }

    /// Validate the config, bootstrap the field, and return a ready-to-run
    /// [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<R>> {
        self.config.validate()?;
        if self.config.start_hour >= self.config.hours_per_day {
            return Err(SimError::Config(format!(
                "start_hour {} must be below hours_per_day {}",
                self.config.start_hour, self.config.hours_per_day
            )));
        }

        let (depth, width) = self.config.resolved_dimensions();
        let mix = if self.empty { PopulationMix::empty() } else { self.config.population.clone() };

        let mut sim = Simulator {
            clock:      Clock::new(self.config.start_hour, self.config.hours_per_day),
            field:      Field::new(depth, width),
            population: Population::new(),
            rng:        self.rng,
            mix,
            config:     self.config,
        };
        sim.populate();
        for agent in self.agents {
            sim.add_agent(agent)?;
        }
        sim.field.set_day(sim.clock.is_daytime());
        Ok(sim)
    }
}
