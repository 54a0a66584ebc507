//! The `Simulator` struct and its step loop.

use reef_agent::{Agent, Population, Species, StepContext, Tally};
use reef_core::{AgentId, Clock, PopulationMix, RandomSource, SimConfig};
use reef_field::Field;
use tracing::{debug, info};

use crate::{SimError, SimObserver, SimResult, StepReport, Viability};

/// The main simulation runner.
///
/// Owns the field, the population arena, the clock, and the single random
/// source every stochastic decision draws from.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<R: RandomSource> {
    pub(crate) config:     SimConfig,
    pub(crate) mix:        PopulationMix,
    pub(crate) clock:      Clock,
    pub(crate) field:      Field,
    pub(crate) population: Population,
    pub(crate) rng:        R,
}

impl<R: RandomSource> Simulator<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run up to `steps` steps, checking `viability` before each one.
    ///
    /// Returns the number of steps actually taken.
    pub fn simulate<O, V>(&mut self, steps: u64, observer: &mut O, viability: &V) -> u64
    where
        O: SimObserver,
        V: Viability + ?Sized,
    {
        info!(steps, agents = self.population.len(), clock = %self.clock, "simulation starting");
        let mut taken = 0;
        while taken < steps {
            if !viability.is_viable(&self.field, &self.population) {
                info!(clock = %self.clock, "population no longer viable");
                break;
            }
            observer.on_step_start(self.clock.step + 1);
            let report = self.step();
            observer.on_step_end(&report, &self.field, &self.population);
            taken += 1;
        }
        let last = self.report(Tally::default());
        observer.on_sim_end(&last);
        info!(taken, agents = self.population.len(), clock = %self.clock, "simulation finished");
        taken
    }

    /// Run for the configured step budget (`max_steps`, 4000 by default).
    pub fn run_long<O, V>(&mut self, observer: &mut O, viability: &V) -> u64
    where
        O: SimObserver,
        V: Viability + ?Sized,
    {
        self.simulate(self.config.max_steps, observer, viability)
    }

    /// Advance the whole world by one step.
    pub fn step(&mut self) -> StepReport {
        self.clock.advance();
        self.field.set_day(self.clock.is_daytime());
        self.field.update_weather(&mut self.rng);

        let ctx = StepContext::from_field(&self.field);
        for id in self.population.ids() {
            reef_agent::act(id, &mut self.population, &mut self.field, &ctx, &mut self.rng);
        }
        let tally = self.population.settle(&mut self.field);

        self.field.grow_krill(&mut self.rng);

        let report = self.report(tally);
        debug!("{report}");
        report
    }

    /// Back to step 0, day 1, the configured start hour: empty the field,
    /// restore krill and normal weather, and reseed the population.
    ///
    /// Agents added with [`add_agent`](Self::add_agent) are not restored.
    pub fn reset(&mut self) {
        self.clock.reset(self.config.start_hour);
        self.population.clear();
        self.field.clear_all();
        self.field.reset_krill();
        self.field.reset_weather();
        self.populate();
        self.field.set_day(self.clock.is_daytime());
        info!(agents = self.population.len(), "simulation reset");
    }

    /// Place `agent` at its own location.
    ///
    /// Fails if the location is off the field or already taken.  Call only
    /// between steps.
    pub fn add_agent(&mut self, agent: Agent) -> SimResult<AgentId> {
        let location = agent.location();
        if !self.field.contains(location) {
            return Err(SimError::OutOfBounds {
                location,
                depth: self.field.depth(),
                width: self.field.width(),
            });
        }
        if !self.field.is_free(location) {
            return Err(SimError::CellOccupied(location));
        }
        Ok(self.population.insert(agent, &mut self.field))
    }

    /// A report of the current state with the given births and deaths.
    pub fn report(&self, tally: Tally) -> StepReport {
        StepReport {
            step:        self.clock.step,
            day:         self.clock.day,
            hour:        self.clock.hour_of_day(),
            is_day:      self.field.is_day(),
            weather:     self.field.weather_mode(),
            counts:      self.population.counts(),
            tally,
            total_krill: self.field.total_krill(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ── Bootstrap ─────────────────────────────────────────────────────────

    /// Seed every cell in row-major order.
    ///
    /// Species are rolled in priority order and only the first success
    /// places an agent, so later rolls for a cell are skipped once one
    /// succeeds.  An all-zero mix places nothing and draws nothing.
    pub(crate) fn populate(&mut self) {
        let odds = self.mix.in_priority_order();
        if odds.iter().all(|&p| p == 0.0) {
            return;
        }
        let locations: Vec<_> = self.field.locations().collect();
        for loc in locations {
            let chosen = Species::ALL
                .into_iter()
                .zip(odds)
                .find(|&(_, p)| self.rng.chance(p));
            if let Some((species, _)) = chosen {
                let agent = Agent::seeded(species, loc, &mut self.rng);
                self.population.insert(agent, &mut self.field);
            }
        }
        debug!(agents = self.population.len(), counts = %self.population.counts(), "populated");
    }
}
