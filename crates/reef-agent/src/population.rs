//! The agent arena and its bookkeeping.
//!
//! # Id ranges
//!
//! ```text
//! 0 .. residents.len()                     residents (act this step)
//! residents.len() .. + nursery.len()       born this step (act next step)
//! ```
//!
//! Dead agents stay in the arena, flagged, until [`Population::settle`]
//! compacts it.  Their cells are cleared the moment they die, so the field
//! never refers to a dead agent.

use std::fmt;

use reef_core::{AgentId, Location};
use reef_field::Field;
use tracing::trace;

use crate::{Agent, Species};

// ── DeathCause ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeathCause {
    OldAge,
    Starvation,
    Disease,
    Overcrowding,
    Eaten,
}

impl DeathCause {
    pub const ALL: [DeathCause; 5] = [
        DeathCause::OldAge,
        DeathCause::Starvation,
        DeathCause::Disease,
        DeathCause::Overcrowding,
        DeathCause::Eaten,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeathCause::OldAge       => "old_age",
            DeathCause::Starvation   => "starvation",
            DeathCause::Disease      => "disease",
            DeathCause::Overcrowding => "overcrowding",
            DeathCause::Eaten        => "eaten",
        }
    }
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tally ─────────────────────────────────────────────────────────────────────

/// Births and deaths recorded since the last [`Population::settle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub births:    usize,
    /// Indexed by `DeathCause as usize`.
    pub deaths_by: [usize; 5],
}

impl Tally {
    #[inline]
    pub fn deaths(&self, cause: DeathCause) -> usize {
        self.deaths_by[cause as usize]
    }

    pub fn total_deaths(&self) -> usize {
        self.deaths_by.iter().sum()
    }
}

// ── SpeciesCounts ─────────────────────────────────────────────────────────────

/// Live agents per species, plus how many of them are infected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesCounts {
    /// Indexed by [`Species::index`].
    pub by_species: [usize; 5],
    pub infected:   usize,
}

impl SpeciesCounts {
    #[inline]
    pub fn get(&self, species: Species) -> usize {
        self.by_species[species.index()]
    }

    pub fn total(&self) -> usize {
        self.by_species.iter().sum()
    }

    /// Number of species with at least one live agent.
    pub fn species_present(&self) -> usize {
        self.by_species.iter().filter(|&&n| n > 0).count()
    }
}

impl fmt::Display for SpeciesCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for species in Species::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}: {}", species, self.get(species))?;
        }
        Ok(())
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Population {
    residents: Vec<Agent>,
    nursery:   Vec<Agent>,
    tally:     Tally,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of residents, dead or alive.  Residents are the agents that
    /// act in the current step.
    #[inline]
    pub fn len(&self) -> usize {
        self.residents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Agents born since the last settle.
    #[inline]
    pub fn nursery_len(&self) -> usize {
        self.nursery.len()
    }

    /// Resident ids in act order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.residents.len() as u32).map(AgentId)
    }

    /// Residents in act order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.residents.iter()
    }

    /// Look up a resident or a newborn.
    ///
    /// # Panics
    /// Panics if `id` is past the end of both ranges.
    pub fn get(&self, id: AgentId) -> &Agent {
        let i = id.index();
        match i.checked_sub(self.residents.len()) {
            None    => &self.residents[i],
            Some(j) => &self.nursery[j],
        }
    }

    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent {
        let i = id.index();
        match i.checked_sub(self.residents.len()) {
            None    => &mut self.residents[i],
            Some(j) => &mut self.nursery[j],
        }
    }

    /// Add a resident and place it on the field.
    pub fn insert(&mut self, agent: Agent, field: &mut Field) -> AgentId {
        debug_assert!(self.nursery.is_empty(), "insert between steps only");
        let id = AgentId(self.residents.len() as u32);
        field.place(id, agent.location());
        self.residents.push(agent);
        id
    }

    /// Add a newborn and place it on the field.  It becomes a resident at
    /// the next [`settle`](Self::settle).
    pub fn add_newborn(&mut self, agent: Agent, field: &mut Field) -> AgentId {
        let id = AgentId((self.residents.len() + self.nursery.len()) as u32);
        trace!(agent = %id, species = %agent.species(), at = %agent.location(), "born");
        field.place(id, agent.location());
        self.nursery.push(agent);
        self.tally.births += 1;
        id
    }

    /// Mark `id` dead and clear its cell.
    pub fn kill(&mut self, id: AgentId, cause: DeathCause, field: &mut Field) {
        let agent = self.get_mut(id);
        if !agent.is_alive() {
            return;
        }
        agent.mark_dead();
        let (species, at) = (agent.species(), agent.location());
        if field.object_at(at) == Some(id) {
            field.clear(at);
        }
        self.tally.deaths_by[cause as usize] += 1;
        trace!(agent = %id, %species, %at, %cause, "died");
    }

    /// Move `id` to `to`, keeping the field in step.
    pub fn relocate(&mut self, id: AgentId, to: Location, field: &mut Field) {
        let agent = self.get_mut(id);
        let from = agent.location();
        if field.object_at(from) == Some(id) {
            field.clear(from);
        }
        agent.set_location(to);
        field.place(id, to);
    }

    /// End-of-step compaction.
    ///
    /// Drops dead residents, appends living newborns in birth order, and
    /// rewrites every occupied cell with the survivor's new id.  Returns the
    /// births and deaths recorded since the previous settle.
    pub fn settle(&mut self, field: &mut Field) -> Tally {
        self.residents.retain(Agent::is_alive);
        self.residents.extend(self.nursery.drain(..).filter(Agent::is_alive));
        for (i, agent) in self.residents.iter().enumerate() {
            field.place(AgentId(i as u32), agent.location());
        }
        std::mem::take(&mut self.tally)
    }

    /// Remove every agent.  The field is not touched.
    pub fn clear(&mut self) {
        self.residents.clear();
        self.nursery.clear();
        self.tally = Tally::default();
    }

    /// Live residents per species.
    pub fn counts(&self) -> SpeciesCounts {
        let mut counts = SpeciesCounts::default();
        for agent in self.residents.iter().filter(|a| a.is_alive()) {
            counts.by_species[agent.species().index()] += 1;
            if agent.is_infected() {
                counts.infected += 1;
            }
        }
        counts
    }
}
