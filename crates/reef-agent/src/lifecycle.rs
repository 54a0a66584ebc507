//! Rules shared by every species.
//!
//! Each function acts on one agent by id.  Functions that can kill return
//! `true` while the agent is still alive, so callers read as a chain of
//! early returns:
//!
//! ```ignore
//! if !lifecycle::age(id, pop, field) { return; }
//! if !lifecycle::hunger(id, pop, field) { return; }
//! ```
//!
//! # Draw order
//!
//! Random draws happen only where a decision is actually open: an infected
//! agent never rolls for spontaneous infection, an underage agent never
//! rolls to breed, and so on.  Tests that script a `RandomSource` rely on
//! this.

use reef_core::{AgentId, RandomSource};
use reef_field::Field;
use tracing::trace;

use crate::{Agent, DeathCause, Population, StepContext};

/// Per-step chance an uninfected agent becomes infected without contact.
pub const SPONTANEOUS_INFECTION: f64 = 0.001;

/// Per-step chance an infected agent dies of disease.
pub const DISEASE_DEATH: f64 = 0.01;

/// Chance an infected agent infects its partner when mating.
pub const MATING_INFECTION: f64 = 0.15;

/// Chance a predator is infected by eating an infected prey.
pub const PREY_INFECTION: f64 = 0.60;

/// Age by one step; dies of old age past the species' max age.
pub fn age(id: AgentId, pop: &mut Population, field: &mut Field) -> bool {
    if pop.get_mut(id).grow_older() {
        return true;
    }
    pop.kill(id, DeathCause::OldAge, field);
    false
}

/// Lose one unit of food; starves at zero.  No-op for species without
/// hunger.
pub fn hunger(id: AgentId, pop: &mut Population, field: &mut Field) -> bool {
    if pop.get_mut(id).grow_hungrier() {
        return true;
    }
    pop.kill(id, DeathCause::Starvation, field);
    false
}

/// Catch the disease (if healthy) or spread it to healthy neighbors (if
/// infected).
pub fn disease_cycle<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &Field,
    ctx: &StepContext,
    rng: &mut R,
) {
    let agent = pop.get(id);
    if !agent.is_infected() {
        if rng.chance(SPONTANEOUS_INFECTION) {
            pop.get_mut(id).infect();
            trace!(agent = %id, "caught disease");
        }
        return;
    }

    for loc in field.adjacent_locations(agent.location(), rng) {
        let Some(other) = field.object_at(loc) else { continue };
        if pop.get(other).is_infected() {
            continue;
        }
        if rng.chance(ctx.disease_spread_rate) {
            pop.get_mut(other).infect();
            trace!(agent = %other, from = %id, "disease spread");
        }
    }
}

/// Roll for death by disease.  Healthy agents never roll.  Returns `true`
/// if the agent died.
pub fn dies_of_disease<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    rng: &mut R,
) -> bool {
    if pop.get(id).is_infected() && rng.chance(DISEASE_DEATH) {
        pop.kill(id, DeathCause::Disease, field);
        return true;
    }
    false
}

/// First adjacent live conspecific of the opposite sex, in shuffled order.
pub fn find_mate<R: RandomSource>(
    id: AgentId,
    pop: &Population,
    field: &Field,
    rng: &mut R,
) -> Option<AgentId> {
    let agent = pop.get(id);
    field
        .adjacent_locations(agent.location(), rng)
        .into_iter()
        .filter_map(|loc| field.object_at(loc))
        .find(|&other| agent.can_mate_with(pop.get(other)))
}

/// Litter size for one mating: zero unless the agent is of breeding age
/// and the breeding roll succeeds, else uniform in `1..=max_litter`.
pub fn breed<R: RandomSource>(agent: &Agent, rng: &mut R) -> usize {
    let traits = agent.species().traits();
    if agent.age() >= traits.breeding_age && rng.chance(traits.breeding_probability) {
        rng.uniform_int(traits.max_litter as usize) + 1
    } else {
        0
    }
}

/// Place a litter on the free cells around the parent.
///
/// Free cells are collected before the breeding roll; the litter is cut
/// short when they run out.  Returns the number of newborns placed.
pub fn give_birth<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    rng: &mut R,
) -> usize {
    let parent = pop.get(id);
    let (species, at) = (parent.species(), parent.location());
    let mut free = field.free_adjacent_locations(at, rng);
    let litter = breed(parent, rng);
    free.truncate(litter);
    for &loc in &free {
        let young = Agent::newborn(species, loc, rng);
        pop.add_newborn(young, field);
    }
    free.len()
}

/// Look for a partner; if one is found, try to give birth and roll for
/// passing on the disease.  Returns the number of newborns placed.
pub fn mate<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    rng: &mut R,
) -> usize {
    let Some(partner) = find_mate(id, pop, field, rng) else {
        return 0;
    };
    let born = give_birth(id, pop, field, rng);
    if pop.get(id).is_infected() && rng.chance(MATING_INFECTION) {
        pop.get_mut(partner).infect();
        trace!(agent = %partner, from = %id, "disease passed while mating");
    }
    born
}

/// Step to a random free neighbor, or die of overcrowding if there is
/// none.  Returns `true` if the agent moved.
pub fn move_or_die<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    rng: &mut R,
) -> bool {
    let at = pop.get(id).location();
    match field.free_adjacent_location(at, rng) {
        Some(to) => {
            pop.relocate(id, to, field);
            true
        }
        None => {
            pop.kill(id, DeathCause::Overcrowding, field);
            false
        }
    }
}
