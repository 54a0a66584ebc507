//! Fox and Megalodon.
//!
//! By day a predator runs the disease cycle, tries to mate, then hunts.
//! By night it skips disease and mating and only hunts when hungry, or
//! with its species' small night-activity chance.

use reef_core::{AgentId, Location, RandomSource};
use reef_field::Field;
use tracing::trace;

use crate::lifecycle::{self, PREY_INFECTION};
use crate::{DeathCause, Population, StepContext};

pub fn act<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    ctx: &StepContext,
    rng: &mut R,
) {
    if !lifecycle::age(id, pop, field) || !lifecycle::hunger(id, pop, field) {
        return;
    }

    if ctx.is_day {
        lifecycle::disease_cycle(id, pop, field, ctx, rng);
        if lifecycle::dies_of_disease(id, pop, field, rng) {
            return;
        }
        lifecycle::mate(id, pop, field, rng);
        hunt(id, pop, field, rng);
    } else if wants_to_hunt_at_night(id, pop, rng) {
        hunt(id, pop, field, rng);
    }
}

/// Below the night-hunt threshold a predator always hunts; otherwise it
/// rolls its night-activity chance.
fn wants_to_hunt_at_night<R: RandomSource>(id: AgentId, pop: &Population, rng: &mut R) -> bool {
    let agent = pop.get(id);
    let traits = agent.species().traits();
    let food = agent.food_level().unwrap_or(0);
    food < traits.night_hunt_threshold || rng.chance(traits.night_activity)
}

/// Move onto a caught prey's cell, else to any free neighbor, else die of
/// overcrowding.
pub fn hunt<R: RandomSource>(id: AgentId, pop: &mut Population, field: &mut Field, rng: &mut R) {
    let at = pop.get(id).location();
    let target = match catch_prey(id, pop, field, rng) {
        Some(loc) => Some(loc),
        None      => field.free_adjacent_location(at, rng),
    };
    match target {
        Some(to) => pop.relocate(id, to, field),
        None     => pop.kill(id, DeathCause::Overcrowding, field),
    }
}

/// Eat the first adjacent animal in this species' diet.  Returns the cell
/// the prey occupied, now empty.
pub fn catch_prey<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    rng: &mut R,
) -> Option<Location> {
    let hunter = pop.get(id);
    let species = hunter.species();

    let (prey_id, loc, value) = field
        .adjacent_locations(hunter.location(), rng)
        .into_iter()
        .filter_map(|loc| field.object_at(loc).map(|other| (other, loc)))
        .find_map(|(other, loc)| {
            let prey = pop.get(other);
            if !prey.is_alive() {
                return None;
            }
            species.food_value(prey.species()).map(|value| (other, loc, value))
        })?;

    let prey_infected = pop.get(prey_id).is_infected();
    pop.kill(prey_id, DeathCause::Eaten, field);
    if prey_infected && rng.chance(PREY_INFECTION) {
        pop.get_mut(id).infect();
        trace!(agent = %id, from = %prey_id, "disease caught from prey");
    }
    pop.get_mut(id).feed(value);
    Some(loc)
}
