//! Rabbit and Whale.
//!
//! By day prey run the disease cycle, try to mate, graze krill from their
//! cell, then move or die of overcrowding.  By night they stay put and
//! regain one unit of food; disease still runs.

use reef_core::{AgentId, RandomSource};
use reef_field::Field;

use crate::lifecycle;
use crate::{Population, StepContext};

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
        find_food(id, pop, field);
        lifecycle::move_or_die(id, pop, field, rng);
    } else {
        pop.get_mut(id).feed(1);
        lifecycle::disease_cycle(id, pop, field, ctx, rng);
        lifecycle::dies_of_disease(id, pop, field, rng);
    }
}

/// Eat krill from the current cell up to the hunger cap.  Returns the
/// amount eaten.
pub fn find_food(id: AgentId, pop: &mut Population, field: &mut Field) -> u32 {
    let agent = pop.get(id);
    let eaten = field.eat_krill(agent.appetite(), agent.location());
    pop.get_mut(id).feed(eaten);
    eaten
}
