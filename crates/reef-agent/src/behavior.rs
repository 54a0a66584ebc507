use reef_core::{AgentId, RandomSource};
use reef_field::Field;

use crate::{Population, Role, StepContext, drifter, predator, prey};

/// Run one step of behavior for agent `id`.
///
/// Dead agents are skipped: an agent eaten earlier in the same step does
/// not act.
pub fn act<R: RandomSource>(
    id: AgentId,
    pop: &mut Population,
    field: &mut Field,
    ctx: &StepContext,
    rng: &mut R,
) {
    let agent = pop.get(id);
    if !agent.is_alive() {
        return;
    }
    match agent.species().role() {
        Role::Predator => predator::act(id, pop, field, ctx, rng),
        Role::Prey     => prey::act(id, pop, field, ctx, rng),
        Role::Drifter  => drifter::act(id, pop, field, ctx, rng),
    }
}
