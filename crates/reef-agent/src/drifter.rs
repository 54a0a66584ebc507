//! Jellyfish: no hunger, no day/night distinction, and breeding without a
//! partner.

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
    if !lifecycle::age(id, pop, field) {
        return;
    }
    lifecycle::disease_cycle(id, pop, field, ctx, rng);
    if lifecycle::dies_of_disease(id, pop, field, rng) {
        return;
    }
    lifecycle::give_birth(id, pop, field, rng);
    lifecycle::move_or_die(id, pop, field, rng);
}
