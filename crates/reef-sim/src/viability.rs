//! Continue-or-stop checks consulted before every step.

use reef_agent::{Population, Role, Species};
use reef_field::Field;

pub trait Viability {
    /// `true` if the run should take another step.
    fn is_viable(&self, field: &Field, population: &Population) -> bool;
}

/// Viable while at least one predator species and one prey species have a
/// live member.
#[derive(Copy, Clone, Debug, Default)]
pub struct MixedTrophicLevels;

impl Viability for MixedTrophicLevels {
    fn is_viable(&self, _field: &Field, population: &Population) -> bool {
        let counts = population.counts();
        let alive = |role: Role| {
            Species::ALL
                .iter()
                .any(|&s| s.role() == role && counts.get(s) > 0)
        };
        alive(Role::Predator) && alive(Role::Prey)
    }
}

/// Never stops a run early.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysViable;

impl Viability for AlwaysViable {
    fn is_viable(&self, _field: &Field, _population: &Population) -> bool {
        true
    }
}

impl<F> Viability for F
where
    F: Fn(&Field, &Population) -> bool,
{
    fn is_viable(&self, field: &Field, population: &Population) -> bool {
        self(field, population)
    }
}
