//! `reef-agent` — agents, species, and the rules they act by.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`species`]     | `Species`, `Role`, `SpeciesTraits` constant tables        |
//! | [`agent`]       | `Agent` — per-individual life-cycle state                 |
//! | [`population`]  | `Population` arena, `SpeciesCounts`, `Tally`, `DeathCause`|
//! | [`context`]     | `StepContext` — day flag and disease rate for one step    |
//! | [`lifecycle`]   | Shared rules: aging, hunger, disease, mating, moving      |
//! | [`predator`]    | Fox / Megalodon behavior (hunt)                           |
//! | [`prey`]        | Rabbit / Whale behavior (forage, rest at night)           |
//! | [`drifter`]     | Jellyfish behavior (no hunger, asexual breeding)          |
//! | [`behavior`]    | `act` — dispatch by species role                          |
//!
//! # Design notes
//!
//! Agents live in one arena owned by [`Population`]; the field grid stores
//! `AgentId` handles into it.  Every rule is a free function over
//! `(AgentId, &mut Population, &mut Field, …)` so a rule can touch its own
//! agent, its neighbors, and the grid without reference cycles.
//!
//! Births during a step go to a separate nursery inside `Population` and
//! get ids past the resident range.  They are visible on the field at once
//! (a later agent may eat one) but only become residents, and so only act,
//! after [`Population::settle`] at the end of the step.

pub mod agent;
pub mod behavior;
pub mod context;
pub mod drifter;
pub mod lifecycle;
pub mod population;
pub mod predator;
pub mod prey;
pub mod species;


pub use agent::Agent;
pub use behavior::act;
pub use context::StepContext;
pub use population::{DeathCause, Population, SpeciesCounts, Tally};
pub use species::{Role, Species, SpeciesTraits};
