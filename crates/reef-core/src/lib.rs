//! `reef-core` — foundational types for the `reef` ecosystem simulation.
//!
//! This crate is a dependency of every other `reef-*` crate.  It has no
//! `reef-*` dependencies and few external ones (`rand`, `thiserror`,
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                |
//! | [`location`]    | `Location` (row, col)                                    |
//! | [`rng`]         | `RandomSource` contract, `SimRng`, `ScriptedSource`      |
//! | [`time`]        | `Clock` (step, hour, day, day/night window)              |
//! | [`config`]      | `SimConfig`, `PopulationMix`                             |
//! | [`error`]       | `ReefError`, `ReefResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod location;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PopulationMix, SimConfig};
pub use error::{ReefError, ReefResult};
pub use ids::AgentId;
pub use location::Location;
pub use rng::{RandomSource, ScriptedSource, SimRng};
pub use time::Clock;
