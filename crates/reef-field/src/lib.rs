//! `reef-field` — the spatial world agents live in.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`field`]   | `Field` (occupancy grid, krill grid, day flag)              |
//! | [`weather`] | `Weather`, `WeatherMode` (Normal / Raining / Drought)       |
//!
//! The field never owns agents.  Grid cells hold `Option<AgentId>` handles
//! into the population arena kept by `reef-agent`.

pub mod field;
pub mod weather;

#[cfg(test)]
mod tests;

pub use field::{Field, MAX_KRILL, STARTING_KRILL};
pub use weather::{Weather, WeatherMode};
