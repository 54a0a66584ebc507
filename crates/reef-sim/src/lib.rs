//! `reef-sim` — the step loop for the reef ecosystem simulation.
//!
//! # One step
//!
//! ```text
//! ① Clock     — advance step and hour; a new day every hours_per_day.
//! ② Daylight  — copy the clock's day/night flag onto the field.
//! ③ Weather   — one weather tick.
//! ④ Act       — every resident acts once, in population order.  Deaths
//!               clear their cell at once; births go to the nursery.
//! ⑤ Settle    — drop the dead, admit surviving newborns.
//! ⑥ Krill     — regrow krill under the current weather.
//! ⑦ Report    — build a StepReport for observers.
//! ```
//!
//! [`Simulator::simulate`] asks a [`Viability`] check before every step and
//! stops early once it fails.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use reef_core::{SimConfig, SimRng};
//! use reef_sim::{MixedTrophicLevels, NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let mut sim = SimBuilder::new(config, SimRng::new(42)).build()?;
//! let steps = sim.run_long(&mut NoopObserver, &MixedTrophicLevels);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;
pub mod viability;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::StepReport;
pub use sim::Simulator;
pub use viability::{AlwaysViable, MixedTrophicLevels, Viability};
