//! `reef-output` — simulation output writers for the reef simulation.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `step_summaries.csv`, `agent_snapshots.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `reef_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use reef_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, sim.config());
//! sim.run_long(&mut obs, &MixedTrophicLevels);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
