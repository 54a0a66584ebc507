//! Simulation observer trait for progress reporting and data collection.

use reef_agent::Population;
use reef_field::Field;

use crate::StepReport;

/// Callbacks invoked by [`Simulator::simulate`][crate::Simulator::simulate]
/// around every step.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, report: &StepReport, _: &Field, _: &Population) {
///         if report.step % self.every == 0 {
///             println!("{report}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before step `step` runs.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after each step with the step's report and read-only access to
    /// the settled field and population.
    fn on_step_end(&mut self, _report: &StepReport, _field: &Field, _population: &Population) {}

    /// Called once when the run stops, whether the step budget ran out or
    /// the population stopped being viable.
    fn on_sim_end(&mut self, _final_report: &StepReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
