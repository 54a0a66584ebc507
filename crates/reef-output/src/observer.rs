//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use reef_agent::Population;
use reef_core::SimConfig;
use reef_field::Field;
use reef_sim::{SimObserver, StepReport};
use tracing::warn;

use crate::row::{AgentSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every step and an agent
/// snapshot every `output_interval_steps` steps.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    interval_steps: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, snapshotting at the config's
    /// output interval.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            interval_steps: config.output_interval_steps,
            last_error:     None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; later errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, report: &StepReport, _field: &Field, population: &Population) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(report));
        self.store_err(result);

        if self.interval_steps == 0 || !report.step.is_multiple_of(self.interval_steps) {
            return;
        }
        let rows: Vec<AgentSnapshotRow> = population
            .ids()
            .zip(population.iter())
            .map(|(id, agent)| AgentSnapshotRow::new(report.step, id, agent))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_report: &StepReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
