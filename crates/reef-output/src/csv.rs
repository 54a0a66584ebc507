//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_summaries.csv`
//! - `agent_snapshots.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, StepSummaryRow};

pub const SUMMARY_HEADER: [&str; 14] = [
    "step", "day", "hour", "is_day", "weather", "fox", "megalodon", "rabbit", "whale",
    "jellyfish", "infected", "births", "deaths", "total_krill",
];

pub const SNAPSHOT_HEADER: [&str; 9] = [
    "step", "agent_id", "species", "row", "col", "age", "food_level", "male", "infected",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.agent_id.to_string(),
                row.species.to_owned(),
                row.row.to_string(),
                row.col.to_string(),
                row.age.to_string(),
                row.food_level.map(|f| f.to_string()).unwrap_or_default(),
                (row.male as u8).to_string(),
                (row.infected as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.day.to_string(),
            row.hour.to_string(),
            (row.is_day as u8).to_string(),
            row.weather.to_owned(),
            row.fox.to_string(),
            row.megalodon.to_string(),
            row.rabbit.to_string(),
            row.whale.to_string(),
            row.jellyfish.to_string(),
            row.infected.to_string(),
            row.births.to_string(),
            row.deaths.to_string(),
            row.total_krill.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
