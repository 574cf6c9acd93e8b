//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `state_counts.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, StateCountsRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    counts:    Writer<File>,
    snapshots: Writer<File>,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut counts = Writer::from_path(dir.join("state_counts.csv"))?;
        counts.write_record([
            "run",
            "step",
            "susceptible",
            "infectious",
            "recovered",
            "dead",
            "quarantined",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["run", "step", "agent_id", "x", "y", "state"])?;

        Ok(Self { counts, snapshots })
    }
}

impl OutputWriter for CsvWriter {
    fn write_counts(&mut self, row: &StateCountsRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.run.to_string(),
            row.step.to_string(),
            row.susceptible.to_string(),
            row.infectious.to_string(),
            row.recovered.to_string(),
            row.dead.to_string(),
            row.quarantined.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.run.to_string(),
                row.step.to_string(),
                row.agent_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.counts.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
