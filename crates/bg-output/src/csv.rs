//! CSV trace backend.
//!
//! Creates two files in the output directory:
//! - `agent_snapshots.csv`
//! - `run_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{AgentSnapshotRow, OutputResult, RunEventRow};

pub const SNAPSHOT_HEADER: [&str; 13] = [
    "agent_id", "tick", "x", "y", "facing", "phase", "remain_frames",
    "fx", "fy", "front", "left", "right", "back",
];

pub const EVENT_HEADER: [&str; 4] = ["tick", "agent_id", "event", "detail"];

/// Writes a run trace to two CSV files.
pub struct CsvTraceWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut events = Writer::from_path(dir.join("run_events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        Ok(Self { snapshots, events, finished: false })
    }
}

fn flag(b: bool) -> String {
    (b as u8).to_string()
}

impl TraceWriter for CsvTraceWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.facing.to_string(),
                row.phase.to_owned(),
                row.remain_frames.to_string(),
                format!("{:.4}", row.fx),
                format!("{:.4}", row.fy),
                flag(row.front),
                flag(row.left),
                flag(row.right),
                flag(row.back),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &RunEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.agent_id.to_string(),
            row.event.to_owned(),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
