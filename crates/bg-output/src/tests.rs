//! Integration tests for bg-output.

use std::path::Path;

use tempfile::TempDir;

use bg_grid::Board;
use bg_program::{BrickKind, Command, ProgramBuilder};
use bg_sim::{Sim, SimBuilder};

use crate::csv::{CsvTraceWriter, EVENT_HEADER, SNAPSHOT_HEADER};
use crate::row::{AgentSnapshotRow, RunEventRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult, TraceObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn records(path: &Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

fn headers(path: &Path) -> Vec<String> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.headers().unwrap().iter().map(str::to_owned).collect()
}

fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
    AgentSnapshotRow {
        agent_id,
        tick,
        x:             2,
        y:             2,
        facing:        0,
        phase:         "moving",
        remain_frames: 5,
        fx:            2.75,
        fy:            2.0,
        front:         true,
        left:          false,
        right:         true,
        back:          false,
    }
}

/// Reference board; `root → move → move`, started.
fn two_moves() -> Sim {
    let mut b = ProgramBuilder::new();
    let root = b.add(BrickKind::Entry, Command::Root, "");
    b.chain(root, &[
        (BrickKind::Basic, Command::Move, ""),
        (BrickKind::Basic, Command::Move, ""),
    ]);
    let mut sim = SimBuilder::new(Board::reference().unwrap())
        .program(b.build())
        .build()
        .unwrap();
    sim.start();
    sim
}

/// Fails every write.
struct BrokenWriter {
    finishes: usize,
}

impl TraceWriter for BrokenWriter {
    fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        Err(OutputError::Io(std::io::Error::other("disk full")))
    }
    fn write_event(&mut self, _row: &RunEventRow) -> OutputResult<()> {
        Err(OutputError::Io(std::io::Error::other("event sink gone")))
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finishes += 1;
        Ok(())
    }
}

// ── CsvTraceWriter ────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir.path().join("agent_snapshots.csv")), SNAPSHOT_HEADER);
        assert_eq!(headers(&dir.path().join("run_events.csv")), EVENT_HEADER);
    }

    #[test]
    fn snapshot_columns() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 7), snap_row(1, 7)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("agent_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");       // agent_id
        assert_eq!(&rows[0][1], "7");       // tick
        assert_eq!(&rows[0][5], "moving");  // phase
        assert_eq!(&rows[0][7], "2.7500");  // fx
        assert_eq!(&rows[0][8], "2.0000");  // fy
        assert_eq!(rows[0].iter().skip(9).collect::<Vec<_>>(), ["1", "0", "1", "0"]);
    }

    #[test]
    fn event_columns() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_event(&RunEventRow {
            tick:     3,
            agent_id: 0,
            event:    "finished",
            detail:   "end of program".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("run_events.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "0", "finished", "end of program"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        let result = CsvTraceWriter::new(&dir.path().join("nope"));
        assert!(result.is_err());
    }
}

// ── TraceObserver ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn run_writes_snapshots_and_events() {
        let dir = tmp();
        let mut sim = two_moves();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        let ticks = sim.run(&mut obs);
        assert!(obs.take_error().is_none());
        drop(obs);

        // One agent, one snapshot per tick.
        let snaps = records(&dir.path().join("agent_snapshots.csv"));
        assert_eq!(snaps.len() as u64, ticks);
        let last = &snaps[snaps.len() - 1];
        assert_eq!((&last[2], &last[3]), ("4", "2"));
        assert_eq!(&last[5], "idle");

        let events = records(&dir.path().join("run_events.csv"));
        let events: Vec<Vec<&str>> = events.iter().map(|r| r.iter().collect()).collect();
        assert_eq!(events, vec![
            vec!["22", "0", "item_collected", "6"],
            vec!["22", "0", "finished", "end of program"],
        ]);
    }

    #[test]
    fn mid_move_snapshot_is_interpolated() {
        let dir = tmp();
        let mut sim = two_moves();
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        sim.run_ticks(7, &mut obs);
        obs.finish();
        drop(obs);

        let snaps = records(&dir.path().join("agent_snapshots.csv"));
        let t6 = &snaps[6];
        assert_eq!(&t6[1], "6");
        assert_eq!(&t6[5], "moving");
        assert_eq!(&t6[6], "5");
        assert_eq!(&t6[7], "2.7500");
    }

    #[test]
    fn first_error_kept() {
        let mut sim = two_moves();
        let mut obs = TraceObserver::new(BrokenWriter { finishes: 0 });
        sim.run(&mut obs);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finishes, 1);
    }
}
