//! `bg-output` — run traces for brickgrid.
//!
//! | Writer             | Files created                           |
//! |--------------------|-----------------------------------------|
//! | [`CsvTraceWriter`] | `agent_snapshots.csv`, `run_events.csv` |
//!
//! Writers implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `bg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bg_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{AgentSnapshotRow, RunEventRow};
pub use writer::TraceWriter;
