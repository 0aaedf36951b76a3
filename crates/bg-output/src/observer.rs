//! `TraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use bg_core::{AgentId, ItemId, Tick};
use bg_exec::Termination;
use bg_sim::{SimObserver, WorldState};

use crate::row::{AgentSnapshotRow, RunEventRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots and events to any
/// [`TraceWriter`].
///
/// `SimObserver` methods have no return value, so the first write error is
/// stored; check [`take_error`][Self::take_error] after `sim.run()` returns.
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the writer.  `Sim::run` does this through `on_run_end`; call it
    /// when driving the sim with `tick` / `run_ticks` instead.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn event(&mut self, tick: Tick, agent: AgentId, event: &'static str, detail: String) {
        let row = RunEventRow { tick: tick.0, agent_id: agent.0, event, detail };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, world: &WorldState) {
        let rows: Vec<AgentSnapshotRow> = world
            .agents()
            .iter()
            .map(|a| AgentSnapshotRow::new(tick.0, a))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_item_collected(&mut self, tick: Tick, agent: AgentId, item: ItemId) {
        self.event(tick, agent, "item_collected", item.0.to_string());
    }

    fn on_agent_finished(&mut self, tick: Tick, agent: AgentId, termination: &Termination) {
        self.event(tick, agent, "finished", termination.to_string());
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        self.finish();
    }
}
