//! Simulation observer trait for display and data collection.

use bg_core::{AgentId, ItemId, Tick};
use bg_exec::Termination;

use crate::WorldState;

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — finish reporter
///
/// ```rust,ignore
/// struct Finished;
///
/// impl SimObserver for Finished {
///     fn on_agent_finished(&mut self, tick: Tick, agent: AgentId, why: &Termination) {
///         println!("{tick}: {agent} finished ({why})");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, after queued signals are applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `dispatched` is the number of agents that executed a node this tick.
    fn on_tick_end(&mut self, _tick: Tick, _dispatched: usize) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after
    /// `on_tick_end`, with the state as it stands at the end of the tick.
    fn on_snapshot(&mut self, _tick: Tick, _world: &WorldState) {}

    /// An agent arrived on a cell holding a visible item.
    fn on_item_collected(&mut self, _tick: Tick, _agent: AgentId, _item: ItemId) {}

    /// An agent's run ended this tick.
    fn on_agent_finished(&mut self, _tick: Tick, _agent: AgentId, _termination: &Termination) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
