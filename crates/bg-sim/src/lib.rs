//! `bg-sim` — the scheduler that drives every agent on a board.
//!
//! # Tick
//!
//! ```text
//! Sim::tick:
//!   ⓪ Signals  — apply queued LoadProgram / Start / Reset in arrival order.
//!   ① Motion   — advance every moving agent; arrivals occupy their new
//!                cell, pick up items there, and become Executing.
//!   ② Dispatch — every agent that was Executing before ① executes one
//!                node (agents that arrived in ① wait for the next tick).
//!   ③ Observe  — finished agents, tick end, and snapshots are reported.
//! ```
//!
//! Motion for all agents precedes dispatch for any agent, so no agent makes
//! two cell transitions in one tick.  Loading, starting, and resetting only
//! happen between ticks: directly through `&mut Sim`, or through a
//! [`ControlHandle`] whose signals are drained at the top of the next tick.
//!
//! # Quick-start
//!
//! ```rust
//! use bg_grid::Board;
//! use bg_sim::{NoopObserver, SimBuilder};
//!
//! let json = r#"[{"node": {"getBrickType": "EntryBrick", "getBrickCommand": "CommandNOP"},
//!                "bottom": {"node": {"getBrickType": "BasicBrick", "getBrickCommand": "CommandMove"}}}]"#;
//!
//! let mut sim = SimBuilder::new(Board::reference()?).build()?;
//! sim.deliver(json)?;
//! sim.run(&mut NoopObserver);
//! assert!(!sim.is_running());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod control;
pub mod error;
pub mod observer;
pub mod sim;
pub mod world;


pub use builder::SimBuilder;
pub use control::{ControlHandle, Signal};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use world::{AgentView, ItemState, WorldState};
