//! `bg-exec` — the agent execution state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`agent`]       | `AgentState`, `Phase` — position, facing, cursor, motion      |
//! | [`step`]        | `Step`, `Action`, `Continuation`, `Termination`               |
//! | [`interpreter`] | `decide` — one program node → one `Step`                      |
//!
//! # Design notes
//!
//! Executing one node is split in two, like an intent/apply loop:
//!
//! 1. **Decide** (pure): [`interpreter::decide`] reads the agent, its
//!    legality snapshot, and the program, and returns a [`Step`] describing
//!    the action to take and where control goes next.
//! 2. **Apply**: [`AgentState::apply`] performs the action (turn, or start a
//!    [`bg_motion::Motion`]) and moves the cursor.
//!
//! A move's continuation is resolved when the move starts and held in
//! [`Phase::Moving`] until arrival, so nothing about control flow is
//! recomputed mid-motion.
//!
//! Nothing here fails.  Ends of programs, malformed links, unknown commands,
//! and bad call arguments are all [`Termination`] values that put the agent
//! back to [`Phase::Idle`].

pub mod agent;
pub mod interpreter;
pub mod step;

#[cfg(test)]
mod tests;

pub use agent::{AgentState, Phase};
pub use interpreter::decide;
pub use step::{Action, Continuation, Step, Termination};
