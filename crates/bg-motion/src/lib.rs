//! `bg-motion` — the in-between frames of a one-cell move.
//!
//! # Movement model
//!
//! A move is a [`Motion`] from one cell to its neighbour lasting `total`
//! ticks:
//!
//! 1. The scheduler creates it with `remaining = total` when a move is
//!    dispatched.
//! 2. Each tick, [`Motion::advance`] decrements `remaining`; the tick it
//!    reaches zero the move is complete and the agent occupies the
//!    destination cell.
//! 3. Between those points [`Motion::grid_position`] gives the fractional
//!    grid-space position, easing out quadratically into the destination:
//!
//! ```text
//! position = destination − direction · (remaining / total)²
//! ```
//!
//! Screen projection is left to the host (see `bg_grid::IsoProjection`).

pub mod state;


pub use state::Motion;
