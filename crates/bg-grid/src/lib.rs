//! `bg-grid` — the static board and the queries agents make against it.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`cell`]       | `CellFlags` — per-cell bitmask                              |
//! | [`grid`]       | `GridModel` — bounds-checked cell queries                   |
//! | [`board`]      | `Board`, `Spawn` — grid plus agent spawns and item cells    |
//! | [`legality`]   | `Legality` — which relative directions are traversable      |
//! | [`projection`] | `IsoProjection` — grid → screen mapping for hosts            |
//! | [`error`]      | `GridError`, `GridResult<T>`                                |
//!
//! Every query fails closed: positions outside the board are never walkable
//! and never panic.

pub mod board;
pub mod cell;
pub mod error;
pub mod grid;
pub mod legality;
pub mod projection;


pub use board::{Board, Spawn};
pub use cell::CellFlags;
pub use error::{GridError, GridResult};
pub use grid::GridModel;
pub use legality::Legality;
pub use projection::IsoProjection;
