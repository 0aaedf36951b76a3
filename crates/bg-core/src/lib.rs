//! `bg-core` — foundational types for the `brickgrid` block-program interpreter.
//!
//! This crate is a dependency of every other `bg-*` crate.  It has no `bg-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`, `ItemId`                         |
//! | [`geom`]        | `GridPos`, `Vec2i`, `Facing`, `RelDir`                |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `BgError`, `BgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{BgError, BgResult};
pub use geom::{Facing, GridPos, RelDir, Vec2i};
pub use ids::{AgentId, ItemId, NodeId};
pub use time::Tick;
