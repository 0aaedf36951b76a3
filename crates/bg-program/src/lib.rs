//! `bg-program` — the block program as an indexed arena.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`node`]    | `ProgramNode`, `BrickKind`, `Command`, `Successor`              |
//! | [`program`] | `Program` (arena + root + function table), `ProgramBuilder`     |
//! | [`loader`]  | `Program::from_json`, `load_program_reader`, `load_program_json` |
//! | [`error`]   | `ProgramError`, `ProgramResult<T>`                              |
//!
//! # Model
//!
//! The editor produces trees where each brick has two links, `right` and
//! `bottom`.  Here every brick becomes a [`ProgramNode`] in a flat `Vec`,
//! and links are `Option<NodeId>` indices into it.  Function calls never
//! mutate the graph: `TailBrick`s are resolved through a
//! `function id → NodeId` table built once when the program is loaded.
//!
//! A `Program` is immutable.  Delivering a new program replaces it
//! wholesale; the scheduler resets every agent before the new one becomes
//! visible, so `NodeId`s never outlive the program that issued them.

pub mod error;
pub mod loader;
pub mod node;
pub mod program;


pub use error::{ProgramError, ProgramResult};
pub use loader::{load_program_json, load_program_reader};
pub use node::{BrickKind, Command, ProgramNode, Successor};
pub use program::{Program, ProgramBuilder};
