//! Board-loading error type.

use thiserror::Error;

use bg_core::{BgError, GridPos};

/// Errors produced while building a board.  Queries never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },

    #[error("spawn at {pos}: {source}")]
    InvalidFacing {
        pos:    GridPos,
        #[source]
        source: BgError,
    },

    #[error("spawn at {0} is on a non-walkable cell")]
    SpawnOnBlockedCell(GridPos),
}

pub type GridResult<T> = Result<T, GridError>;
