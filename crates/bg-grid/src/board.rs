//! Board loading: grid cells plus agent spawns and item placements.
//!
//! A board is fully described by its cell bitmasks (see [`CellFlags`]).
//! Loading scans the rows once, in row-major order, and derives the spawn
//! and item lists; `AgentId`s and `ItemId`s are indices into those lists.

use tracing::info;

use bg_core::{Facing, GridPos};

use crate::{CellFlags, GridError, GridModel, GridResult};

/// Where an agent starts and which way it faces.  Reset restores these.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawn {
    pub pos:    GridPos,
    pub facing: Facing,
}

/// A loaded board.  Immutable after construction; reset rebuilds agent and
/// item state from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub grid:   GridModel,
    pub spawns: Vec<Spawn>,
    pub items:  Vec<GridPos>,
}

impl Board {
    /// The 5×5 reference board: a walkable ring of item cells around a
    /// walkable interior, one agent in the centre facing `SouthEast`.
    pub const REFERENCE: [[u32; 5]; 5] = [
        [0, 3, 3, 3, 0],
        [3, 1, 1, 1, 3],
        [3, 1, 5, 1, 3],
        [3, 1, 1, 1, 3],
        [0, 3, 3, 3, 0],
    ];

    /// Parse a board from rows indexed `[y][x]`.
    ///
    /// # Errors
    ///
    /// Ragged or empty input, a spawn whose facing bits are outside `0..=3`,
    /// or a spawn bit on a non-walkable cell.
    pub fn from_rows(rows: &[Vec<u32>]) -> GridResult<Self> {
        let grid = GridModel::from_rows(rows)?;

        let mut spawns = Vec::new();
        let mut items = Vec::new();
        for (pos, flags) in grid.iter() {
            if flags.has_spawn() {
                if !flags.is_walkable() {
                    return Err(GridError::SpawnOnBlockedCell(pos));
                }
                let facing = Facing::from_raw(flags.facing_bits())
                    .map_err(|source| GridError::InvalidFacing { pos, source })?;
                spawns.push(Spawn { pos, facing });
            }
            if flags.is_walkable() && flags.has_item() {
                items.push(pos);
            }
        }

        info!(
            width  = grid.width(),
            height = grid.height(),
            agents = spawns.len(),
            items  = items.len(),
            "board loaded"
        );

        Ok(Self { grid, spawns, items })
    }

    /// Load [`Board::REFERENCE`].
    pub fn reference() -> GridResult<Self> {
        let rows: Vec<Vec<u32>> = Self::REFERENCE.iter().map(|r| r.to_vec()).collect();
        Self::from_rows(&rows)
    }

    /// Cell bits at `pos`; convenience passthrough to the grid.
    #[inline]
    pub fn cell_flags(&self, pos: GridPos) -> Option<CellFlags> {
        self.grid.cell_flags(pos)
    }
}
