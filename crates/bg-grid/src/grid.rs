//! Immutable cell storage with fail-closed queries.

use bg_core::GridPos;

use crate::{CellFlags, GridError, GridResult};

/// Row-major cell bitmasks for a `width × height` board.
///
/// Built once per board load and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridModel {
    width:  usize,
    height: usize,
    cells:  Vec<CellFlags>,
}

impl GridModel {
    /// Build from rows indexed `[y][x]`.  All rows must have equal length.
    pub fn from_rows(rows: &[Vec<u32>]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::Ragged { row, expected: width, got: cols.len() });
            }
            cells.extend(cols.iter().copied().map(CellFlags));
        }

        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `pos` lies on the board.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.offset(pos).is_some()
    }

    /// Cell bits at `pos`, or `None` when `pos` is off the board.
    #[inline]
    pub fn cell_flags(&self, pos: GridPos) -> Option<CellFlags> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// `true` only for on-board cells with the walkable bit set.
    #[inline]
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.cell_flags(pos).is_some_and(CellFlags::is_walkable)
    }

    /// Iterate `(pos, flags)` in row-major order (y outer, x inner).
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellFlags)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &flags)| {
            let pos = GridPos::new((i % self.width) as i32, (i / self.width) as i32);
            (pos, flags)
        })
    }

    fn offset(&self, pos: GridPos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
