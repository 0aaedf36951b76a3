//! Grid → screen mapping for hosts that draw the board isometrically.
//!
//! Not used by the interpreter itself; hosts apply it to the fractional grid
//! positions the scheduler exposes each tick.

use bg_core::GridPos;

use crate::GridModel;

/// Isometric projection with a pixel origin and a cell size.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsoProjection {
    pub origin_x:  f32,
    pub origin_y:  f32,
    /// Width in pixels of one cell's diamond.
    pub cell_size: f32,
}

impl IsoProjection {
    pub fn new(origin_x: f32, origin_y: f32, cell_size: f32) -> Self {
        Self { origin_x, origin_y, cell_size }
    }

    /// Screen position of fractional grid coordinates `(x, y)`.
    #[inline]
    pub fn project(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.origin_x + (x - y) * self.cell_size / 2.0,
            self.origin_y + (x + y) * self.cell_size / 4.0,
        )
    }

    /// Draw layer for a cell: higher layers are drawn later (in front).
    #[inline]
    pub fn layer(pos: GridPos) -> i32 {
        pos.x + pos.y
    }

    /// Number of distinct layers on `grid`.
    #[inline]
    pub fn layer_count(grid: &GridModel) -> usize {
        grid.width() + grid.height() - 1
    }
}

impl Default for IsoProjection {
    /// Renderer constants of the reference board.
    fn default() -> Self {
        Self::new(320.0, 480.0, 124.0)
    }
}
