//! Per-agent motion state.

use bg_core::{GridPos, Vec2i};

/// An in-progress move between two adjacent cells.
///
/// Exists only while the agent is strictly between cells; the scheduler
/// drops it the tick [`advance`](Self::advance) reports completion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    /// Cell the agent left.
    pub from:      GridPos,
    /// Unit step being taken.
    pub dir:       Vec2i,
    /// Ticks the whole move takes.  Always at least 1.
    pub total:     u32,
    /// Ticks still to go.
    pub remaining: u32,
}

impl Motion {
    /// Start a move from `from` along `dir` lasting `total` ticks
    /// (clamped to at least 1).
    pub fn start(from: GridPos, dir: Vec2i, total: u32) -> Self {
        let total = total.max(1);
        Self { from, dir, total, remaining: total }
    }

    #[inline]
    pub fn destination(&self) -> GridPos {
        self.from + self.dir
    }

    /// Step one tick.  Returns `true` on the tick the move completes.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Ticks already spent.
    #[inline]
    pub fn elapsed(&self) -> u32 {
        self.total - self.remaining
    }

    /// Share of the step still to be covered: `(remaining / total)²`.
    pub fn remaining_fraction(&self) -> f32 {
        let r = self.remaining as f32 / self.total as f32;
        r * r
    }

    /// Fractional grid-space position for this tick.
    pub fn grid_position(&self) -> (f32, f32) {
        let dest = self.destination();
        let k = self.remaining_fraction();
        (
            dest.x as f32 - self.dir.x as f32 * k,
            dest.y as f32 - self.dir.y as f32 * k,
        )
    }
}
