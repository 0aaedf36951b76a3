//! Which of the four relative directions an agent can step into.

use bg_core::{Facing, GridPos, RelDir};

use crate::GridModel;

/// Traversability of the four cells around an agent, keyed by direction
/// relative to its facing.
///
/// A snapshot: it is not updated when the agent turns or moves.  The
/// interpreter re-evaluates before every dispatch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Legality {
    pub front: bool,
    pub left:  bool,
    pub back:  bool,
    pub right: bool,
}

impl Legality {
    /// Evaluate all four directions from `pos` facing `facing`.
    ///
    /// Direction vectors are the forward vector and its successive left
    /// quarter turns (front, left, back, right).  A target is legal iff it
    /// is on the board and walkable; off-board targets are `false`.
    pub fn evaluate(grid: &GridModel, pos: GridPos, facing: Facing) -> Self {
        let mut open = [false; 4];
        let mut dir = facing.vector();
        for slot in &mut open {
            *slot = grid.is_walkable(pos + dir);
            dir = dir.rotate_left();
        }
        Self::from_array(open)
    }

    /// Build from `[front, left, back, right]`.
    #[inline]
    pub fn from_array([front, left, back, right]: [bool; 4]) -> Self {
        Self { front, left, back, right }
    }

    /// `[front, left, back, right]`, indexable by `RelDir::index`.
    #[inline]
    pub fn as_array(self) -> [bool; 4] {
        [self.front, self.left, self.back, self.right]
    }

    #[inline]
    pub fn get(self, dir: RelDir) -> bool {
        self.as_array()[dir.index()]
    }

    /// `true` when every neighbour is blocked.
    #[inline]
    pub fn is_boxed_in(self) -> bool {
        !(self.front || self.left || self.back || self.right)
    }
}
