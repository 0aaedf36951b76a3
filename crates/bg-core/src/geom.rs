//! Integer grid geometry: cell positions, direction vectors, and facings.
//!
//! # Axes
//!
//! Boards are indexed `[y][x]`.  `x` grows towards the screen's lower right
//! and `y` towards the lower left under the isometric projection, so the four
//! facings map to the four screen diagonals:
//!
//! | `Facing`    | value | forward vector |
//! |-------------|-------|----------------|
//! | `SouthEast` | 0     | `( 1,  0)`     |
//! | `NorthEast` | 1     | `( 0, -1)`     |
//! | `NorthWest` | 2     | `(-1,  0)`     |
//! | `SouthWest` | 3     | `( 0,  1)`     |
//!
//! Incrementing the facing value is a left turn.  Rotating a vector by
//! `(x, y) → (y, -x)` is the same quarter turn, which is how relative
//! directions are generated from the forward vector.

use std::fmt;
use std::ops::Add;

use crate::{BgError, BgResult};

// ── Vec2i ─────────────────────────────────────────────────────────────────────

/// A unit direction (or any small integer offset) on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quarter turn to the left: `(x, y) → (y, -x)`.
    #[inline]
    pub const fn rotate_left(self) -> Self {
        Self { x: self.y, y: -self.x }
    }
}

// ── GridPos ───────────────────────────────────────────────────────────────────

/// An integer cell coordinate.  May lie outside the board; legality queries
/// fail closed for such positions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Vec2i> for GridPos {
    type Output = GridPos;
    #[inline]
    fn add(self, rhs: Vec2i) -> GridPos {
        GridPos { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// Absolute facing of an agent.  Only the four valid values are
/// representable; raw board values are checked by [`Facing::from_raw`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Facing {
    #[default]
    SouthEast = 0,
    NorthEast = 1,
    NorthWest = 2,
    SouthWest = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] =
        [Facing::SouthEast, Facing::NorthEast, Facing::NorthWest, Facing::SouthWest];

    /// Decode a facing from board bits.  Anything outside `0..=3` is a
    /// configuration error.
    pub fn from_raw(raw: u32) -> BgResult<Self> {
        match raw {
            0 => Ok(Facing::SouthEast),
            1 => Ok(Facing::NorthEast),
            2 => Ok(Facing::NorthWest),
            3 => Ok(Facing::SouthWest),
            other => Err(BgError::InvalidFacing(other)),
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Forward unit vector for this facing.
    #[inline]
    pub const fn vector(self) -> Vec2i {
        match self {
            Facing::SouthEast => Vec2i::new(1, 0),
            Facing::NorthEast => Vec2i::new(0, -1),
            Facing::NorthWest => Vec2i::new(-1, 0),
            Facing::SouthWest => Vec2i::new(0, 1),
        }
    }

    /// Rotate by `quarter_turns` to the left (`(d + n) mod 4`).
    #[inline]
    pub fn turned(self, quarter_turns: u8) -> Facing {
        Facing::ALL[((self.value() + quarter_turns) % 4) as usize]
    }

    #[inline]
    pub fn turn_left(self) -> Facing {
        self.turned(1)
    }

    #[inline]
    pub fn turn_back(self) -> Facing {
        self.turned(2)
    }

    #[inline]
    pub fn turn_right(self) -> Facing {
        self.turned(3)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ── RelDir ────────────────────────────────────────────────────────────────────

/// A direction relative to an agent's facing.
///
/// Discriminants follow successive left quarter turns from the front, so
/// `RelDir::ALL[i]` is the forward vector rotated `i` times.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RelDir {
    Front = 0,
    Left  = 1,
    Back  = 2,
    Right = 3,
}

impl RelDir {
    pub const ALL: [RelDir; 4] = [RelDir::Front, RelDir::Left, RelDir::Back, RelDir::Right];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
