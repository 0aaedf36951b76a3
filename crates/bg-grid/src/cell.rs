//! Per-cell bitmask.

/// Board cell bits.
///
/// | bit(s) | meaning                              |
/// |--------|--------------------------------------|
/// | 0      | walkable                             |
/// | 1      | has item                             |
/// | 2      | agent spawns here                    |
/// | 3+     | initial facing of the spawned agent  |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFlags(pub u32);

impl CellFlags {
    pub const WALKABLE:     u32 = 1 << 0;
    pub const ITEM:         u32 = 1 << 1;
    pub const SPAWN:        u32 = 1 << 2;
    pub const FACING_SHIFT: u32 = 3;

    #[inline]
    pub fn is_walkable(self) -> bool {
        self.0 & Self::WALKABLE != 0
    }

    #[inline]
    pub fn has_item(self) -> bool {
        self.0 & Self::ITEM != 0
    }

    #[inline]
    pub fn has_spawn(self) -> bool {
        self.0 & Self::SPAWN != 0
    }

    /// Raw facing bits; validated by `Facing::from_raw` at board load.
    #[inline]
    pub fn facing_bits(self) -> u32 {
        self.0 >> Self::FACING_SHIFT
    }
}
