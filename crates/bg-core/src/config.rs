//! Interpreter configuration.

use crate::{BgError, BgResult};

/// Top-level run configuration.
///
/// Typically built in code by the host; the demo binary also accepts it as
/// JSON (with the `serde` feature enabled).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Ticks one grid-cell move takes.  Default: 10.
    pub move_frames: u32,

    /// Upper bound on ticks for `Sim::run`.  A program that loops forever
    /// (a function calling itself) is stopped here.
    pub max_ticks: u64,

    /// Call `SimObserver::on_snapshot` every N ticks.  1 = every tick;
    /// 0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// Ticks per move in the reference board.
    pub const DEFAULT_MOVE_FRAMES: u32 = 10;

    /// Reject configurations the scheduler cannot run.
    pub fn validate(&self) -> BgResult<()> {
        if self.move_frames == 0 {
            return Err(BgError::Config("move_frames must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_frames:             Self::DEFAULT_MOVE_FRAMES,
            max_ticks:               10_000,
            snapshot_interval_ticks: 1,
        }
    }
}
