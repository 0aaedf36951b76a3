//! Per-agent execution state.

use tracing::debug;

use bg_core::{AgentId, Facing, GridPos, NodeId};
use bg_grid::{GridModel, Legality, Spawn};
use bg_motion::Motion;
use bg_program::Program;

use crate::{Action, Continuation, Step, Termination, decide};

/// Where an agent is in its run.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// No pending node and not moving.  Finished, or never started.
    #[default]
    Idle,
    /// Has a cursor to dispatch (possibly absent, which ends the run).
    Executing,
    /// Between two cells.  `then` is applied on arrival.
    Moving { then: Continuation },
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Executing => "executing",
            Phase::Moving { .. } => "moving",
        }
    }
}

/// One agent: its place on the board and its place in the program.
///
/// Invariants:
/// - `motion.is_some()` iff `phase` is [`Phase::Moving`].
/// - `cursor` is only dispatched while `motion` is `None`.
#[derive(Clone, PartialEq, Debug)]
pub struct AgentState {
    pub id:       AgentId,
    /// Current cell.  While moving, the cell being left.
    pub pos:      GridPos,
    pub facing:   Facing,
    /// Snapshot for the current cell and facing, refreshed around every
    /// dispatch and on spawn/arrival.
    pub legality: Legality,
    pub cursor:   Option<NodeId>,
    pub phase:    Phase,
    pub motion:   Option<Motion>,
    /// Why the last run ended; cleared when a run starts.
    pub finished: Option<Termination>,
}

impl AgentState {
    /// A fresh, idle agent at its spawn.
    pub fn spawn(id: AgentId, spawn: Spawn, grid: &GridModel) -> Self {
        Self {
            id,
            pos:      spawn.pos,
            facing:   spawn.facing,
            legality: Legality::evaluate(grid, spawn.pos, spawn.facing),
            cursor:   None,
            phase:    Phase::Idle,
            motion:   None,
            finished: None,
        }
    }

    /// Begin executing at `root`.  An absent root ends on first dispatch.
    pub fn seed(&mut self, root: Option<NodeId>) {
        self.cursor = root;
        self.phase = Phase::Executing;
        self.finished = None;
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[inline]
    pub fn is_executing(&self) -> bool {
        self.phase == Phase::Executing
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, Phase::Moving { .. })
    }

    /// Recompute the legality snapshot for the current cell and facing.
    pub fn refresh_legality(&mut self, grid: &GridModel) {
        self.legality = Legality::evaluate(grid, self.pos, self.facing);
    }

    /// Fractional grid position, interpolated while moving.
    pub fn grid_position(&self) -> (f32, f32) {
        match &self.motion {
            Some(m) => m.grid_position(),
            None => (self.pos.x as f32, self.pos.y as f32),
        }
    }

    /// Ticks left on the current move; 0 when not moving.
    pub fn remain_frames(&self) -> u32 {
        self.motion.map_or(0, |m| m.remaining)
    }

    /// Dispatch the node under the cursor.
    ///
    /// Only acts in [`Phase::Executing`]; otherwise returns `None`.
    /// Refreshes legality, decides, applies the step, and refreshes again so
    /// the snapshot matches the new facing.  The step is returned for
    /// observers.
    pub fn execute(&mut self, program: &Program, grid: &GridModel, move_frames: u32) -> Option<Step> {
        if !self.is_executing() {
            return None;
        }
        self.refresh_legality(grid);
        let step = decide(program, self.cursor, self.facing, self.legality);
        debug!(
            agent   = %self.id,
            node    = ?self.cursor,
            kind    = self.cursor.and_then(|c| program.node(c)).map(|n| n.kind.as_str()),
            command = self.cursor.and_then(|c| program.node(c)).map(|n| n.command.as_str()),
            action  = ?step.action,
            "dispatch"
        );
        self.apply(step.clone(), move_frames);
        // A turn changes what is legal from the current cell.
        self.refresh_legality(grid);
        Some(step)
    }

    /// Apply a decided step.
    pub fn apply(&mut self, step: Step, move_frames: u32) {
        match step.action {
            Action::Move(dir) => {
                self.motion = Some(Motion::start(self.pos, dir, move_frames));
                self.cursor = None;
                self.phase = Phase::Moving { then: step.then };
                return;
            }
            Action::Turn(facing) => self.facing = facing,
            Action::None | Action::Blocked => {}
        }
        self.continue_with(step.then);
    }

    /// Advance the current move by one tick.
    ///
    /// Returns the arrival cell on the tick the move completes.  The agent
    /// then occupies that cell and applies the continuation chosen when the
    /// move started.
    pub fn advance_motion(&mut self, grid: &GridModel) -> Option<GridPos> {
        let motion = self.motion.as_mut()?;
        if !motion.advance() {
            return None;
        }
        let arrived = motion.destination();
        let frames = motion.elapsed();
        self.motion = None;
        self.pos = arrived;
        self.refresh_legality(grid);

        let then = match std::mem::take(&mut self.phase) {
            Phase::Moving { then } => then,
            _ => Continuation::Resume(None),
        };
        debug!(agent = %self.id, pos = %arrived, frames, "arrived");
        self.continue_with(then);
        Some(arrived)
    }

    /// Abort everything and return to `spawn`.
    pub fn reset(&mut self, spawn: Spawn, grid: &GridModel) {
        *self = Self::spawn(self.id, spawn, grid);
    }

    fn continue_with(&mut self, then: Continuation) {
        match then {
            Continuation::Resume(next) => {
                self.cursor = next;
                self.phase = Phase::Executing;
            }
            Continuation::Finish(reason) => self.finish(reason),
        }
    }

    fn finish(&mut self, reason: Termination) {
        debug!(agent = %self.id, %reason, "finished");
        self.cursor = None;
        self.phase = Phase::Idle;
        self.finished = Some(reason);
    }
}
