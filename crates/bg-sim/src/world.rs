//! Mutable run state: agents and items.
//!
//! A `WorldState` is derived entirely from a [`Board`] and is rebuilt from
//! scratch on every load, start, and reset, so no run leaks state into the
//! next.

use bg_core::{AgentId, Facing, GridPos, ItemId};
use bg_exec::{AgentState, Phase, Termination};
use bg_grid::{Board, Legality};

// ── ItemState ─────────────────────────────────────────────────────────────────

/// One collectible item.  Hidden once an agent arrives on its cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ItemState {
    pub id:      ItemId,
    pub pos:     GridPos,
    pub visible: bool,
}

// ── WorldState ────────────────────────────────────────────────────────────────

/// Agents and items for the current run, indexed by `AgentId` / `ItemId`.
#[derive(Clone, PartialEq, Debug)]
pub struct WorldState {
    agents:    Vec<AgentState>,
    items:     Vec<ItemState>,
    remaining: usize,
}

impl WorldState {
    /// Fresh state: every agent idle at its spawn and every item visible,
    /// except items under a spawn, which count as collected straight away.
    pub fn new(board: &Board) -> Self {
        let agents = board
            .spawns
            .iter()
            .enumerate()
            .map(|(i, &spawn)| AgentState::spawn(AgentId(i as u32), spawn, &board.grid))
            .collect();
        let items = board
            .items
            .iter()
            .enumerate()
            .map(|(i, &pos)| ItemState { id: ItemId(i as u32), pos, visible: true })
            .collect::<Vec<_>>();

        let mut world = Self { remaining: items.len(), agents, items };
        for spawn in &board.spawns {
            world.collect_at(spawn.pos);
        }
        world
    }

    #[inline]
    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&AgentState> {
        self.agents.get(id.index())
    }

    #[inline]
    pub(crate) fn agents_mut(&mut self) -> &mut [AgentState] {
        &mut self.agents
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn items(&self) -> &[ItemState] {
        &self.items
    }

    /// Items still visible.
    #[inline]
    pub fn remaining_items(&self) -> usize {
        self.remaining
    }

    /// `true` while any agent is executing or moving.
    pub fn is_running(&self) -> bool {
        self.agents.iter().any(|a| !a.is_idle())
    }

    /// Hide every visible item at `pos` and return their ids.
    pub(crate) fn collect_at(&mut self, pos: GridPos) -> Vec<ItemId> {
        let mut collected = Vec::new();
        for item in self.items.iter_mut().filter(|i| i.visible && i.pos == pos) {
            item.visible = false;
            collected.push(item.id);
        }
        self.remaining -= collected.len();
        collected
    }
}

// ── AgentView ─────────────────────────────────────────────────────────────────

/// What a host displays for one agent.
#[derive(Clone, PartialEq, Debug)]
pub struct AgentView {
    pub id:            AgentId,
    pub pos:           GridPos,
    pub facing:        Facing,
    pub legality:      Legality,
    pub phase:         Phase,
    /// Ticks left on the current move; 0 when not moving.
    pub remain_frames: u32,
    /// Interpolated grid-space position; equals `pos` when not moving.
    pub grid_position: (f32, f32),
    pub finished:      Option<Termination>,
}

impl From<&AgentState> for AgentView {
    fn from(a: &AgentState) -> Self {
        Self {
            id:            a.id,
            pos:           a.pos,
            facing:        a.facing,
            legality:      a.legality,
            phase:         a.phase.clone(),
            remain_frames: a.remain_frames(),
            grid_position: a.grid_position(),
            finished:      a.finished.clone(),
        }
    }
}
