//! Plain data row types written by trace writers.

use bg_exec::AgentState;

/// One agent's state at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:      u32,
    pub tick:          u64,
    pub x:             i32,
    pub y:             i32,
    pub facing:        u8,
    pub phase:         &'static str,
    pub remain_frames: u32,
    /// Interpolated grid-space position.
    pub fx:            f32,
    pub fy:            f32,
    pub front:         bool,
    pub left:          bool,
    pub right:         bool,
    pub back:          bool,
}

impl AgentSnapshotRow {
    pub fn new(tick: u64, agent: &AgentState) -> Self {
        let (fx, fy) = agent.grid_position();
        Self {
            agent_id:      agent.id.0,
            tick,
            x:             agent.pos.x,
            y:             agent.pos.y,
            facing:        agent.facing.value(),
            phase:         agent.phase.label(),
            remain_frames: agent.remain_frames(),
            fx,
            fy,
            front:         agent.legality.front,
            left:          agent.legality.left,
            right:         agent.legality.right,
            back:          agent.legality.back,
        }
    }
}

/// Something that happened to one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEventRow {
    pub tick:     u64,
    pub agent_id: u32,
    /// `item_collected` or `finished`.
    pub event:    &'static str,
    pub detail:   String,
}
