//! Fluent builder for constructing a [`Sim`].

use std::sync::mpsc;

use tracing::info;

use bg_core::{SimConfig, Tick};
use bg_grid::Board;
use bg_program::Program;

use crate::{ControlHandle, Sim, SimResult, WorldState};

/// Fluent builder for [`Sim`].
///
/// | Method         | Default              |
/// |----------------|----------------------|
/// | `.config(c)`   | `SimConfig::default` |
/// | `.program(p)`  | `Program::empty()`   |
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(Board::reference()?)
///     .config(SimConfig { move_frames: 4, ..SimConfig::default() })
///     .program(program)
///     .build()?;
/// sim.start();
/// ```
pub struct SimBuilder {
    board:   Board,
    config:  SimConfig,
    program: Option<Program>,
}

impl SimBuilder {
    pub fn new(board: Board) -> Self {
        Self { board, config: SimConfig::default(), program: None }
    }

    /// Parse the board from raw cell rows first.
    pub fn from_rows(rows: &[Vec<u32>]) -> SimResult<Self> {
        Ok(Self::new(Board::from_rows(rows)?))
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Load `program` up front.  Agents stay idle until `start`.
    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Validate the configuration and return an idle [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let program = self.program.unwrap_or_else(Program::empty);
        let world = WorldState::new(&self.board);
        let (tx, rx) = mpsc::channel();

        info!(
            agents      = world.agent_count(),
            items       = world.items().len(),
            nodes       = program.len(),
            move_frames = self.config.move_frames,
            "sim built"
        );

        Ok(Sim {
            config:     self.config,
            clock:      Tick::ZERO,
            board:      self.board,
            program,
            world,
            control:    ControlHandle::new(tx),
            signals:    rx,
            unreported: Vec::new(),
        })
    }
}
