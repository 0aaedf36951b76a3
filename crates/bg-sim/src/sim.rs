//! The `Sim` struct and its tick loop.

use std::sync::mpsc::Receiver;

use tracing::{debug, info, warn};

use bg_core::{AgentId, SimConfig, Tick};
use bg_exec::{Step, Termination};
use bg_grid::Board;
use bg_program::Program;

use crate::control::drain;
use crate::{AgentView, ControlHandle, Signal, SimObserver, SimResult, WorldState};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The scheduler.  Owns the board, the loaded program, and the run state.
///
/// Every tick runs the motion phase for all agents before the dispatch
/// phase for any agent (see the crate docs).  The program can only be
/// replaced together with a full reset, so no agent ever holds a cursor
/// into a program other than the current one.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (move duration, run bound, snapshot cadence).
    pub config: SimConfig,

    pub(crate) clock:      Tick,
    pub(crate) board:      Board,
    pub(crate) program:    Program,
    pub(crate) world:      WorldState,
    pub(crate) control:    ControlHandle,
    pub(crate) signals:    Receiver<Signal>,
    /// Agents finished by `start` itself, reported at the next tick or run.
    pub(crate) unreported: Vec<AgentId>,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// The next tick to be processed.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn program(&self) -> &Program {
        &self.program
    }

    #[inline]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// A sender for queuing signals from host callbacks.
    pub fn control(&self) -> ControlHandle {
        self.control.clone()
    }

    /// `true` while any agent is executing or moving.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    pub fn agent_view(&self, id: AgentId) -> Option<AgentView> {
        self.world.agent(id).map(AgentView::from)
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Return every agent to its spawn and make every item visible again.
    /// In-progress moves and pending cursors are dropped.
    pub fn reset(&mut self) {
        self.world = WorldState::new(&self.board);
        self.unreported.clear();
        info!(tick = self.clock.0, agents = self.world.agent_count(), "reset");
    }

    /// Replace the program.  Agents are reset before the new program becomes
    /// visible, so no cursor outlives the program it points into.
    pub fn load_program(&mut self, program: Program) {
        self.reset();
        info!(
            nodes     = program.len(),
            functions = program.function_count(),
            root      = ?program.find_root(),
            "program installed"
        );
        self.program = program;
    }

    /// Reset, then seed every agent with the program root.
    ///
    /// With no root every agent finishes at once with
    /// [`Termination::EndOfProgram`]; observers hear about it at the next
    /// `tick` or `run`.
    pub fn start(&mut self) {
        self.reset();
        let root = self.program.find_root();
        for agent in self.world.agents_mut() {
            match root {
                Some(_) => agent.seed(root),
                None => {
                    agent.apply(Step::finish(Termination::EndOfProgram), self.config.move_frames);
                    self.unreported.push(agent.id);
                }
            }
        }
        info!(tick = self.clock.0, root = ?root, "start");
    }

    /// Parse an editor payload, install it, and start.
    ///
    /// On a parse error the current program and run are left untouched.
    pub fn deliver(&mut self, json: &str) -> SimResult<()> {
        let program = Program::from_json(json)?;
        self.load_program(program);
        self.start();
        Ok(())
    }

    fn apply_signal(&mut self, signal: Signal) {
        debug!(?signal, "signal");
        match signal {
            Signal::LoadProgram(program) => self.load_program(program),
            Signal::Start => self.start(),
            Signal::Reset => self.reset(),
        }
    }

    fn report_unreported<O: SimObserver>(&mut self, observer: &mut O) {
        for id in std::mem::take(&mut self.unreported) {
            if let Some(reason) = self.world.agent(id).and_then(|a| a.finished.as_ref()) {
                observer.on_agent_finished(self.clock, id, reason);
            }
        }
    }

    fn apply_pending_signals(&mut self) {
        for signal in drain(&self.signals) {
            self.apply_signal(signal);
        }
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Apply queued signals, then process one tick.
    ///
    /// Returns the number of agents that dispatched a node.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        self.apply_pending_signals();
        self.process_tick(observer)
    }

    /// Tick until no agent is running, or `config.max_ticks` ticks have
    /// passed in this call.  Returns the number of ticks processed.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> u64 {
        let mut ticks = 0;
        while ticks < self.config.max_ticks {
            self.apply_pending_signals();
            if !self.is_running() {
                self.report_unreported(observer);
                break;
            }
            self.process_tick(observer);
            ticks += 1;
        }
        if self.is_running() {
            warn!(tick = self.clock.0, max_ticks = self.config.max_ticks, "tick bound reached with agents still running");
        }
        observer.on_run_end(self.clock);
        ticks
    }

    /// Process exactly `n` ticks, whether or not any agent is running.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock;
        observer.on_tick_start(now);
        self.report_unreported(observer);

        let grid = &self.board.grid;
        let program = &self.program;
        let move_frames = self.config.move_frames;

        // ── Phase 1: motion ───────────────────────────────────────────────
        //
        // Arrivals are recorded so the dispatch phase skips them: the node
        // after a move runs on the following tick.
        let mut arrived = vec![false; self.world.agent_count()];
        for i in 0..self.world.agent_count() {
            let agent = &mut self.world.agents_mut()[i];
            let Some(pos) = agent.advance_motion(grid) else {
                continue;
            };
            arrived[i] = true;
            let id = agent.id;
            let finished = agent.is_idle().then(|| agent.finished.clone()).flatten();

            for item in self.world.collect_at(pos) {
                debug!(agent = %id, %item, %pos, "item collected");
                observer.on_item_collected(now, id, item);
            }
            if let Some(reason) = finished {
                observer.on_agent_finished(now, id, &reason);
            }
        }

        // ── Phase 2: dispatch ─────────────────────────────────────────────
        let mut dispatched = 0;
        for (agent, _) in self.world.agents_mut().iter_mut().zip(&arrived).filter(|(_, a)| !**a) {
            if agent.execute(program, grid, move_frames).is_none() {
                continue;
            }
            dispatched += 1;
            if agent.is_idle() {
                if let Some(reason) = &agent.finished {
                    observer.on_agent_finished(now, agent.id, reason);
                }
            }
        }

        // ── Phase 3: observe ──────────────────────────────────────────────
        observer.on_tick_end(now, dispatched);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.world);
        }

        self.clock = now.next();
        dispatched
    }
}
