//! Control signals from the host.
//!
//! Event callbacks in a host (a button press, a program arriving from the
//! editor) usually cannot borrow the `Sim` mutably.  They send a [`Signal`]
//! through a [`ControlHandle`] instead; the `Sim` drains the queue at the top
//! of its next tick.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use bg_program::Program;

use crate::{SimError, SimResult};

/// A request applied between ticks.
#[derive(Debug)]
pub enum Signal {
    /// Replace the program.  Resets every agent first.
    LoadProgram(Program),
    /// Reset, then seed every agent with the program root.
    Start,
    /// Return every agent and item to its initial state.
    Reset,
}

/// Cloneable sender half of a `Sim`'s signal queue.
#[derive(Clone, Debug)]
pub struct ControlHandle {
    tx: Sender<Signal>,
}

impl ControlHandle {
    pub(crate) fn new(tx: Sender<Signal>) -> Self {
        Self { tx }
    }

    /// Queue `signal`.  Fails only if the `Sim` has been dropped.
    pub fn send(&self, signal: Signal) -> SimResult<()> {
        self.tx.send(signal).map_err(|_| SimError::Disconnected)
    }

    pub fn load_program(&self, program: Program) -> SimResult<()> {
        self.send(Signal::LoadProgram(program))
    }

    pub fn start(&self) -> SimResult<()> {
        self.send(Signal::Start)
    }

    pub fn reset(&self) -> SimResult<()> {
        self.send(Signal::Reset)
    }
}

/// Take every signal currently queued, in arrival order.
pub(crate) fn drain(rx: &Receiver<Signal>) -> Vec<Signal> {
    let mut out = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(signal) => out.push(signal),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
        }
    }
    out
}
