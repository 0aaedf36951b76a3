//! The result of executing one program node.

use std::fmt;

use bg_core::{Facing, NodeId, Vec2i};

/// Why an agent stopped.  Reported to the host as "finished"; none of these
/// are errors.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Termination {
    /// Control reached an absent link, or a node with no successor.
    EndOfProgram,
    /// A non-branching node had both `right` and `bottom` set.
    AmbiguousLinks(NodeId),
    /// The kind/command pair is not one the interpreter knows.
    UnknownCommand { node: NodeId, kind: String, command: String },
    /// A `TailBrick` argument was not a positive integer.
    InvalidCallArgument { node: NodeId, argument: String },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::EndOfProgram => f.write_str("end of program"),
            Termination::AmbiguousLinks(node) => write!(f, "{node} has two successors"),
            Termination::UnknownCommand { node, kind, command } => {
                write!(f, "{node}: unknown {kind}/{command}")
            }
            Termination::InvalidCallArgument { node, argument } => {
                write!(f, "{node}: invalid function id {argument:?}")
            }
        }
    }
}

/// Where control goes after a step's action.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Continuation {
    /// Keep executing from this cursor.  `None` ends the program on the
    /// next dispatch.
    Resume(Option<NodeId>),
    /// Stop now.
    Finish(Termination),
}

/// The state change a step makes before control moves on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    None,
    /// Face a new direction.
    Turn(Facing),
    /// Start moving one cell along the vector.
    Move(Vec2i),
    /// A move was requested but the front cell is not walkable.
    Blocked,
}

/// Decision for one dispatched node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub action: Action,
    pub then:   Continuation,
}

impl Step {
    #[inline]
    pub fn resume(next: Option<NodeId>) -> Self {
        Self { action: Action::None, then: Continuation::Resume(next) }
    }

    #[inline]
    pub fn finish(reason: Termination) -> Self {
        Self { action: Action::None, then: Continuation::Finish(reason) }
    }
}
