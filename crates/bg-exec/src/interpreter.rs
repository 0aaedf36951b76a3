//! Node dispatch: `(kind, command)` → [`Step`].

use bg_core::{Facing, NodeId};
use bg_grid::Legality;
use bg_program::{BrickKind, Command, Program, ProgramNode, Successor};

use crate::{Action, Continuation, Step, Termination};

/// Decide what executing `cursor` does for an agent facing `facing` with
/// the legality snapshot `legality`.
///
/// Pure: reads the program and the snapshot, mutates nothing.  The caller
/// refreshes `legality` before every call so that branches and moves are
/// taken against the agent's current facing.
pub fn decide(
    program:  &Program,
    cursor:   Option<NodeId>,
    facing:   Facing,
    legality: Legality,
) -> Step {
    let Some(node) = cursor.and_then(|id| program.node(id)) else {
        return Step::finish(Termination::EndOfProgram);
    };

    match &node.kind {
        BrickKind::Entry => Step { action: Action::None, then: sequential(node) },

        BrickKind::Basic => {
            let action = match node.command {
                Command::Move if legality.front => Action::Move(facing.vector()),
                Command::Move      => Action::Blocked,
                Command::TurnRight => Action::Turn(facing.turn_right()),
                Command::TurnLeft  => Action::Turn(facing.turn_left()),
                Command::TurnBack  => Action::Turn(facing.turn_back()),
                Command::Pass      => Action::None,
                _ => return Step::finish(unknown(node)),
            };
            Step { action, then: sequential(node) }
        }

        BrickKind::Case => match node.command.branch_direction() {
            Some(dir) => Step::resume(node.branch(legality.get(dir))),
            None => Step::finish(unknown(node)),
        },

        BrickKind::Tail => match node.call_target() {
            Some(function) => Step::resume(program.find_function_entry(function)),
            None => Step::finish(Termination::InvalidCallArgument {
                node:     node.id,
                argument: node.argument.clone(),
            }),
        },

        BrickKind::Other(_) => Step::finish(unknown(node)),
    }
}

/// Control flow after a non-branching node.
fn sequential(node: &ProgramNode) -> Continuation {
    match node.sequential() {
        Successor::Node(next) => Continuation::Resume(Some(next)),
        Successor::End => Continuation::Finish(Termination::EndOfProgram),
        Successor::Ambiguous => Continuation::Finish(Termination::AmbiguousLinks(node.id)),
    }
}

fn unknown(node: &ProgramNode) -> Termination {
    Termination::UnknownCommand {
        node:    node.id,
        kind:    node.kind.to_string(),
        command: node.command.to_string(),
    }
}
