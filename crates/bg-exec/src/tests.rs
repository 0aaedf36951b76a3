//! Unit tests for bg-exec.

use bg_core::{AgentId, Facing, GridPos, NodeId, RelDir, Vec2i};
use bg_grid::{Board, Legality, Spawn};
use bg_program::{BrickKind, Command, Program, ProgramBuilder};

use crate::{Action, AgentState, Continuation, Phase, Step, Termination, decide};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn board() -> Board {
    Board::reference().unwrap()
}

fn agent_at_centre(b: &Board) -> AgentState {
    AgentState::spawn(AgentId(0), b.spawns[0], &b.grid)
}

/// Root followed by one node; returns `(program, root, node)`.
fn single(kind: BrickKind, command: Command, argument: &str) -> (Program, NodeId, NodeId) {
    let mut b = ProgramBuilder::new();
    let root = b.add(BrickKind::Entry, Command::Root, "");
    let n = b.add(kind, command, argument);
    b.link_bottom(root, n);
    (b.build(), root, n)
}

fn only(dir: RelDir) -> Legality {
    let mut a = [false; 4];
    a[dir.index()] = true;
    Legality::from_array(a)
}

// ── decide ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;

    #[test]
    fn absent_cursor_ends_program() {
        let step = decide(&Program::empty(), None, Facing::SouthEast, Legality::default());
        assert_eq!(step, Step::finish(Termination::EndOfProgram));
    }

    #[test]
    fn entry_falls_through() {
        let (p, root, n) = single(BrickKind::Basic, Command::Pass, "");
        let step = decide(&p, Some(root), Facing::SouthEast, Legality::default());
        assert_eq!(step, Step::resume(Some(n)));
    }

    #[test]
    fn move_with_open_front_starts_motion() {
        let (p, _, n) = single(BrickKind::Basic, Command::Move, "");
        let step = decide(&p, Some(n), Facing::NorthEast, only(RelDir::Front));
        assert_eq!(step.action, Action::Move(Vec2i::new(0, -1)));
        // Last node: the move still happens, then the program ends.
        assert_eq!(step.then, Continuation::Finish(Termination::EndOfProgram));
    }

    #[test]
    fn move_with_blocked_front_is_a_no_op_step() {
        let mut b = ProgramBuilder::new();
        let mv = b.add(BrickKind::Basic, Command::Move, "");
        let next = b.add(BrickKind::Basic, Command::Pass, "");
        b.link_right(mv, next);
        let p = b.build();
        let step = decide(&p, Some(mv), Facing::SouthEast, only(RelDir::Left));
        assert_eq!(step.action, Action::Blocked);
        assert_eq!(step.then, Continuation::Resume(Some(next)));
    }

    #[test]
    fn turns() {
        for (command, want) in [
            (Command::TurnRight, Facing::SouthWest),
            (Command::TurnLeft,  Facing::NorthEast),
            (Command::TurnBack,  Facing::NorthWest),
        ] {
            let (p, _, n) = single(BrickKind::Basic, command, "");
            let step = decide(&p, Some(n), Facing::SouthEast, Legality::default());
            assert_eq!(step.action, Action::Turn(want));
        }
    }

    #[test]
    fn branch_follows_right_on_true_and_bottom_on_false() {
        let cases = [
            (Command::IfFront, RelDir::Front),
            (Command::IfLeft,  RelDir::Left),
            (Command::IfBack,  RelDir::Back),
            (Command::IfRight, RelDir::Right),
        ];
        for (command, tested) in cases {
            let mut b = ProgramBuilder::new();
            let case = b.add(BrickKind::Case, command.clone(), "");
            let yes = b.add(BrickKind::Basic, Command::Pass, "");
            let no = b.add(BrickKind::Basic, Command::Pass, "");
            b.link_right(case, yes).link_bottom(case, no);
            let p = b.build();

            for open in RelDir::ALL {
                let step = decide(&p, Some(case), Facing::SouthEast, only(open));
                let want = if open == tested { yes } else { no };
                assert_eq!(step, Step::resume(Some(want)), "{command} with {open:?} open");
            }
        }
    }

    #[test]
    fn branch_to_absent_link_resumes_with_absent_cursor() {
        let mut b = ProgramBuilder::new();
        let case = b.add(BrickKind::Case, Command::IfFront, "");
        let p = b.build();
        let step = decide(&p, Some(case), Facing::SouthEast, only(RelDir::Front));
        assert_eq!(step, Step::resume(None));
    }

    #[test]
    fn call_jumps_to_function_entry() {
        let mut b = ProgramBuilder::new();
        let call = b.add(BrickKind::Tail, Command::Other("CommandCall".into()), "2");
        b.add(BrickKind::Entry, Command::FuncStart, "1");
        let two = b.add(BrickKind::Entry, Command::FuncStart, "2");
        let p = b.build();
        let step = decide(&p, Some(call), Facing::SouthEast, Legality::default());
        assert_eq!(step, Step::resume(Some(two)));
    }

    #[test]
    fn call_reads_leading_integer_of_argument() {
        for arg in ["2.0", "2abc", " +2"] {
            let mut b = ProgramBuilder::new();
            let call = b.add(BrickKind::Tail, Command::Other("CommandCall".into()), arg);
            let two = b.add(BrickKind::Entry, Command::FuncStart, "2");
            let p = b.build();
            let step = decide(&p, Some(call), Facing::SouthEast, Legality::default());
            assert_eq!(step, Step::resume(Some(two)), "argument {arg:?}");
        }
    }

    #[test]
    fn call_with_bad_argument_terminates() {
        for arg in ["0", "-1", "abc"] {
            let (p, _, n) = single(BrickKind::Tail, Command::Other("CommandCall".into()), arg);
            let step = decide(&p, Some(n), Facing::SouthEast, Legality::default());
            assert_eq!(
                step,
                Step::finish(Termination::InvalidCallArgument { node: n, argument: arg.into() })
            );
        }
    }

    #[test]
    fn call_to_missing_function_resumes_with_absent_cursor() {
        let (p, _, n) = single(BrickKind::Tail, Command::Other("CommandCall".into()), "9");
        let step = decide(&p, Some(n), Facing::SouthEast, Legality::default());
        assert_eq!(step, Step::resume(None));
    }

    #[test]
    fn unknown_commands_terminate() {
        for (kind, command) in [
            (BrickKind::Basic, Command::IfFront),
            (BrickKind::Basic, Command::Other("CommandJump".into())),
            (BrickKind::Case, Command::Move),
            (BrickKind::Other("LoopBrick".into()), Command::Move),
        ] {
            let (p, _, n) = single(kind, command, "");
            let step = decide(&p, Some(n), Facing::SouthEast, Legality::default());
            assert!(matches!(step.then, Continuation::Finish(Termination::UnknownCommand { node, .. }) if node == n));
        }
    }

    #[test]
    fn two_successors_terminate() {
        let mut b = ProgramBuilder::new();
        let n = b.add(BrickKind::Basic, Command::Pass, "");
        let x = b.add(BrickKind::Basic, Command::Pass, "");
        let y = b.add(BrickKind::Basic, Command::Pass, "");
        b.link_right(n, x).link_bottom(n, y);
        let step = decide(&b.build(), Some(n), Facing::SouthEast, Legality::default());
        assert_eq!(step.then, Continuation::Finish(Termination::AmbiguousLinks(n)));
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_state {
    use super::*;

    #[test]
    fn spawn_is_idle_with_fresh_legality() {
        let b = board();
        let a = agent_at_centre(&b);
        assert!(a.is_idle());
        assert_eq!(a.pos, GridPos::new(2, 2));
        assert_eq!(a.legality.as_array(), [true; 4]);
        assert!(a.motion.is_none());
    }

    #[test]
    fn execute_does_nothing_unless_executing() {
        let b = board();
        let mut a = agent_at_centre(&b);
        let (p, _, _) = single(BrickKind::Basic, Command::Pass, "");
        assert!(a.execute(&p, &b.grid, 10).is_none());
        assert!(a.is_idle());
    }

    #[test]
    fn move_sets_motion_and_arrives_after_move_frames() {
        let b = board();
        let mut a = agent_at_centre(&b);
        let (p, _, n) = single(BrickKind::Basic, Command::Move, "");
        a.seed(Some(n));
        a.execute(&p, &b.grid, 10);
        assert!(a.is_moving());
        assert_eq!(a.remain_frames(), 10);
        assert_eq!(a.pos, GridPos::new(2, 2));

        for _ in 0..9 {
            assert_eq!(a.advance_motion(&b.grid), None);
        }
        assert_eq!(a.advance_motion(&b.grid), Some(GridPos::new(3, 2)));
        assert_eq!(a.pos, GridPos::new(3, 2));
        assert!(a.motion.is_none());
        // Last node: finished on arrival.
        assert!(a.is_idle());
        assert_eq!(a.finished, Some(Termination::EndOfProgram));
    }

    #[test]
    fn turn_updates_facing_and_continues() {
        let b = board();
        let mut a = agent_at_centre(&b);
        let mut pb = ProgramBuilder::new();
        let t = pb.add(BrickKind::Basic, Command::TurnLeft, "");
        let n = pb.add(BrickKind::Basic, Command::Pass, "");
        pb.link_bottom(t, n);
        let p = pb.build();
        a.seed(Some(t));
        a.execute(&p, &b.grid, 10);
        assert_eq!(a.facing, Facing::NorthEast);
        assert!(a.is_executing());
        assert_eq!(a.cursor, Some(n));
    }

    #[test]
    fn turn_refreshes_legality_for_the_new_facing() {
        let b = Board::from_rows(&[vec![0, 0, 0], vec![0, 5, 1], vec![0, 0, 0]]).unwrap();
        let mut a = AgentState::spawn(AgentId(0), b.spawns[0], &b.grid);
        let (p, _, n) = single(BrickKind::Basic, Command::TurnLeft, "");
        a.seed(Some(n));
        a.execute(&p, &b.grid, 10);
        assert!(a.is_idle());
        assert_eq!(a.legality, Legality::evaluate(&b.grid, a.pos, Facing::NorthEast));
        assert!(a.legality.right);
    }

    #[test]
    fn legality_refreshed_before_each_dispatch() {
        // Turn away from the only open neighbour, then test the front.
        let b = Board::from_rows(&[vec![0, 0, 0], vec![0, 5, 1], vec![0, 0, 0]]).unwrap();
        let mut a = AgentState::spawn(AgentId(0), b.spawns[0], &b.grid);
        assert!(a.legality.front);

        let mut pb = ProgramBuilder::new();
        let turn = pb.add(BrickKind::Basic, Command::TurnBack, "");
        let case = pb.add(BrickKind::Case, Command::IfFront, "");
        let yes = pb.add(BrickKind::Basic, Command::Pass, "");
        let no = pb.add(BrickKind::Basic, Command::Pass, "");
        pb.link_bottom(turn, case);
        pb.link_right(case, yes).link_bottom(case, no);
        let p = pb.build();

        a.seed(Some(turn));
        a.execute(&p, &b.grid, 10);
        a.execute(&p, &b.grid, 10);
        assert_eq!(a.cursor, Some(no));
        assert!(!a.legality.front);
        assert!(a.legality.back);
    }

    #[test]
    fn absent_cursor_takes_one_more_dispatch_to_finish() {
        let b = board();
        let mut a = agent_at_centre(&b);
        a.seed(None);
        assert!(a.is_executing());
        a.execute(&Program::empty(), &b.grid, 10);
        assert!(a.is_idle());
        assert_eq!(a.finished, Some(Termination::EndOfProgram));
    }

    #[test]
    fn reset_aborts_motion() {
        let b = board();
        let mut a = agent_at_centre(&b);
        let (p, _, n) = single(BrickKind::Basic, Command::Move, "");
        a.seed(Some(n));
        a.execute(&p, &b.grid, 10);
        a.advance_motion(&b.grid);
        a.reset(b.spawns[0], &b.grid);
        assert_eq!(a, agent_at_centre(&b));
    }

    #[test]
    fn grid_position_interpolates() {
        let b = board();
        let mut a = agent_at_centre(&b);
        assert_eq!(a.grid_position(), (2.0, 2.0));
        a.apply(Step { action: Action::Move(Vec2i::new(1, 0)), then: Continuation::Resume(None) }, 2);
        a.advance_motion(&b.grid);
        // One of two ticks left: (1/2)² of the step remains.
        assert_eq!(a.grid_position(), (2.75, 2.0));
        assert_eq!(a.phase.label(), "moving");
        a.advance_motion(&b.grid);
        assert_eq!(a.grid_position(), (3.0, 2.0));
        assert_eq!(a.phase, Phase::Executing);
    }

    #[test]
    fn spawn_uses_spawn_facing() {
        let b = board();
        let s = Spawn { pos: GridPos::new(1, 1), facing: Facing::NorthWest };
        let a = AgentState::spawn(AgentId(3), s, &b.grid);
        assert_eq!(a.facing, Facing::NorthWest);
        // (0,1) in front is on the ring; (1,0) to the right of NW is too.
        assert!(a.legality.front);
        assert!(a.legality.right);
    }
}
