//! Program nodes and their wire tags.

use std::fmt;

use bg_core::{NodeId, RelDir};

// ── BrickKind ─────────────────────────────────────────────────────────────────

/// The shape of a brick in the editor.  Unrecognized kinds are kept so the
/// interpreter can stop on them when (and only if) they are reached.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum BrickKind {
    /// `EntryBrick`: program or function header; falls through.
    Entry,
    /// `BasicBrick`: a single action.
    Basic,
    /// `CaseBrick`: a two-way branch on a legality flag.
    Case,
    /// `TailBrick`: a call to a function entry by numeric id.
    Tail,
    Other(String),
}

impl BrickKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "EntryBrick" => BrickKind::Entry,
            "BasicBrick" => BrickKind::Basic,
            "CaseBrick"  => BrickKind::Case,
            "TailBrick"  => BrickKind::Tail,
            other        => BrickKind::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BrickKind::Entry    => "EntryBrick",
            BrickKind::Basic    => "BasicBrick",
            BrickKind::Case     => "CaseBrick",
            BrickKind::Tail     => "TailBrick",
            BrickKind::Other(s) => s,
        }
    }
}

impl fmt::Display for BrickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Command ───────────────────────────────────────────────────────────────────

/// The command tag carried by a brick.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Command {
    /// `CommandNOP`: marks the program root.
    Root,
    /// `CommandFuncStart`: marks a function entry; the argument is its id.
    FuncStart,
    /// `CommandMove`: step one cell forward if the front cell is open.
    Move,
    /// `CommandTurnRight`
    TurnRight,
    /// `CommandTurnLeft`
    TurnLeft,
    /// `CommandTurnBack`
    TurnBack,
    /// `CommandNone`: do nothing and continue.
    Pass,
    /// `CommandIfS`: branch on the front cell.
    IfFront,
    /// `CommandIfL`
    IfLeft,
    /// `CommandIfB`
    IfBack,
    /// `CommandIfR`
    IfRight,
    Other(String),
}

impl Command {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "CommandNOP"       => Command::Root,
            "CommandFuncStart" => Command::FuncStart,
            "CommandMove"      => Command::Move,
            "CommandTurnRight" => Command::TurnRight,
            "CommandTurnLeft"  => Command::TurnLeft,
            "CommandTurnBack"  => Command::TurnBack,
            "CommandNone"      => Command::Pass,
            "CommandIfS"       => Command::IfFront,
            "CommandIfL"       => Command::IfLeft,
            "CommandIfB"       => Command::IfBack,
            "CommandIfR"       => Command::IfRight,
            other              => Command::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Command::Root      => "CommandNOP",
            Command::FuncStart => "CommandFuncStart",
            Command::Move      => "CommandMove",
            Command::TurnRight => "CommandTurnRight",
            Command::TurnLeft  => "CommandTurnLeft",
            Command::TurnBack  => "CommandTurnBack",
            Command::Pass      => "CommandNone",
            Command::IfFront   => "CommandIfS",
            Command::IfLeft    => "CommandIfL",
            Command::IfBack    => "CommandIfB",
            Command::IfRight   => "CommandIfR",
            Command::Other(s)  => s,
        }
    }

    /// The relative direction a branch command tests, if it is one.
    pub fn branch_direction(&self) -> Option<RelDir> {
        match self {
            Command::IfFront => Some(RelDir::Front),
            Command::IfLeft  => Some(RelDir::Left),
            Command::IfBack  => Some(RelDir::Back),
            Command::IfRight => Some(RelDir::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Successor ─────────────────────────────────────────────────────────────────

/// Outcome of the sequential-successor rule for a non-branching node.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Successor {
    /// Exactly one link was present.
    Node(NodeId),
    /// Neither link was present: the sequence ends here.
    End,
    /// Both links were present; there is no single "next" statement.
    Ambiguous,
}

// ── ProgramNode ───────────────────────────────────────────────────────────────

/// One brick, flattened into the program arena.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProgramNode {
    /// Position in the arena.
    pub id:        NodeId,
    /// The editor's own id for the brick, when it supplied one.
    pub source_id: Option<String>,
    pub kind:      BrickKind,
    pub command:   Command,
    /// Raw argument text.  Numeric for `TailBrick` and `CommandFuncStart`.
    pub argument:  String,
    /// Next statement, or the true branch of a `CaseBrick`.
    pub right:     Option<NodeId>,
    /// Next statement, or the false branch of a `CaseBrick`.
    pub bottom:    Option<NodeId>,
}

impl ProgramNode {
    /// Apply the sequential-successor rule: take the single present link.
    pub fn sequential(&self) -> Successor {
        match (self.right, self.bottom) {
            (Some(next), None) | (None, Some(next)) => Successor::Node(next),
            (None, None) => Successor::End,
            (Some(_), Some(_)) => Successor::Ambiguous,
        }
    }

    /// The `right` link if `taken`, else the `bottom` link.
    #[inline]
    pub fn branch(&self, taken: bool) -> Option<NodeId> {
        if taken { self.right } else { self.bottom }
    }

    /// Parse the argument as a function id for a `TailBrick`.
    ///
    /// Reads the leading integer after optional whitespace and sign, so
    /// `"2"`, `" 2 "`, `"2.0"` and `"2abc"` all call function 2.  Returns
    /// `None` when there are no leading digits or the value is not strictly
    /// positive.
    pub fn call_target(&self) -> Option<u64> {
        let s = self.argument.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let n = s[..end].parse::<u64>().ok()?;
        (!negative && n > 0).then_some(n)
    }

    /// The id this node declares if it is a function entry.
    ///
    /// The argument must be the canonical decimal form of the id, so `"2"`
    /// declares function 2 but `"02"` and `" 2"` declare nothing.
    pub fn declared_function(&self) -> Option<u64> {
        if self.command != Command::FuncStart {
            return None;
        }
        let id = self.argument.parse::<u64>().ok()?;
        (id.to_string() == self.argument).then_some(id)
    }
}
