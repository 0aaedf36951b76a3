//! The `Program` arena and its lookup tables.

use tracing::warn;

use bg_core::NodeId;

use crate::{BrickKind, Command, ProgramNode};

#[cfg(feature = "fx-hash")]
type FunctionTable = rustc_hash::FxHashMap<u64, NodeId>;
#[cfg(not(feature = "fx-hash"))]
type FunctionTable = std::collections::HashMap<u64, NodeId>;

/// An immutable, indexed block program.
///
/// Nodes are stored in arena order (pre-order over the editor's trees, see
/// [`crate::loader`]).  The root and the function table are resolved once
/// at construction, taking the first match in arena order.
#[derive(Clone, Debug, Default)]
pub struct Program {
    nodes:     Vec<ProgramNode>,
    root:      Option<NodeId>,
    functions: FunctionTable,
}

impl Program {
    /// A program with no nodes.  Starting it ends every agent immediately.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index `nodes` (already in arena order, `nodes[i].id == NodeId(i)`).
    pub(crate) fn from_nodes(nodes: Vec<ProgramNode>) -> Self {
        let mut root = None;
        let mut functions = FunctionTable::default();

        for node in &nodes {
            if node.command == Command::Root {
                match root {
                    None => root = Some(node.id),
                    Some(first) => warn!(%first, duplicate = %node.id, "more than one CommandNOP root; using the first"),
                }
            }
            if let Some(fid) = node.declared_function() {
                if let Some(&first) = functions.get(&fid) {
                    warn!(function = fid, %first, duplicate = %node.id, "duplicate function entry; using the first");
                } else {
                    functions.insert(fid, node.id);
                }
            }
            if let BrickKind::Other(kind) = &node.kind {
                warn!(node = %node.id, kind = %kind, "unknown brick kind; agents stop if they reach it");
            }
            if let Command::Other(command) = &node.command {
                warn!(node = %node.id, command = %command, "unknown command; agents stop if they reach it");
            }
        }

        if root.is_none() && !nodes.is_empty() {
            warn!("program has no CommandNOP root");
        }

        Self { nodes, root, functions }
    }

    /// The program root: the first node whose command is `CommandNOP`.
    #[inline]
    pub fn find_root(&self) -> Option<NodeId> {
        self.root
    }

    /// The entry node of function `id`: the first node with command
    /// `CommandFuncStart` and argument exactly `id.to_string()`.
    #[inline]
    pub fn find_function_entry(&self, id: u64) -> Option<NodeId> {
        self.functions.get(&id).copied()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&ProgramNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct function entries.
    #[inline]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgramNode> {
        self.nodes.iter()
    }
}

// ── ProgramBuilder ────────────────────────────────────────────────────────────

/// Incremental construction of a [`Program`] without going through JSON.
///
/// ```rust
/// use bg_program::{BrickKind, Command, ProgramBuilder};
///
/// let mut b = ProgramBuilder::new();
/// let root = b.add(BrickKind::Entry, Command::Root, "");
/// let step = b.add(BrickKind::Basic, Command::Move, "");
/// b.link_bottom(root, step);
/// let program = b.build();
/// assert_eq!(program.find_root(), Some(root));
/// ```
#[derive(Default)]
pub struct ProgramBuilder {
    nodes: Vec<ProgramNode>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with no links and return its id.
    pub fn add(&mut self, kind: BrickKind, command: Command, argument: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(ProgramNode {
            id,
            source_id: None,
            kind,
            command,
            argument: argument.into(),
            right:    None,
            bottom:   None,
        });
        id
    }

    /// Set `from.right = to`.
    pub fn link_right(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        self.check_link(from, to);
        self.nodes[from.index()].right = Some(to);
        self
    }

    /// Set `from.bottom = to`.
    pub fn link_bottom(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        self.check_link(from, to);
        self.nodes[from.index()].bottom = Some(to);
        self
    }

    /// Append `steps` as a `bottom`-linked chain after `after`, returning the
    /// last node of the chain.
    pub fn chain(&mut self, after: NodeId, steps: &[(BrickKind, Command, &str)]) -> NodeId {
        let mut last = after;
        for (kind, command, argument) in steps {
            let next = self.add(kind.clone(), command.clone(), *argument);
            self.link_bottom(last, next);
            last = next;
        }
        last
    }

    fn check_link(&self, from: NodeId, to: NodeId) {
        debug_assert!(from.index() < self.nodes.len(), "link source {from} not in this builder");
        debug_assert!(to.index() < self.nodes.len(), "link target {to} not in this builder");
    }

    pub fn build(self) -> Program {
        Program::from_nodes(self.nodes)
    }
}
