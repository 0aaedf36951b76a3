//! Editor JSON loader.
//!
//! # Format
//!
//! The editor delivers a JSON array of brick trees.  Each brick is:
//!
//! ```json
//! {
//!   "id": "b1",
//!   "node": {
//!     "getBrickType": "BasicBrick",
//!     "getBrickCommand": "CommandMove",
//!     "getBrickArgument": ""
//!   },
//!   "right": "Nil",
//!   "bottom": { "node": { ... }, "right": "Nil", "bottom": "Nil" }
//! }
//! ```
//!
//! | Field              | Meaning                                              |
//! |--------------------|------------------------------------------------------|
//! | `id`               | optional editor id (string or number)                |
//! | `getBrickType`     | `EntryBrick`, `BasicBrick`, `CaseBrick`, `TailBrick` |
//! | `getBrickCommand`  | `CommandMove`, `CommandIfS`, …                       |
//! | `getBrickArgument` | string or number; defaults to `""`                   |
//! | `right`/`bottom`   | nested brick, `"Nil"`, `null`, or missing = absent   |
//!
//! Trees are flattened in pre-order (brick, then its `right` subtree, then
//! its `bottom` subtree), tree by tree.  `NodeId`s follow that order.
//!
//! Nesting depth is bounded by `serde_json`'s recursion limit; deeper
//! programs are rejected with [`ProgramError::Json`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use bg_core::NodeId;

use crate::{BrickKind, Command, Program, ProgramError, ProgramNode, ProgramResult};

/// The editor's marker for an absent link.
const NIL: &str = "Nil";

// ── Wire records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawBrick {
    #[serde(default)]
    id:     Option<Value>,
    node:   RawNode,
    #[serde(default)]
    right:  RawLink,
    #[serde(default)]
    bottom: RawLink,
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "getBrickType")]
    brick_type: String,
    #[serde(rename = "getBrickCommand")]
    command:    String,
    #[serde(rename = "getBrickArgument", default)]
    argument:   Value,
}

#[derive(Deserialize, Default)]
#[serde(untagged)]
enum RawLink {
    #[default]
    Absent,
    Brick(Box<RawBrick>),
    Marker(String),
}

// ── Public API ────────────────────────────────────────────────────────────────

impl Program {
    /// Parse an editor payload.
    pub fn from_json(json: &str) -> ProgramResult<Program> {
        let trees: Vec<RawBrick> = serde_json::from_str(json)?;
        build(trees)
    }
}

/// Like [`Program::from_json`] but accepts any `Read` source.
pub fn load_program_reader<R: Read>(reader: R) -> ProgramResult<Program> {
    let trees: Vec<RawBrick> = serde_json::from_reader(reader)?;
    build(trees)
}

/// Load an editor payload from a file.
pub fn load_program_json(path: &Path) -> ProgramResult<Program> {
    let file = std::fs::File::open(path)?;
    load_program_reader(std::io::BufReader::new(file))
}

// ── Flattening ────────────────────────────────────────────────────────────────

fn build(trees: Vec<RawBrick>) -> ProgramResult<Program> {
    let mut nodes = Vec::new();
    for tree in trees {
        flatten(tree, &mut nodes)?;
    }
    let program = Program::from_nodes(nodes);
    info!(
        nodes     = program.len(),
        functions = program.function_count(),
        has_root  = program.find_root().is_some(),
        "program loaded"
    );
    Ok(program)
}

/// Push `brick` and its subtrees in pre-order; return the brick's id.
fn flatten(brick: RawBrick, nodes: &mut Vec<ProgramNode>) -> ProgramResult<NodeId> {
    let id = NodeId(u32::try_from(nodes.len()).map_err(|_| ProgramError::TooLarge)?);
    nodes.push(ProgramNode {
        id,
        source_id: brick.id.map(|v| scalar_text(&v)).transpose()?,
        kind:      BrickKind::parse(&brick.node.brick_type),
        command:   Command::parse(&brick.node.command),
        argument:  scalar_text(&brick.node.argument)?,
        right:     None,
        bottom:    None,
    });

    let right = flatten_link(brick.right, nodes)?;
    let bottom = flatten_link(brick.bottom, nodes)?;
    let node = &mut nodes[id.index()];
    node.right = right;
    node.bottom = bottom;
    Ok(id)
}

fn flatten_link(link: RawLink, nodes: &mut Vec<ProgramNode>) -> ProgramResult<Option<NodeId>> {
    match link {
        RawLink::Absent => Ok(None),
        RawLink::Marker(m) if m == NIL => Ok(None),
        RawLink::Marker(m) => Err(ProgramError::BadLink(m)),
        RawLink::Brick(b) => flatten(*b, nodes).map(Some),
    }
}

fn scalar_text(v: &Value) -> ProgramResult<String> {
    match v {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ProgramError::BadArgument(other.to_string())),
    }
}
