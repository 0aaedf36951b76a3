//! ring — runs one block program on the 5×5 reference board.
//!
//! ```text
//! cargo run -p ring                              # embedded program
//! cargo run -p ring -- program.json              # editor export
//! cargo run -p ring -- program.json out/ring     # plus a CSV trace
//! cargo run -p ring -- program.json out/ring config.json
//! RUST_LOG=debug cargo run -p ring               # per-node dispatch log
//! ```
//!
//! The embedded program walks east onto the ring, calls function 1 to sweep
//! the east edge, and stops when the edge runs out.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use bg_core::{AgentId, ItemId, SimConfig, Tick};
use bg_exec::Termination;
use bg_grid::{Board, IsoProjection};
use bg_output::{CsvTraceWriter, TraceObserver};
use bg_program::Program;
use bg_sim::{SimBuilder, SimObserver, WorldState};

// ── Embedded program ──────────────────────────────────────────────────────────

// root: Move, Move, call 1
// fn 1: TurnLeft, Move, TurnBack, Move, Move, IfS ? Move : TurnRight
const PROGRAM_JSON: &str = r#"[
  {
    "id": "main",
    "node": { "getBrickType": "EntryBrick", "getBrickCommand": "CommandNOP", "getBrickArgument": "" },
    "right": "Nil",
    "bottom": {
      "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandMove" },
      "right": "Nil",
      "bottom": {
        "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandMove" },
        "right": "Nil",
        "bottom": {
          "node": { "getBrickType": "TailBrick", "getBrickCommand": "CommandCall", "getBrickArgument": "1" },
          "right": "Nil",
          "bottom": "Nil"
        }
      }
    }
  },
  {
    "id": "sweep",
    "node": { "getBrickType": "EntryBrick", "getBrickCommand": "CommandFuncStart", "getBrickArgument": 1 },
    "right": "Nil",
    "bottom": {
      "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandTurnLeft" },
      "bottom": {
        "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandMove" },
        "bottom": {
          "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandTurnBack" },
          "bottom": {
            "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandMove" },
            "bottom": {
              "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandMove" },
              "bottom": {
                "node": { "getBrickType": "CaseBrick", "getBrickCommand": "CommandIfS" },
                "right": {
                  "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandMove" }
                },
                "bottom": {
                  "node": { "getBrickType": "BasicBrick", "getBrickCommand": "CommandTurnRight" }
                }
              }
            }
          }
        }
      }
    }
  }
]"#;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints run events and forwards everything to an optional CSV trace.
struct DemoObserver {
    trace:     Option<TraceObserver<CsvTraceWriter>>,
    projector: IsoProjection,
    items:     usize,
    finished:  Vec<(AgentId, Tick, Termination)>,
}

impl SimObserver for DemoObserver {
    fn on_tick_end(&mut self, tick: Tick, dispatched: usize) {
        if let Some(t) = &mut self.trace {
            t.on_tick_end(tick, dispatched);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, world: &WorldState) {
        if let Some(t) = &mut self.trace {
            t.on_snapshot(tick, world);
        }
    }

    fn on_item_collected(&mut self, tick: Tick, agent: AgentId, item: ItemId) {
        self.items += 1;
        println!("{tick:>6}  {agent} picked up {item}");
        if let Some(t) = &mut self.trace {
            t.on_item_collected(tick, agent, item);
        }
    }

    fn on_agent_finished(&mut self, tick: Tick, agent: AgentId, termination: &Termination) {
        println!("{tick:>6}  {agent} finished: {termination}");
        self.finished.push((agent, tick, termination.clone()));
        if let Some(t) = &mut self.trace {
            t.on_agent_finished(tick, agent, termination);
        }
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        if let Some(t) = &mut self.trace {
            t.on_run_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_program(path: Option<&Path>) -> Result<Program> {
    match path {
        Some(p) => bg_program::load_program_json(p)
            .with_context(|| format!("loading program from {}", p.display())),
        None => Ok(Program::from_json(PROGRAM_JSON)?),
    }
}

/// `SimConfig` from a JSON file; missing fields take their defaults.
fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(p) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(p).with_context(|| format!("opening config {}", p.display()))?;
    let config: SimConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", p.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let program_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);

    println!("=== ring — brickgrid reference board ===");

    // 1. Board and program.
    let board = Board::reference()?;
    println!(
        "Board: {}×{}, {} agent(s), {} item(s), {} draw layer(s)",
        board.grid.width(),
        board.grid.height(),
        board.spawns.len(),
        board.items.len(),
        IsoProjection::layer_count(&board.grid)
    );
    let program = load_program(program_path.as_deref())?;
    println!(
        "Program: {} nodes, {} function(s), root {}",
        program.len(),
        program.function_count(),
        program.find_root().map_or_else(|| "missing".to_owned(), |r| r.to_string())
    );

    // 2. Sim.
    let config = load_config(config_path.as_deref())?;
    let mut sim = SimBuilder::new(board)
        .config(config.clone())
        .program(program)
        .build()?;

    // 3. Output.
    let trace = match &output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(TraceObserver::new(CsvTraceWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = DemoObserver {
        trace,
        projector: IsoProjection::default(),
        items:     0,
        finished:  Vec::new(),
    };

    // 4. Run.
    println!();
    let t0 = Instant::now();
    sim.start();
    let ticks = sim.run(&mut obs);
    let elapsed = t0.elapsed();
    info!(ticks, still_running = sim.is_running(), "run complete");

    if let Some(e) = obs.trace.as_mut().and_then(|t| t.take_error()) {
        eprintln!("trace error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Ran {ticks} ticks in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    if sim.is_running() {
        println!("Stopped at the {}-tick bound with agents still running", config.max_ticks);
    }
    println!(
        "Items: {} collected, {} remaining",
        obs.items,
        sim.world().remaining_items()
    );
    if let Some(dir) = &output_dir {
        println!("Trace written to {}", dir.display());
    }
    println!();

    // 6. Final agent table.
    println!(
        "{:<10} {:<8} {:<7} {:<10} {:<18} {}",
        "Agent", "Cell", "Facing", "Phase", "Screen", "Legal F/L/B/R"
    );
    println!("{}", "-".repeat(70));
    for agent in sim.world().agents() {
        let (fx, fy) = agent.grid_position();
        let (sx, sy) = obs.projector.project(fx, fy);
        let legal: String = agent
            .legality
            .as_array()
            .iter()
            .map(|&open| if open { 'o' } else { '.' })
            .collect();
        let legal = if agent.legality.is_boxed_in() { format!("{legal} boxed in") } else { legal };
        println!(
            "{:<10} {:<8} {:<7} {:<10} {:<18} {}",
            agent.id.to_string(),
            agent.pos.to_string(),
            agent.facing.to_string(),
            agent.phase.label(),
            format!("({sx:.0}, {sy:.0})"),
            legal,
        );
    }
    for (agent, tick, why) in &obs.finished {
        println!("{agent} finished at {tick}: {why}");
    }

    Ok(())
}
