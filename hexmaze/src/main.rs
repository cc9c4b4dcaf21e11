//! hexmaze — solve a hexagonal maze with a best-first search.
//!
//! Run: cargo run -- path/to/maze.txt
//!      cargo run -- --random 20x12 --animate

mod config;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;
use std::{fs, thread};

use clap::Parser;
use env_logger::{Builder, Env};
use hexmaze_core::{CellId, HexGrid};
use hexmaze_gen::{Maze, MazeGen};
use hexmaze_paths::{
    SearchEngine, SearchObserver, SearchReport, mark_backtrack, shortest_distance, trace_path,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use config::{MazeSource, RunConfig};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HEXMAZE_LOG";

fn log_builder(var: &str) -> Builder {
    Builder::from_env(Env::default().filter_or(var, "warn"))
}

/// Redraws the maze on every pop, like a slowed-down replay of the run.
///
/// Drawing stops at the first write error.
struct Animator<W: Write> {
    out: W,
    width: usize,
    delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write> Animator<W> {
    fn new(out: W, width: usize, delay: Duration) -> Self {
        Self {
            out,
            width,
            delay,
            error: None,
        }
    }

    fn frame(&mut self, grid: &HexGrid) {
        if self.error.is_some() {
            return;
        }
        let drawn = write!(
            self.out,
            "\x1b[2J\x1b[H{}\n",
            render::snapshot(grid, self.width)
        )
        .and_then(|()| self.out.flush());
        if let Err(e) = drawn {
            warn!("animation stopped: {e}");
            self.error = Some(e);
        }
    }
}

impl<W: Write> SearchObserver for Animator<W> {
    fn on_pop(&mut self, grid: &HexGrid, _cell: CellId) {
        self.frame(grid);
        if self.error.is_none() {
            thread::sleep(self.delay);
        }
    }

    fn on_finish(&mut self, grid: &HexGrid) {
        self.frame(grid);
    }
}

fn load(cfg: &RunConfig) -> Result<Maze, Box<dyn std::error::Error>> {
    match cfg.source() {
        MazeSource::File(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Ok(Maze::parse(&text)?)
        }
        MazeSource::Random(random) => {
            let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
            info!("random maze seed {seed}");
            let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
            Ok(match random.wall_pct {
                Some(p) => mg.scatter_walls(random.width, random.height, p),
                None => mg.random_walk(random.width, random.height).0,
            })
        }
    }
}

/// Solve the configured maze. Animation frames and the final maze go to
/// `drawing`.
fn run<W: Write>(
    cfg: &RunConfig,
    mut drawing: W,
) -> Result<SearchReport, Box<dyn std::error::Error>> {
    let maze = load(cfg)?;
    let mut grid = maze.to_grid();
    let best = shortest_distance(&grid);

    let report = {
        let mut engine = SearchEngine::new(&mut grid);
        if cfg.animate {
            let mut animator = Animator::new(&mut drawing, maze.width(), cfg.delay());
            engine.run_with(&mut animator)?
        } else {
            engine.run()?
        }
    };

    if let (Some(len), Some(d)) = (report.path_length, best) {
        if i64::from(len) > i64::from(d) + 1 {
            warn!(
                "route of {len} cells is longer than the shortest one ({} cells)",
                d + 1
            );
        }
    }

    if cfg.show_path {
        if let Some(path) = trace_path(&grid) {
            mark_backtrack(&mut grid, &path);
        }
        writeln!(drawing, "{}\n", render::snapshot(&grid, maze.width()))?;
    }

    Ok(report)
}

/// What goes to stdout once the run is over.
fn format_report(cfg: &RunConfig, report: &SearchReport) -> Result<String, serde_json::Error> {
    if cfg.json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(render::report_text(report))
    }
}

fn main() -> ExitCode {
    let cfg = RunConfig::parse();
    log_builder(LOG_ENV).init();

    // Keep stdout clean for the JSON report.
    let result = if cfg.json {
        run(&cfg, io::stderr().lock())
    } else {
        run(&cfg, io::stdout().lock())
    };

    let output = result.and_then(|report| Ok(format_report(&cfg, &report)?));
    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
