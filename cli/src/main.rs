//! `gridsearch`: find a path through a text grid map.
//!
//! Exit codes:
//!
//! - 0: path found
//! - 1: no path (frontier exhausted, budget or cost ceiling hit)
//! - 2: unreadable or malformed map, or a rejected configuration
//! - 3: the report could not be serialized

#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gridsearch_harness::config::RunConfig;
use gridsearch_harness::render::render;
use gridsearch_harness::runner::{run_grid, RunReport};
use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_kernel::grid::map::GridMap;
use gridsearch_search::policy::{SearchPolicy, Strategy};

const EXIT_FOUND: u8 = 0;
const EXIT_NO_PATH: u8 = 1;
const EXIT_BAD_INPUT: u8 = 2;
const EXIT_REPORT_FAILED: u8 = 3;

/// Grid pathfinding with depth-first, breadth-first, uniform-cost and A* search
#[derive(Parser, Debug)]
#[command(name = "gridsearch", version)]
struct Cli {
    /// Map file: `x` occupied, `i` initial, `g` goal, anything else free
    map: PathBuf,

    /// Search algorithm: dfs, bfs, ucs, astar
    #[arg(short, long, default_value = "astar")]
    algorithm: Strategy,

    /// Allow diagonal moves (cost √2)
    #[arg(short, long)]
    diagonal: bool,

    /// A* estimate: zero, manhattan, octile
    #[arg(long, default_value = "zero")]
    heuristic: Heuristic,

    /// Stop after this many node expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Do not extend paths costing more than this
    #[arg(long)]
    max_cost: Option<f64>,

    /// Print the grid with visited cells and the path overlaid
    #[arg(short, long)]
    render: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            strategy: self.algorithm,
            diagonal: self.diagonal,
            heuristic: self.heuristic,
            policy: SearchPolicy {
                max_expansions: self.max_expansions,
                max_cost: self.max_cost,
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let map = match GridMap::load(&cli.map) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    let report = match run_grid(&map, &cli.run_config()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    match report_text(&report, cli.json) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("error: cannot serialize report: {e}");
            return ExitCode::from(EXIT_REPORT_FAILED);
        }
    }

    if cli.render {
        print!("{}", render(&map, &report.visited, &report.path));
    }

    if report.found() {
        ExitCode::from(EXIT_FOUND)
    } else {
        ExitCode::from(EXIT_NO_PATH)
    }
}

/// The text printed for `report`: pretty JSON, or a short summary.
fn report_text(report: &RunReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        let mut text = serde_json::to_string_pretty(&report.to_json())?;
        text.push('\n');
        return Ok(text);
    }
    let expanded = report.visited.len();
    let text = match report.cost {
        Some(cost) if report.found() => format!(
            "path found by {}: cost {cost:.3}, {} moves, {expanded} states expanded\nactions: {}\n",
            report.config.strategy,
            report.actions.len(),
            report.action_tokens().join(" ")
        ),
        _ => format!(
            "no path found by {}: {}, {expanded} states expanded\n",
            report.config.strategy, report.termination
        ),
    };
    Ok(text)
}
