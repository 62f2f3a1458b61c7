//! Binary that runs every strategy over one fixture map and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture <MAP> [--diagonal]`
//!
//! Output: key=value lines, one block per strategy. Costs are printed as
//! IEEE-754 bit patterns so formatting cannot mask a difference. The last
//! line of each block is the full run report as single-line JSON.

use gridsearch_harness::config::RunConfig;
use gridsearch_harness::runner::run_map_file;
use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_search::policy::Strategy;

fn main() {
    let mut args = std::env::args().skip(1);
    let map_path = args.next().expect("usage: search_fixture <MAP> [--diagonal]");
    let diagonal = args.any(|a| a == "--diagonal");

    for strategy in Strategy::ALL {
        let config = RunConfig {
            strategy,
            diagonal,
            heuristic: if diagonal {
                Heuristic::Octile
            } else {
                Heuristic::Manhattan
            },
            ..RunConfig::default()
        };
        let report = run_map_file(&map_path, &config).expect("search run failed");
        let name = strategy.name();

        println!("{name}.map_digest={}", report.map_digest.as_str());
        println!("{name}.graph_digest={}", report.graph_digest.as_str());
        println!(
            "{name}.report_digest={}",
            report.digest().expect("report digest").as_str()
        );
        println!("{name}.termination={}", report.termination.tag());
        println!("{name}.expansions={}", report.graph.metadata.total_expansions);
        println!("{name}.actions={}", report.action_tokens().join(","));
        println!(
            "{name}.cost_bits={:016x}",
            report.cost.map_or(0, f64::to_bits)
        );
        println!(
            "{name}.report={}",
            serde_json::to_string(&report.to_json()).expect("report serializes")
        );
    }
}
