//! Cross-process determinism.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts that all produce identical output. This proves that search
//! results are not influenced by process-level state (cwd, locale, log
//! level, hash seeds).

use std::path::Path;
use std::process::Command;

use lock_tests::fixtures::fixture_path;

/// Resolve the path to the compiled binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`; the
/// `search_fixture` binary lives one directory up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

/// Run the binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(map: &str, extra_args: &[&str], work_dir: &Path, env: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command.arg(map).args(extra_args).current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin} (env={env:?}): {e}"));
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn assert_crossproc(name: &str, extra_args: &[&str]) {
    let map = fixture_path(name);
    let map = map.to_str().expect("fixture path is UTF-8");
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists");
    let temp_dir = std::env::temp_dir();

    let baseline = run_variant(map, extra_args, workspace_root, &[]);
    let relocated = run_variant(map, extra_args, &temp_dir, &[("LANG", "C")]);
    let localized = run_variant(
        map,
        extra_args,
        workspace_root,
        &[("LC_ALL", "en_US.UTF-8"), ("LANG", "tr_TR.UTF-8")],
    );
    let verbose = run_variant(map, extra_args, workspace_root, &[("RUST_LOG", "trace")]);

    assert!(!baseline.is_empty(), "fixture produced no output");
    assert_eq!(baseline, relocated, "{name}: cwd/locale variant differs");
    assert_eq!(baseline, localized, "{name}: locale variant differs");
    assert_eq!(baseline, verbose, "{name}: log level changed stdout");
}

#[test]
fn crossproc_scenario_cardinal() {
    assert_crossproc("scenario", &[]);
}

#[test]
fn crossproc_maze_cardinal_and_diagonal() {
    assert_crossproc("maze", &[]);
    assert_crossproc("maze", &["--diagonal"]);
}

#[test]
fn crossproc_unsolvable() {
    assert_crossproc("enclosed", &[]);
}

#[test]
fn fixture_output_shape() {
    let map = fixture_path("scenario");
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let out = run_variant(map.to_str().unwrap(), &[], root, &[]);
    for strategy in ["dfs", "bfs", "ucs", "astar"] {
        assert!(
            out.contains(&format!("{strategy}.termination=goal_reached")),
            "missing {strategy} block:\n{out}"
        );
    }
    assert!(out.contains(&format!("ucs.cost_bits={:016x}", 4.0_f64.to_bits())));

    let report_line = out
        .lines()
        .find_map(|line| line.strip_prefix("ucs.report="))
        .expect("ucs report line");
    let report: serde_json::Value = serde_json::from_str(report_line).unwrap();
    assert_eq!(report["found"], true);
    assert_eq!(report["termination"], "goal_reached");
}
