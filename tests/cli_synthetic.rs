//! Fixture-driven CLI synthetic tests.
//!
//! Each case under `tests/fixtures/synthetic/<case>/` provides:
//! - `input/`    export directory copied to a temp directory
//! - `scenario.toml` command list and command-level assertions
//! - `expected/` directory tree after executing the scenario

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
struct CommandSpec {
    args: Vec<String>,
    #[serde(default)]
    expect_exit: i32,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stderr_contains: Vec<String>,
    #[serde(default)]
    stderr_not_contains: Vec<String>,
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures").join("synthetic");
    assert!(root.is_dir(), "Fixture root missing: {}", root.display());

    let mut cases: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    cases.sort();
    assert!(!cases.is_empty(), "No synthetic test cases found");

    for case in cases {
        run_case(&case);
    }
}

fn run_case(case_dir: &Path) {
    let case = case_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown-case>");

    let scenario_path = case_dir.join("scenario.toml");
    let scenario_text = fs::read_to_string(&scenario_path)
        .unwrap_or_else(|e| panic!("Case '{}': cannot read scenario.toml: {}", case, e));
    let scenario: Scenario = toml::from_str(&scenario_text)
        .unwrap_or_else(|e| panic!("Case '{}': invalid scenario.toml: {}", case, e));

    let temp = tempfile::TempDir::new().unwrap();
    copy_tree(&case_dir.join("input"), temp.path());

    for (idx, command) in scenario.commands.iter().enumerate() {
        let output = run_roam2org(temp.path(), &command.args);
        let code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let label = format!("Case '{}', command #{} {:?}", case, idx + 1, command.args);

        assert_eq!(
            code, command.expect_exit,
            "{}: exit code mismatch.\nstdout:\n{}\nstderr:\n{}",
            label, stdout, stderr
        );
        for needle in &command.stdout_contains {
            assert!(
                stdout.contains(needle.as_str()),
                "{}: stdout lacks {:?}.\nstdout:\n{}",
                label,
                needle,
                stdout
            );
        }
        for needle in &command.stderr_contains {
            assert!(
                stderr.contains(needle.as_str()),
                "{}: stderr lacks {:?}.\nstderr:\n{}",
                label,
                needle,
                stderr
            );
        }
        for needle in &command.stderr_not_contains {
            assert!(
                !stderr.contains(needle.as_str()),
                "{}: stderr unexpectedly has {:?}.\nstderr:\n{}",
                label,
                needle,
                stderr
            );
        }
    }

    assert_trees_match(case, &case_dir.join("expected"), temp.path());
}

fn run_roam2org(cwd: &Path, args: &[String]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_roam2org"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run roam2org with {:?}: {}", args, e))
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        let dest = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::create_dir_all(dest.parent().unwrap()).unwrap();
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
}

fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn assert_trees_match(case: &str, expected_root: &Path, actual_root: &Path) {
    let expected = relative_files(expected_root);
    let actual = relative_files(actual_root);

    assert_eq!(
        expected, actual,
        "Case '{}': file set differs from expected tree",
        case
    );

    for rel in expected {
        // Fixtures may be checked out with CRLF line endings
        let want = fs::read_to_string(expected_root.join(&rel))
            .unwrap()
            .replace("\r\n", "\n");
        let got = fs::read_to_string(actual_root.join(&rel))
            .unwrap()
            .replace("\r\n", "\n");
        assert_eq!(got, want, "Case '{}': content mismatch in {}", case, rel.display());
    }
}
