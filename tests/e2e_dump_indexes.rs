// gridstore-tools - tests/e2e_dump_indexes.rs
//
// End-to-end tests for the index dumper. The external dump binary is
// replaced by a recording runner, and on Unix by real `sh` / `false`
// processes to exercise the actual spawn path.

use gridstore_tools::app::dump::{run_dump, DumpSummary};
use gridstore_tools::core::manifest::{DumpConfig, Invocation};
use gridstore_tools::platform::process::{CommandOutcome, CommandRunner};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Captures every invocation and reports success.
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<Invocation>>,
}

impl CommandRunner for Recorder {
    fn run(&self, invocation: &Invocation) -> CommandOutcome {
        self.calls.borrow_mut().push(invocation.clone());
        CommandOutcome::Succeeded
    }
}

fn args_of(inv: &Invocation) -> Vec<String> {
    inv.args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

// =============================================================================
// Invocation shape
// =============================================================================

/// Three non-empty manifest lines give three invocations, in order, with
/// derived `out/<name>.dat` destinations.
#[test]
fn e2e_one_invocation_per_manifest_line() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = Recorder::default();
    let config = DumpConfig {
        output_dir: dir.path().join("out"),
        ..Default::default()
    };
    let summary = run_dump(&fixture("stores.txt"), &config, &recorder).unwrap();

    assert_eq!(
        summary,
        DumpSummary {
            invoked: 3,
            succeeded: 3,
            failed: 0
        }
    );

    let calls = recorder.calls.borrow();
    let tails: Vec<(String, String)> = calls
        .iter()
        .map(|c| {
            let args = args_of(c);
            assert_eq!(c.program, "cargo");
            assert_eq!(args[..4].to_vec(), vec!["run", "--release", "--bin", "dump_store"]);
            (args[4].clone(), args[5].clone())
        })
        .collect();

    let out = |name: &str| config.output_dir.join(name).display().to_string();
    assert_eq!(
        tails,
        vec![
            ("/data/gb_address.rocksdb".to_string(), out("gb_address.dat")),
            ("/data/gb_place.rocksdb".to_string(), out("gb_place.dat")),
            ("/data/ca_place.rocksdb".to_string(), out("ca_place.dat")),
        ]
    );
}

/// The destination is the store's final segment, re-extended, under the
/// output directory.
#[test]
fn e2e_destination_under_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("m.txt");
    fs::write(&manifest, "stores/us_postcode.rocksdb").unwrap();

    let config = DumpConfig {
        output_dir: dir.path().join("dumps"),
        ..Default::default()
    };
    let recorder = Recorder::default();
    run_dump(&manifest, &config, &recorder).unwrap();

    let calls = recorder.calls.borrow();
    assert_eq!(
        PathBuf::from(&calls[0].args[5]),
        dir.path().join("dumps").join("us_postcode.dat")
    );
    assert!(dir.path().join("dumps").is_dir());
}

/// An empty manifest runs nothing and succeeds.
#[test]
fn e2e_empty_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("empty.txt");
    fs::write(&manifest, "").unwrap();

    let recorder = Recorder::default();
    let summary = run_dump(&manifest, &DumpConfig::default(), &recorder).unwrap();
    assert_eq!(summary.invoked, 0);
    assert!(recorder.calls.borrow().is_empty());
}

/// A missing manifest fails before anything runs.
#[test]
fn e2e_missing_manifest_fails() {
    let recorder = Recorder::default();
    let result = run_dump(
        &fixture("no_such_manifest.txt"),
        &DumpConfig::default(),
        &recorder,
    );
    assert!(result.is_err());
    assert!(recorder.calls.borrow().is_empty());
}

// =============================================================================
// Real processes (Unix only)
// =============================================================================

/// A real child process receives the source and destination arguments.
#[cfg(unix)]
#[test]
fn e2e_real_process_copies_source_to_destination() {
    use gridstore_tools::platform::process::SystemRunner;

    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("fr_place.rocksdb");
    fs::write(&store, "grid data").unwrap();
    let manifest = dir.path().join("m.txt");
    fs::write(&manifest, format!("{}\n", store.display())).unwrap();

    let config = DumpConfig {
        program: "sh".to_string(),
        args: vec![
            "-c".to_string(),
            "cp \"$1\" \"$2\"".to_string(),
            "dump".to_string(),
        ],
        output_dir: dir.path().join("out"),
        ..Default::default()
    };

    let summary = run_dump(&manifest, &config, &SystemRunner).unwrap();
    assert_eq!(summary.succeeded, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("out").join("fr_place.dat")).unwrap(),
        "grid data"
    );
}

/// Failing child processes are counted but never fail the run.
#[cfg(unix)]
#[test]
fn e2e_real_process_failures_are_suppressed() {
    use gridstore_tools::platform::process::SystemRunner;

    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("m.txt");
    fs::write(&manifest, "a.rocksdb\nb.rocksdb\n").unwrap();

    let config = DumpConfig {
        program: "false".to_string(),
        args: Vec::new(),
        output_dir: dir.path().join("out"),
        ..Default::default()
    };

    let summary = run_dump(&manifest, &config, &SystemRunner).unwrap();
    assert_eq!(
        summary,
        DumpSummary {
            invoked: 2,
            succeeded: 0,
            failed: 2
        }
    );
}
