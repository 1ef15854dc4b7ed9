//! Golden-program regression tests.
//!
//! Every directory under `tests/programs/` at the workspace root is a
//! program plus its recorded behavior:
//! - `expected_output.txt`: exact text the program prints
//! - `stack_history.txt`: the stack before every step
//! - `input.txt` (optional): characters fed to `&` and `~`

use std::fs;
use std::path::{Path, PathBuf};

use trefunge_loader::load_dir;
use trefunge_vm::{run_captured, Captured, RunOptions, Trace};

fn programs_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/programs")
}

fn program_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(programs_root())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    assert!(!dirs.is_empty(), "no golden programs found");
    dirs
}

fn run_traced(dir: &Path) -> Captured {
    let volume = load_dir(dir).unwrap();
    let input = fs::read_to_string(dir.join("input.txt")).unwrap_or_default();
    let options = RunOptions {
        trace: true,
        seed: Some(0),
    };
    run_captured(volume, &input, options)
}

#[test]
fn golden_output() {
    for dir in program_dirs() {
        let expected = fs::read_to_string(dir.join("expected_output.txt")).unwrap();
        let captured = run_traced(&dir);
        assert_eq!(captured.result, Ok(()), "{} failed", dir.display());
        assert_eq!(captured.output, expected, "output of {}", dir.display());
    }
}

#[test]
fn golden_stack_history() {
    for dir in program_dirs() {
        let text = fs::read_to_string(dir.join("stack_history.txt")).unwrap();
        let expected = Trace::from_text(&text).unwrap();
        let captured = run_traced(&dir);
        assert_eq!(
            captured.trace.as_ref(),
            Some(&expected),
            "stack history of {}",
            dir.display()
        );
    }
}

#[test]
fn traces_are_deterministic() {
    for dir in program_dirs() {
        let first = run_traced(&dir).trace.unwrap();
        let second = run_traced(&dir).trace.unwrap();
        assert_eq!(first.to_text(), second.to_text(), "{}", dir.display());
    }
}
