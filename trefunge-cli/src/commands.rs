//! CLI command implementation.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tracing::{debug, info};
use trefunge_cli::{Interpreter, TerminalInput};
use trefunge_vm::{CharInput, ReaderInput};

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub dir: PathBuf,
    pub trace: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl RunArgs {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut dir = None;
        let mut trace = None;
        let mut seed = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--trace" => {
                    let path = iter.next().ok_or("--trace requires a file")?;
                    trace = Some(PathBuf::from(path));
                }
                "--seed" => {
                    let value = iter.next().ok_or("--seed requires a number")?;
                    let parsed = value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed '{value}'"))?;
                    seed = Some(parsed);
                }
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown option '{flag}'"));
                }
                path => {
                    if dir.is_some() {
                        return Err(format!("unexpected argument '{path}'"));
                    }
                    dir = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Self {
            dir: dir.ok_or("a program directory is required")?,
            trace,
            seed,
        })
    }
}

/// Load and execute a program directory.
pub fn run(args: &[String]) -> Result<(), i32> {
    let args = RunArgs::parse(args).map_err(|msg| {
        eprintln!("error: {msg}");
        eprintln!("Usage: trefunge <program-dir> [--trace <file>] [--seed <n>]");
        1
    })?;

    let mut interp = Interpreter::from_dir(&args.dir).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    if args.trace.is_some() {
        interp.enable_trace();
    }
    if let Some(seed) = args.seed {
        interp.seed(seed);
    }

    let stdin = io::stdin();
    let input: Box<dyn CharInput> = if stdin.is_terminal() {
        debug!("reading keys from the terminal");
        Box::new(TerminalInput::new())
    } else {
        Box::new(ReaderInput::new(stdin.lock()))
    };
    let result = interp.run_with(input, io::stdout().lock());

    // The trace is still useful when the run failed.
    if let (Some(path), Some(trace)) = (&args.trace, interp.trace()) {
        fs::write(path, trace.to_text()).map_err(|e| {
            eprintln!("error: cannot write '{}': {e}", path.display());
            1
        })?;
        info!(path = %path.display(), steps = trace.len(), "trace written");
    }

    result.map_err(|e| {
        eprintln!("runtime error: {e}");
        3
    })
}
