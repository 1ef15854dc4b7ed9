//! Trefunge embedding API and terminal glue.
//!
//! [`Interpreter`] ties the loader and the VM together: load a program
//! directory, optionally enable tracing, run it against any input/output
//! pair, then inspect the trace.
//!
//! ```no_run
//! use trefunge_cli::Interpreter;
//!
//! let mut interp = Interpreter::from_dir("tests/programs/add").unwrap();
//! interp.enable_trace();
//! let captured = interp.run_captured("");
//! assert_eq!(captured.output, "2");
//! assert_eq!(interp.trace().unwrap().len(), 4);
//! ```

pub mod terminal;

pub use terminal::TerminalInput;

use std::io::Write;
use std::path::Path;

use trefunge_common::Volume;
use trefunge_loader::{load_dir, LoadError};
use trefunge_vm::{Captured, CharInput, RunOptions, RuntimeError, ScriptedInput, Trace, Vm};

/// A loaded program plus the options for running it.
#[derive(Debug, Clone)]
pub struct Interpreter {
    volume: Volume,
    options: RunOptions,
    trace: Option<Trace>,
}

impl Interpreter {
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            options: RunOptions::default(),
            trace: None,
        }
    }

    /// Load the program in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::new(load_dir(dir.as_ref())?))
    }

    /// Record the stack before every step of the next run.
    pub fn enable_trace(&mut self) -> &mut Self {
        self.options.trace = true;
        self
    }

    /// Fix the seed for `?`.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Run the program to completion.
    ///
    /// Self-modifications persist: a second run starts from the grid the
    /// first one left behind.
    pub fn run_with<I: CharInput, O: Write>(
        &mut self,
        input: I,
        output: O,
    ) -> Result<(), RuntimeError> {
        let mut vm = Vm::new(self.volume.clone(), input, output).with_options(self.options);
        let result = vm.run();
        let (volume, _, trace) = vm.into_parts();
        self.volume = volume;
        self.trace = trace;
        result
    }

    /// Run with fixed input text, capturing everything printed.
    pub fn run_captured(&mut self, input: &str) -> Captured {
        let mut output = Vec::new();
        let result = self.run_with(ScriptedInput::new(input), &mut output);
        Captured {
            result,
            output: String::from_utf8_lossy(&output).into_owned(),
            trace: self.trace.clone(),
        }
    }

    /// Stack history of the last traced run.
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }
}
