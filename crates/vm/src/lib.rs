//! Trefunge virtual machine: executes layered 3D grid programs.
//!
//! The VM walks a single instruction pointer through a [`Volume`]:
//! - An operand [`Stack`] of integers whose pop never fails
//! - Six-way movement with per-layer toroidal wraparound
//! - Self-modification through `g` and `p`
//! - Optional stack-history [`Trace`] for regression comparison
//!
//! # Usage
//!
//! ```
//! use trefunge_common::Volume;
//! use trefunge_vm::{run_captured, RunOptions};
//!
//! let volume = Volume::single("2+.@").unwrap();
//! let captured = run_captured(volume, "", RunOptions::default());
//!
//! assert_eq!(captured.result, Ok(()));
//! assert_eq!(captured.output, "2");
//! ```

pub mod error;
pub mod execute;
pub mod io;
pub mod machine;
pub mod rng;
pub mod stack;
pub mod trace;

pub use error::RuntimeError;
pub use io::{CharInput, ReaderInput, ScriptedInput};
pub use machine::{ExecState, RunOptions, Vm};
pub use rng::DirectionRng;
pub use stack::Stack;
pub use trace::Trace;

use std::io::Write;

use trefunge_common::Volume;

/// Execute a program against the given devices.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution hits a fatal condition (invalid
/// instruction, out-of-bounds put, closed input, ...).
pub fn run<I: CharInput, O: Write>(
    volume: Volume,
    input: I,
    output: O,
) -> Result<(), RuntimeError> {
    Vm::new(volume, input, output).run()
}

/// The observable results of a run with in-memory I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// How the run ended.
    pub result: Result<(), RuntimeError>,
    /// Everything printed, decoded lossily as UTF-8.
    pub output: String,
    /// Stack history, when requested.
    pub trace: Option<Trace>,
}

/// Run a program with fixed input text, capturing output and (optionally)
/// the trace. Output and trace are returned even when the run fails.
pub fn run_captured(volume: Volume, input: &str, options: RunOptions) -> Captured {
    let mut vm = Vm::new(volume, ScriptedInput::new(input), Vec::new()).with_options(options);
    let result = vm.run();
    let (_, output, trace) = vm.into_parts();
    Captured {
        result,
        output: String::from_utf8_lossy(&output).into_owned(),
        trace,
    }
}
