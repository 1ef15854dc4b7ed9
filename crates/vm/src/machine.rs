//! VM state management: execution state, options, and the VM itself.

use trefunge_common::{Direction, Position, Volume};

use crate::rng::DirectionRng;
use crate::stack::Stack;
use crate::trace::Trace;

/// Everything that changes while a program runs, apart from the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecState {
    /// Instruction pointer.
    pub position: Position,
    /// Current movement direction.
    pub direction: Direction,
    /// Operand stack.
    pub stack: Stack,
    /// When set, cells other than `"` are pushed as character codes.
    pub string_mode: bool,
    /// Set by `@`; the run loop stops after the current step.
    pub halted: bool,
}

impl ExecState {
    /// Initial state: top-left cell of the entry layer, heading +x.
    pub fn new(entry_z: usize) -> Self {
        Self {
            position: Position::new(0, 0, entry_z),
            direction: Direction::Right,
            stack: Stack::new(),
            string_mode: false,
            halted: false,
        }
    }
}

/// Options for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Record a stack snapshot before every step.
    pub trace: bool,
    /// Seed for `?`. `None` seeds from the clock.
    pub seed: Option<u64>,
}

/// The Trefunge virtual machine.
///
/// Owns the program volume, the execution state, and the I/O devices for
/// one run. `I` supplies characters to `&` and `~`; `O` receives everything
/// `.` and `,` print.
pub struct Vm<I, O> {
    /// The program being executed; `p` mutates it in place.
    pub(crate) volume: Volume,
    pub(crate) state: ExecState,
    pub(crate) rng: DirectionRng,
    pub(crate) input: I,
    pub(crate) output: O,
    /// Present only when tracing is enabled.
    pub(crate) trace: Option<Trace>,
    /// Steps executed so far.
    pub(crate) steps: u64,
}

impl<I, O> Vm<I, O> {
    /// Create a VM positioned at the volume's entry layer.
    pub fn new(volume: Volume, input: I, output: O) -> Self {
        let state = ExecState::new(volume.entry());
        Self {
            volume,
            state,
            rng: DirectionRng::from_entropy(),
            input,
            output,
            trace: None,
            steps: 0,
        }
    }

    pub fn with_options(self, options: RunOptions) -> Self {
        let vm = match options.seed {
            Some(seed) => self.with_seed(seed),
            None => self,
        };
        if options.trace {
            vm.with_trace()
        } else {
            vm
        }
    }

    /// Enable stack-history capture.
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Trace::new());
        self
    }

    /// Fix the seed used by `?`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = DirectionRng::new(seed);
        self
    }

    pub fn state(&self) -> &ExecState {
        &self.state
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Tear down the VM, returning the (possibly self-modified) volume, the
    /// output sink, and the trace.
    pub fn into_parts(self) -> (Volume, O, Option<Trace>) {
        (self.volume, self.output, self.trace)
    }
}
