//! Runtime errors for the Trefunge VM.
//!
//! Every error is fatal to the run. Variants raised by an instruction carry
//! the instruction pointer (`at`) of the cell that raised them.

use thiserror::Error;
use trefunge_common::{Direction, Position};

/// Errors that stop execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A character outside the instruction set was executed.
    #[error("'{symbol}' is not a valid instruction at {at}")]
    InvalidInstruction { symbol: char, at: Position },

    /// `p` targeted a cell outside the current layer.
    #[error("put out of bounds at {at} (target ({x}, {y}))")]
    PutOutOfBounds { at: Position, x: i64, y: i64 },

    /// `%` with a zero divisor.
    #[error("modulo by zero at {at}")]
    ModuloByZero { at: Position },

    /// `,` or `p` with a value that is not a character code.
    #[error("{value} is not a valid character code at {at}")]
    InvalidCharCode { value: i64, at: Position },

    /// The input device was closed while an instruction waited on it.
    #[error("input closed at {at}")]
    InputExhausted { at: Position },

    /// The input device failed.
    #[error("input error at {at}: {message}")]
    Input { at: Position, message: String },

    /// The output sink failed.
    #[error("output error: {message}")]
    Output { message: String },

    /// A move would land on a layer with no cells.
    #[error("pointer moving {direction} from {at} entered an empty layer")]
    EnteredEmptyLayer { at: Position, direction: Direction },

    /// The instruction pointer does not name a cell of the volume.
    #[error("instruction pointer {at} outside the program")]
    PointerOutOfBounds { at: Position },
}
