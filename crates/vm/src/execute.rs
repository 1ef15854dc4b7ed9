//! Main execution loop and instruction dispatch for the Trefunge VM.

use std::io::Write;

use tracing::debug;
use trefunge_common::{Direction, Instruction, Layer, Position};

use crate::error::RuntimeError;
use crate::io::CharInput;
use crate::machine::Vm;

impl<I: CharInput, O: Write> Vm<I, O> {
    /// Run until `@` or a fatal error.
    ///
    /// Output is flushed before returning, including on error.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        debug!(
            entry = self.volume.entry(),
            depth = self.volume.depth(),
            traced = self.trace.is_some(),
            "run started"
        );

        let mut result = Ok(());
        while !self.state.halted {
            if let Err(e) = self.step() {
                result = Err(e);
                break;
            }
        }

        let flushed = self.flush();
        match &result {
            Ok(()) => debug!(steps = self.steps, "halted"),
            Err(e) => debug!(steps = self.steps, error = %e, "run failed"),
        }
        result.and(flushed)
    }

    /// Execute the cell under the instruction pointer, then advance.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        if let Some(trace) = &mut self.trace {
            trace.record(&self.state.stack);
        }

        let at = self.state.position;
        let symbol = self
            .volume
            .cell(at)
            .ok_or(RuntimeError::PointerOutOfBounds { at })?;
        tracing::trace!(%at, ?symbol, direction = %self.state.direction, "step");

        if self.state.string_mode && symbol != '"' {
            self.state.stack.push(symbol as i64);
        } else {
            let instr =
                Instruction::decode(symbol).ok_or(RuntimeError::InvalidInstruction { symbol, at })?;
            self.execute_one(instr, at)?;
        }

        self.advance(at)?;
        self.steps += 1;
        Ok(())
    }

    /// `at` is the cell being executed, reported if the move fails.
    fn advance(&mut self, at: Position) -> Result<(), RuntimeError> {
        let direction = self.state.direction;
        self.state.position = self
            .volume
            .advance(self.state.position, direction)
            .ok_or(RuntimeError::EnteredEmptyLayer { at, direction })?;
        Ok(())
    }

    fn execute_one(&mut self, instr: Instruction, at: Position) -> Result<(), RuntimeError> {
        match instr {
            Instruction::Nop => {}

            // Arithmetic
            Instruction::Add => self.exec_binary(|b, a| b.wrapping_add(a)),
            Instruction::Subtract => self.exec_binary(|b, a| b.wrapping_sub(a)),
            Instruction::Multiply | Instruction::Divide => {
                self.exec_binary(|b, a| b.wrapping_mul(a))
            }
            Instruction::Modulo => self.exec_mod(at)?,
            Instruction::Not => {
                let x = self.state.stack.pop();
                self.state.stack.push(i64::from(x == 0));
            }
            Instruction::Greater => self.exec_binary(|b, a| i64::from(b > a)),

            // Direction
            Instruction::Go(dir) => self.state.direction = dir,
            Instruction::Random => self.state.direction = self.rng.next_direction(),
            Instruction::HorizontalIf => {
                self.exec_branch(Direction::Right, Direction::Left);
            }
            Instruction::VerticalIf => {
                self.exec_branch(Direction::Down, Direction::Up);
            }
            Instruction::Bridge => self.advance(at)?,

            // Stack
            Instruction::ToggleString => self.state.string_mode = !self.state.string_mode,
            Instruction::Duplicate => self.state.stack.duplicate(),
            Instruction::Swap => self.state.stack.swap(),
            Instruction::Discard => self.state.stack.discard(),
            Instruction::Digit(d) => self.state.stack.push(i64::from(d)),

            // Grid
            Instruction::Get => self.exec_get(at)?,
            Instruction::Put => self.exec_put(at)?,

            // I/O
            Instruction::OutputInt => {
                let value = self.state.stack.pop();
                self.write_out(format_args!("{value}"))?;
            }
            Instruction::OutputChar => {
                let value = self.state.stack.pop();
                let c = char_from_code(value, at)?;
                self.write_out(format_args!("{c}"))?;
            }
            Instruction::InputInt => self.exec_input_int(at)?,
            Instruction::InputChar => {
                let c = self.read_input(at)?;
                self.state.stack.push(c as i64);
            }

            Instruction::Halt => self.state.halted = true,
        }
        Ok(())
    }

    // ---- Arithmetic ----

    /// Pop a, pop b, push `op(b, a)`.
    fn exec_binary(&mut self, op: fn(i64, i64) -> i64) {
        let a = self.state.stack.pop();
        let b = self.state.stack.pop();
        self.state.stack.push(op(b, a));
    }

    fn exec_mod(&mut self, at: Position) -> Result<(), RuntimeError> {
        let a = self.state.stack.pop();
        let b = self.state.stack.pop();
        if a == 0 {
            return Err(RuntimeError::ModuloByZero { at });
        }
        self.state.stack.push(b.wrapping_rem(a));
        Ok(())
    }

    // ---- Control flow ----

    fn exec_branch(&mut self, if_zero: Direction, otherwise: Direction) {
        self.state.direction = if self.state.stack.pop() == 0 {
            if_zero
        } else {
            otherwise
        };
    }

    // ---- Self-modification ----

    fn current_layer(&mut self, at: Position) -> Result<&mut Layer, RuntimeError> {
        self.volume
            .layer_mut(at.z)
            .ok_or(RuntimeError::PointerOutOfBounds { at })
    }

    /// Reads outside the layer push 0.
    fn exec_get(&mut self, at: Position) -> Result<(), RuntimeError> {
        let y = self.state.stack.pop();
        let x = self.state.stack.pop();
        let value = self
            .current_layer(at)?
            .get(x, y)
            .map_or(0, |c| c as i64);
        self.state.stack.push(value);
        Ok(())
    }

    /// Writes outside the layer are fatal.
    fn exec_put(&mut self, at: Position) -> Result<(), RuntimeError> {
        let y = self.state.stack.pop();
        let x = self.state.stack.pop();
        let value = self.state.stack.pop();
        let layer = self.current_layer(at)?;
        if layer.get(x, y).is_none() {
            return Err(RuntimeError::PutOutOfBounds { at, x, y });
        }
        let c = char_from_code(value, at)?;
        layer.set(x, y, c);
        debug!(%at, x, y, ?c, "cell rewritten");
        Ok(())
    }

    // ---- I/O ----

    /// Read characters until one is a decimal digit. Anything else gets a
    /// notice on the output and another read.
    fn exec_input_int(&mut self, at: Position) -> Result<(), RuntimeError> {
        loop {
            let c = self.read_input(at)?;
            if let Some(digit) = c.to_digit(10) {
                self.state.stack.push(i64::from(digit));
                return Ok(());
            }
            debug!(%at, ?c, "non-digit input for &");
            self.write_out(format_args!("{c} is not an integer, try again\n"))?;
        }
    }

    fn read_input(&mut self, at: Position) -> Result<char, RuntimeError> {
        // Anything printed so far must be visible before blocking on input.
        self.flush()?;
        match self.input.read_char() {
            Ok(Some(c)) => Ok(c),
            Ok(None) => Err(RuntimeError::InputExhausted { at }),
            Err(e) => Err(RuntimeError::Input {
                at,
                message: e.to_string(),
            }),
        }
    }

    fn write_out(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), RuntimeError> {
        self.output.write_fmt(args).map_err(output_error)
    }

    fn flush(&mut self) -> Result<(), RuntimeError> {
        self.output.flush().map_err(output_error)
    }
}

fn output_error(e: std::io::Error) -> RuntimeError {
    RuntimeError::Output {
        message: e.to_string(),
    }
}

fn char_from_code(value: i64, at: Position) -> Result<char, RuntimeError> {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(RuntimeError::InvalidCharCode { value, at })
}
