//! Trefunge common types.
//!
//! This crate provides the program representation shared by the loader and
//! the execution engine:
//!
//! - [`Instruction`]: the one-character instruction set
//! - [`Direction`]: the six axis-aligned movement directions
//! - [`Position`]: an instruction-pointer coordinate
//! - [`Layer`] / [`Volume`]: the layered 3D character grid
//! - [`GridError`]: layers that cannot form a runnable volume
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod direction;
pub mod error;
pub mod grid;
pub mod instruction;

// Re-export commonly used types at the crate root.
pub use direction::{Direction, ALL_DIRECTIONS};
pub use error::GridError;
pub use grid::{Layer, Position, Volume};
pub use instruction::{Instruction, SYMBOLS};
