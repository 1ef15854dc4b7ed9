//! Stack history for regression comparison.
//!
//! When enabled, the engine records a copy of the stack before every step.
//! The text form has one snapshot per line, values bottom-to-top separated
//! by single spaces; an empty stack is an empty line.

use std::fmt::Write as _;
use std::num::ParseIntError;

use crate::stack::Stack;

/// Ordered stack snapshots, one per executed step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    snapshots: Vec<Vec<i64>>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stack: &Stack) {
        self.snapshots.push(stack.as_slice().to_vec());
    }

    pub fn snapshots(&self) -> &[Vec<i64>] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for snapshot in &self.snapshots {
            for (i, value) in snapshot.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{value}");
            }
            out.push('\n');
        }
        out
    }

    pub fn from_text(text: &str) -> Result<Self, ParseIntError> {
        let snapshots = text
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(str::parse::<i64>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { snapshots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form() {
        let mut trace = Trace::new();
        trace.record(&Stack::new());
        trace.record(&Stack::from(vec![1]));
        trace.record(&Stack::from(vec![-3, 104, 0]));
        assert_eq!(trace.to_text(), "\n1\n-3 104 0\n");
    }

    #[test]
    fn parse_text_form() {
        let trace = Trace::from_text("\n\n5\n5 7\n").unwrap();
        assert_eq!(
            trace.snapshots(),
            &[vec![], vec![], vec![5], vec![5, 7]]
        );
    }

    #[test]
    fn empty_text_is_empty_trace() {
        let trace = Trace::from_text("").unwrap();
        assert!(trace.is_empty());
        assert_eq!(trace.to_text(), "");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Trace::from_text("1 x\n").is_err());
    }
}
