//! Operand stack with total pop.

/// A LIFO stack of integers.
///
/// Popping an empty stack yields 0 and leaves it empty; no stack operation
/// can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Remove and return the top value, or 0 if the stack is empty.
    pub fn pop(&mut self) -> i64 {
        self.values.pop().unwrap_or(0)
    }

    /// The top value without removing it, or 0 if the stack is empty.
    pub fn peek(&self) -> i64 {
        self.values.last().copied().unwrap_or(0)
    }

    /// Pop one value and push it twice.
    pub fn duplicate(&mut self) {
        let value = self.pop();
        self.push(value);
        self.push(value);
    }

    /// Remove the second-from-top value and push it on top.
    ///
    /// A missing second value counts as 0: `[a]` becomes `[a, 0]` and an
    /// empty stack becomes `[0]`.
    pub fn swap(&mut self) {
        let len = self.values.len();
        let second = if len >= 2 {
            self.values.remove(len - 2)
        } else {
            0
        };
        self.push(second);
    }

    /// Pop and drop the top value.
    pub fn discard(&mut self) {
        self.pop();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pop_empty_yields_zero() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), 0);
        assert_eq!(stack.pop(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn push_pop_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), 2);
        assert_eq!(stack.pop(), 2);
        assert_eq!(stack.pop(), 1);
    }

    #[test]
    fn duplicate_empty_pushes_two_zeros() {
        let mut stack = Stack::new();
        stack.duplicate();
        assert_eq!(stack.as_slice(), &[0, 0]);
    }

    #[test]
    fn swap_two() {
        let mut stack = Stack::from(vec![7, 1, 2]);
        stack.swap();
        assert_eq!(stack.as_slice(), &[7, 2, 1]);
    }

    #[test]
    fn swap_one_pushes_zero_on_top() {
        let mut stack = Stack::from(vec![5]);
        stack.swap();
        assert_eq!(stack.as_slice(), &[5, 0]);
    }

    #[test]
    fn swap_empty_pushes_zero() {
        let mut stack = Stack::new();
        stack.swap();
        assert_eq!(stack.as_slice(), &[0]);
    }

    #[test]
    fn discard_empty_is_harmless() {
        let mut stack = Stack::new();
        stack.discard();
        assert!(stack.is_empty());
    }

    proptest! {
        /// Every pop beyond the number of pushes yields 0.
        #[test]
        fn excess_pops_yield_zero(
            values in prop::collection::vec(any::<i64>(), 0..20),
            extra in 1usize..10,
        ) {
            let mut stack = Stack::new();
            for &v in &values {
                stack.push(v);
            }
            for &v in values.iter().rev() {
                prop_assert_eq!(stack.pop(), v);
            }
            for _ in 0..extra {
                prop_assert_eq!(stack.pop(), 0);
            }
            prop_assert!(stack.is_empty());
        }

        /// duplicate then discard leaves top and size unchanged.
        #[test]
        fn duplicate_discard_is_identity(values in prop::collection::vec(any::<i64>(), 1..20)) {
            let mut stack = Stack::from(values.clone());
            stack.duplicate();
            stack.discard();
            prop_assert_eq!(stack.as_slice(), &values[..]);
        }

        /// swap twice restores the top two.
        #[test]
        fn swap_is_an_involution(values in prop::collection::vec(any::<i64>(), 2..20)) {
            let mut stack = Stack::from(values.clone());
            stack.swap();
            stack.swap();
            prop_assert_eq!(stack.as_slice(), &values[..]);
        }
    }
}
