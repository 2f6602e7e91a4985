//! Fixed-capacity stack - the unit the demo suites exercise

use std::fmt;

/// Returned by [`BoundedStack::push`] when the stack is full; hands the
/// rejected value back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFull<T>(pub T);

impl<T> fmt::Display for StackFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack is full")
    }
}

#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
    /// Deepest the stack has ever been
    #[cfg_attr(not(any(test, feature = "white-box")), allow(dead_code))]
    high_water: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            high_water: 0,
        }
    }

    pub fn push(&mut self, value: T) -> Result<(), StackFull<T>> {
        if self.is_full() {
            return Err(StackFull(value));
        }
        self.items.push(value);
        self.high_water = self.high_water.max(self.items.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// Private state exposed to white-box suites
#[cfg(any(test, feature = "white-box"))]
pub struct StackInternals<'a, T> {
    pub items: &'a [T],
    pub capacity: usize,
    pub high_water: usize,
}

#[cfg(any(test, feature = "white-box"))]
impl<T> ztest::WhiteBox for BoundedStack<T> {
    type Internals<'a> = StackInternals<'a, T> where Self: 'a;

    fn internals(&self) -> StackInternals<'_, T> {
        StackInternals {
            items: &self.items,
            capacity: self.capacity,
            high_water: self.high_water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut stack = BoundedStack::new(2);
        assert_eq!(stack.push(1), Ok(()));
        assert_eq!(stack.push(2), Ok(()));
        assert_eq!(stack.push(3), Err(StackFull(3)));
        assert!(stack.is_full());
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut stack = BoundedStack::new(3);
        stack.push("a").unwrap();
        stack.push("b").unwrap();

        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_high_water_survives_pops() {
        let mut stack = BoundedStack::new(4);
        for n in 0..3 {
            stack.push(n).unwrap();
        }
        stack.pop();
        stack.pop();

        let internals = ztest::inspect(&stack);
        assert_eq!(internals.high_water, 3);
        assert_eq!(internals.items, &[0]);
    }
}
