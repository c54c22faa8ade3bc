use std::fmt;

use crate::error::AllocError;
use crate::sequence::{IntoIter, Iter, Sequence};

/// LIFO stack. The front of the underlying [`Sequence`] is the top.
#[derive(Clone)]
pub struct Stack<T> {
    seq: Sequence<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            seq: Sequence::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seq: Sequence::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.seq.link_front(value);
    }

    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        self.seq.try_link_front(value).map(|_| ())
    }

    /// Removes the top element; `None` once the stack is exhausted.
    pub fn pop(&mut self) -> Option<T> {
        self.seq.unlink_front()
    }

    /// Top of the stack.
    pub fn front(&self) -> Option<&T> {
        self.seq.peek_front()
    }

    pub fn count(&self) -> usize {
        self.seq.count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Top-to-bottom iteration, in pop order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.seq.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.seq.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.seq, f)
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.seq, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_scenario() {
        let mut s = Stack::new();
        s.push(15);
        assert_eq!(s.front(), Some(&15));
        s.push(10);
        assert_eq!(s.front(), Some(&10));
        assert_eq!(s.pop(), Some(10));
        assert_eq!(s.front(), Some(&15));
        assert_eq!(s.pop(), Some(15));
        assert_eq!(s.front(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn pop_on_empty_stays_none() {
        let mut s = Stack::<u8>::new();
        for _ in 0..3 {
            assert_eq!(s.pop(), None);
        }
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn collect_puts_last_item_on_top() {
        let s: Stack<i32> = (1..=4).collect();
        assert_eq!(s.front(), Some(&4));
        assert_eq!(s.to_string(), "[4, 3, 2, 1]");
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }
}
