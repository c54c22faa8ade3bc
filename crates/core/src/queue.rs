use std::fmt;

use crate::error::AllocError;
use crate::sequence::{IntoIter, Iter, Sequence};

/// FIFO queue: [`enqueue`](Self::enqueue) at the back,
/// [`dequeue`](Self::dequeue) from the front.
#[derive(Clone)]
pub struct Queue<T> {
    seq: Sequence<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
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

    pub fn enqueue(&mut self, value: T) {
        self.seq.link_back(value);
    }

    pub fn try_enqueue(&mut self, value: T) -> Result<(), AllocError> {
        self.seq.try_link_back(value).map(|_| ())
    }

    /// Removes the oldest element; `None` once the queue is exhausted.
    pub fn dequeue(&mut self) -> Option<T> {
        self.seq.unlink_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.seq.peek_front()
    }

    pub fn back(&self) -> Option<&T> {
        self.seq.peek_back()
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

    /// Front-to-back iteration, in dequeue order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.seq.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            seq: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.seq.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.seq.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.seq, f)
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.seq, f)
    }
}
