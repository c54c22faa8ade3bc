use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::ListError;
use crate::sequence::{IntoIter, Iter, Sequence};

/// Doubly-linked list kept in comparator order.
///
/// Equal elements keep insertion order. [`reverse`](Self::reverse) flips both
/// the stored order and the order later pushes maintain.
#[derive(Clone)]
pub struct SortedList<T, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    seq: Sequence<T>,
    comparator: C,
    reversed: bool,
}

impl<T: Ord> SortedList<T, fn(&T, &T) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(Ord::cmp)
    }
}

impl<T: Ord> Default for SortedList<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T, fn(&T, &T) -> Ordering> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, C> SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            seq: Sequence::new(),
            comparator,
            reversed: false,
        }
    }

    /// Inserts `value` after every element that does not order after it.
    /// Returns the position it landed at.
    pub fn push(&mut self, value: T) -> usize {
        let append = match self.seq.peek_back() {
            Some(back) => !self.precedes(&value, back),
            None => true,
        };
        if append {
            self.seq.link_back(value);
            return self.seq.count() - 1;
        }

        let mut pos = 0;
        let mut curr = self.seq.head_index();
        while let Some(idx) = curr {
            if self.precedes(&value, self.seq.value(idx)) {
                self.seq.link_before(idx, value);
                return pos;
            }
            pos += 1;
            curr = self.seq.next_index(idx);
        }
        self.seq.link_back(value);
        pos
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.seq.unlink_front()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.seq.unlink_back()
    }

    pub fn front(&self) -> Option<&T> {
        self.seq.peek_front()
    }

    pub fn back(&self) -> Option<&T> {
        self.seq.peek_back()
    }

    pub fn at(&self, pos: usize) -> Result<&T, ListError> {
        self.seq
            .index_at(pos)
            .map(|idx| self.seq.value(idx))
            .ok_or(ListError::OutOfRange {
                pos,
                len: self.seq.count(),
            })
    }

    pub fn remove(&mut self, pos: usize) -> Result<T, ListError> {
        let len = self.seq.count();
        self.seq
            .index_at(pos)
            .and_then(|idx| self.seq.unlink(idx))
            .ok_or(ListError::OutOfRange { pos, len })
    }

    pub fn reverse(&mut self) {
        self.seq.reverse();
        self.reversed = !self.reversed;
        trace!(reversed = self.reversed, "sorted list order flipped");
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn count(&self) -> usize {
        self.seq.count()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Drops every element and restores the comparator's own order.
    pub fn clear(&mut self) {
        self.seq.clear();
        self.reversed = false;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }

    fn precedes(&self, a: &T, b: &T) -> bool {
        let ord = (self.comparator)(a, b);
        let ord = if self.reversed { ord.reverse() } else { ord };
        ord == Ordering::Less
    }
}

impl<T, C> Extend<T> for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C> IntoIterator for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.seq.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.seq.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.seq, f)
    }
}

impl<T: fmt::Display, C> fmt::Display for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.seq, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_position() {
        let mut list = SortedList::new();
        assert_eq!(list.push(5), 0);
        assert_eq!(list.push(1), 0);
        assert_eq!(list.push(3), 1);
        assert_eq!(list.push(9), 3);
        assert_eq!(list.push(3), 2);
        assert_eq!(list.to_string(), "[1, 3, 3, 5, 9]");
    }

    #[test]
    fn equal_elements_keep_insertion_order() {
        let mut list = SortedList::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        list.push((1, 'a'));
        list.push((0, 'b'));
        list.push((1, 'c'));
        list.push((0, 'd'));
        let tags: String = list.iter().map(|e| e.1).collect();
        assert_eq!(tags, "bdac");
    }

    #[test]
    fn at_and_remove_check_range() {
        let mut list: SortedList<i32> = [4, 2, 8, 6].into_iter().collect();
        assert_eq!(list.at(0), Ok(&2));
        assert_eq!(list.at(3), Ok(&8));
        assert_eq!(list.at(4), Err(ListError::OutOfRange { pos: 4, len: 4 }));
        assert_eq!(list.remove(1), Ok(4));
        assert_eq!(list.remove(3), Err(ListError::OutOfRange { pos: 3, len: 3 }));
        assert_eq!(list.to_string(), "[2, 6, 8]");

        let mut empty = SortedList::<i32>::new();
        assert_eq!(empty.remove(0), Err(ListError::OutOfRange { pos: 0, len: 0 }));
        assert_eq!(empty.at(0), Err(ListError::OutOfRange { pos: 0, len: 0 }));
    }

    #[test]
    fn reverse_flips_later_pushes() {
        let mut list: SortedList<i32> = [1, 3, 5].into_iter().collect();
        list.reverse();
        assert!(list.is_reversed());
        assert_eq!(list.to_string(), "[5, 3, 1]");
        assert_eq!(list.push(4), 1);
        assert_eq!(list.push(0), 4);
        assert_eq!(list.push(9), 0);
        assert_eq!(list.to_string(), "[9, 5, 4, 3, 1, 0]");

        list.clear();
        assert!(!list.is_reversed());
        list.extend([2, 1]);
        assert_eq!(list.to_string(), "[1, 2]");
    }

    #[test]
    fn pops_from_both_ends() {
        let mut list: SortedList<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
    }
}
