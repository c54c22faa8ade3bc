//! Doubly-linked sequence engine.
//!
//! Every operation at either end is O(1): `head` and `tail` are maintained
//! incrementally, so no operation walks the chain except the positional
//! helpers used by [`SortedList`](crate::SortedList).

use std::fmt;
use std::iter::FusedIterator;

use containers_forest::{check_slot, MAX_SLOTS};
use tracing::trace;

use crate::error::AllocError;
use crate::link_node::LinkNode;
use crate::types::Link;

#[inline]
fn get_prev<N: Link>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].prev()
}

#[inline]
fn get_next<N: Link>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].next()
}

#[inline]
fn set_prev<N: Link>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_prev(v);
}

#[inline]
fn set_next<N: Link>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_next(v);
}

#[inline]
fn occupied<T>(node: &LinkNode<T>) -> &T {
    match &node.v {
        Some(v) => v,
        None => unreachable!("vacant slot linked into the sequence"),
    }
}

/// Chain of [`LinkNode`]s with cached `head` and `tail`.
///
/// Invariant: `count == 0` iff `head` and `tail` are both `None`.
#[derive(Clone)]
pub struct Sequence<T> {
    head: Option<u32>,
    tail: Option<u32>,
    count: usize,
    free: Option<u32>,
    max_slots: usize,
    arena: Vec<LinkNode<T>>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            count: 0,
            free: None,
            max_slots: MAX_SLOTS,
            arena: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: None,
            tail: None,
            count: 0,
            free: None,
            max_slots: MAX_SLOTS,
            arena: Vec::with_capacity(capacity),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Links `value` as the new head and returns its slot.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds [`MAX_SLOTS`] nodes.
    pub fn link_front(&mut self, value: T) -> u32 {
        let idx = self.alloc(value);
        self.splice_in(None, self.head, idx);
        idx
    }

    /// Links `value` as the new tail and returns its slot. Panics like
    /// [`link_front`](Self::link_front).
    pub fn link_back(&mut self, value: T) -> u32 {
        let idx = self.alloc(value);
        self.splice_in(self.tail, None, idx);
        idx
    }

    /// Like [`link_front`](Self::link_front); on allocation failure the
    /// sequence is unchanged.
    pub fn try_link_front(&mut self, value: T) -> Result<u32, AllocError> {
        self.reserve_slot()?;
        Ok(self.link_front(value))
    }

    /// Like [`link_back`](Self::link_back); on allocation failure the
    /// sequence is unchanged.
    pub fn try_link_back(&mut self, value: T) -> Result<u32, AllocError> {
        self.reserve_slot()?;
        Ok(self.link_back(value))
    }

    pub fn unlink_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    pub fn unlink_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.map(|i| self.value(i))
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.tail.map(|i| self.value(i))
    }

    /// Drops every value; the arena keeps its capacity.
    pub fn clear(&mut self) {
        trace!(count = self.count, "sequence clear");
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.count = 0;
    }

    /// Reverses the chain in place.
    pub fn reverse(&mut self) {
        trace!(count = self.count, "sequence reverse");
        let mut curr = self.head;
        while let Some(idx) = curr {
            let node = &mut self.arena[idx as usize];
            std::mem::swap(&mut node.prev, &mut node.next);
            curr = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.count,
        }
    }

    pub(crate) fn head_index(&self) -> Option<u32> {
        self.head
    }

    pub(crate) fn next_index(&self, idx: u32) -> Option<u32> {
        get_next(&self.arena, idx)
    }

    pub(crate) fn value(&self, idx: u32) -> &T {
        occupied(&self.arena[idx as usize])
    }

    /// Slot at position `pos`, walking from the nearer end.
    pub(crate) fn index_at(&self, pos: usize) -> Option<u32> {
        if pos >= self.count {
            return None;
        }
        if pos <= self.count / 2 {
            let mut curr = self.head;
            for _ in 0..pos {
                curr = curr.and_then(|i| get_next(&self.arena, i));
            }
            curr
        } else {
            let mut curr = self.tail;
            for _ in pos + 1..self.count {
                curr = curr.and_then(|i| get_prev(&self.arena, i));
            }
            curr
        }
    }

    /// Links `value` immediately before the occupied slot `at`.
    pub(crate) fn link_before(&mut self, at: u32, value: T) -> u32 {
        let idx = self.alloc(value);
        let prev = get_prev(&self.arena, at);
        self.splice_in(prev, Some(at), idx);
        idx
    }

    /// Detaches the occupied slot `idx` and returns its value.
    pub(crate) fn unlink(&mut self, idx: u32) -> Option<T> {
        let prev = get_prev(&self.arena, idx);
        let next = get_next(&self.arena, idx);
        match prev {
            Some(p) => set_next(&mut self.arena, p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => set_prev(&mut self.arena, n, prev),
            None => self.tail = prev,
        }
        self.count -= 1;
        self.release(idx)
    }

    /// Links the fresh slot `idx` between `prev` and `next`, which must be
    /// adjacent (or the matching end of the chain when `None`).
    fn splice_in(&mut self, prev: Option<u32>, next: Option<u32>, idx: u32) {
        set_prev(&mut self.arena, idx, prev);
        set_next(&mut self.arena, idx, next);
        match prev {
            Some(p) => set_next(&mut self.arena, p, Some(idx)),
            None => self.head = Some(idx),
        }
        match next {
            Some(n) => set_prev(&mut self.arena, n, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.count += 1;
    }

    fn reserve_slot(&mut self) -> Result<(), AllocError> {
        if self.free.is_none() {
            check_slot(self.arena.len(), self.max_slots)?;
            self.arena.try_reserve(1)?;
        }
        Ok(())
    }

    fn alloc(&mut self, value: T) -> u32 {
        if let Some(idx) = self.free {
            self.free = get_next(&self.arena, idx);
            self.arena[idx as usize] = LinkNode::new(value);
            return idx;
        }
        let idx = match check_slot(self.arena.len(), self.max_slots) {
            Ok(()) => self.arena.len() as u32,
            Err(err) => panic!("{err}"),
        };
        if self.arena.len() == self.arena.capacity() {
            trace!(len = self.arena.len(), "sequence arena grow");
        }
        self.arena.push(LinkNode::new(value));
        idx
    }

    fn release(&mut self, idx: u32) -> Option<T> {
        let value = self.arena[idx as usize].v.take();
        self.arena[idx as usize] = LinkNode::vacant(self.free);
        self.free = Some(idx);
        value
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Borrowing iterator over a [`Sequence`], front to back.
pub struct Iter<'a, T> {
    arena: &'a [LinkNode<T>],
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.front = get_next(self.arena, idx);
        self.remaining -= 1;
        Some(occupied(&self.arena[idx as usize]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.back = get_prev(self.arena, idx);
        self.remaining -= 1;
        Some(occupied(&self.arena[idx as usize]))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Sequence`], front to back.
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.seq.unlink_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.count, Some(self.seq.count))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.seq.unlink_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { seq: self }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_back(value);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}
