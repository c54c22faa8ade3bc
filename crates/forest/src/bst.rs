use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::error::{AllocError, BstError};
use crate::tree_node::TreeNode;
use crate::util::{
    self, attach, check_slot, find, find_slot, first, last, splice, Slot, MAX_SLOTS,
};

#[inline]
pub(crate) fn occupied<T>(node: &TreeNode<T>) -> &T {
    match &node.v {
        Some(v) => v,
        None => unreachable!("vacant slot linked into the tree"),
    }
}

/// Unbalanced binary search tree over an index arena.
///
/// Duplicate values are rejected: inserting a value equal to one already
/// present leaves the tree untouched. Removing a node with two children
/// moves the in-order predecessor's value into that node and unlinks the
/// predecessor instead, so every unlink is a leaf or single-child splice.
#[derive(Clone)]
pub struct Bst<T> {
    root: Option<u32>,
    count: usize,
    free: Option<u32>,
    max_slots: usize,
    arena: Vec<TreeNode<T>>,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bst<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
            free: None,
            max_slots: MAX_SLOTS,
            arena: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
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

    /// Value held by the topmost node.
    pub fn root(&self) -> Result<&T, BstError> {
        self.root
            .map(|i| occupied(&self.arena[i as usize]))
            .ok_or(BstError::Empty)
    }

    pub fn min(&self) -> Result<&T, BstError> {
        first(&self.arena, self.root)
            .map(|i| occupied(&self.arena[i as usize]))
            .ok_or(BstError::Empty)
    }

    pub fn max(&self) -> Result<&T, BstError> {
        last(&self.arena, self.root)
            .map(|i| occupied(&self.arena[i as usize]))
            .ok_or(BstError::Empty)
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Drops every value; the arena keeps its capacity.
    pub fn clear(&mut self) {
        trace!(count = self.count, "bst clear");
        self.arena.clear();
        self.root = None;
        self.free = None;
        self.count = 0;
    }

    /// In-order (ascending) iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
            remaining: self.count,
        }
    }

    pub(crate) fn arena(&self) -> &[TreeNode<T>] {
        &self.arena
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
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
            self.free = self.arena[idx as usize].r;
            self.arena[idx as usize] = TreeNode::new(value);
            return idx;
        }
        let idx = match check_slot(self.arena.len(), self.max_slots) {
            Ok(()) => self.arena.len() as u32,
            Err(err) => panic!("{err}"),
        };
        if self.arena.len() == self.arena.capacity() {
            trace!(len = self.arena.len(), "bst arena grow");
        }
        self.arena.push(TreeNode::new(value));
        idx
    }

    fn release(&mut self, idx: u32) -> Option<T> {
        let value = self.arena[idx as usize].v.take();
        self.arena[idx as usize] = TreeNode::vacant(self.free);
        self.free = Some(idx);
        value
    }

    fn link(&mut self, slot: Slot, value: T) {
        let idx = self.alloc(value);
        self.root = attach(&mut self.arena, self.root, slot, idx);
        self.count += 1;
    }
}

impl<T: Ord> Bst<T> {
    /// Inserts `value`. Returns `false` if an equal value is already present.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds [`MAX_SLOTS`] nodes.
    pub fn insert(&mut self, value: T) -> bool {
        match find_slot(&self.arena, self.root, &value, occupied, Ord::cmp) {
            Ok(slot) => {
                self.link(slot, value);
                true
            }
            Err(_) => false,
        }
    }

    /// Like [`insert`](Self::insert), but reports allocation failure instead
    /// of aborting. On error the tree is unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<bool, AllocError> {
        match find_slot(&self.arena, self.root, &value, occupied, Ord::cmp) {
            Ok(slot) => {
                self.reserve_slot()?;
                self.link(slot, value);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    pub fn find(&self, value: &T) -> bool {
        find(&self.arena, self.root, value, occupied, Ord::cmp).is_some()
    }

    /// Removes `value`, returning it. Absent values are a no-op.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let node = find(&self.arena, self.root, value, occupied, Ord::cmp)?;
        let target = match (self.arena[node as usize].l, self.arena[node as usize].r) {
            (Some(l), Some(_)) => {
                let pred = last(&self.arena, Some(l)).unwrap_or(l);
                trace!(node, pred, "bst remove: two children, unlinking predecessor");
                let moved = self.arena[pred as usize].v.take();
                let removed = std::mem::replace(&mut self.arena[node as usize].v, moved);
                self.arena[pred as usize].v = removed;
                pred
            }
            _ => node,
        };
        self.root = splice(&mut self.arena, self.root, target);
        self.count -= 1;
        self.release(target)
    }

    /// Checks parent links, the ordering property and the node count.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.count == 0 {
                Ok(())
            } else {
                Err(format!("Empty root with count {}", self.count))
            };
        };
        if self.arena[root as usize].p.is_some() {
            return Err("Root has parent".to_string());
        }

        let mut seen = 0usize;
        let mut stack: Vec<(u32, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((idx, lo, hi)) = stack.pop() {
            let node = &self.arena[idx as usize];
            let Some(v) = node.v.as_ref() else {
                return Err(format!("Vacant slot {idx} is linked"));
            };
            if lo.is_some_and(|lo| v <= lo) || hi.is_some_and(|hi| v >= hi) {
                return Err(format!("Order violated at slot {idx}"));
            }
            seen += 1;
            if seen > self.count {
                return Err("More reachable nodes than count".to_string());
            }
            if let Some(l) = node.l {
                if self.arena[l as usize].p != Some(idx) {
                    return Err("Broken parent link on left child".to_string());
                }
                stack.push((l, lo, Some(v)));
            }
            if let Some(r) = node.r {
                if self.arena[r as usize].p != Some(idx) {
                    return Err("Broken parent link on right child".to_string());
                }
                stack.push((r, Some(v), hi));
            }
        }
        if seen != self.count {
            return Err(format!("Count {} but {seen} reachable nodes", self.count));
        }
        Ok(())
    }
}

impl<T: Ord> Extend<T> for Bst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for Bst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Bst<T> {
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

/// Borrowing in-order iterator, see [`Bst::iter`].
pub struct Iter<'a, T> {
    arena: &'a [TreeNode<T>],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let idx = self.curr?;
        self.curr = util::next(self.arena, idx);
        self.remaining -= 1;
        Some(occupied(&self.arena[idx as usize]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning in-order iterator.
pub struct IntoIter<T> {
    arena: Vec<TreeNode<T>>,
    curr: Option<u32>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let idx = self.curr?;
        // Taking the value leaves the links intact for the successor walk.
        self.curr = util::next(&self.arena, idx);
        self.remaining -= 1;
        self.arena[idx as usize].v.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Bst<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let curr = first(&self.arena, self.root);
        IntoIter {
            arena: self.arena,
            curr,
            remaining: self.count,
        }
    }
}

impl<'a, T> IntoIterator for &'a Bst<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
