//! Tree (p / l / r) utility functions.
//!
//! Key-based helpers (`find`, `find_slot`) accept a `key_of` accessor closure
//! so they work with any arena-backed node layout. Every walk is iterative;
//! an unbalanced tree may degrade into a chain as long as the arena.

use std::cmp::Ordering;

use crate::error::AllocError;
use crate::types::Node;

/// Largest number of slots an index arena may hold; slot indices are `u32`.
pub const MAX_SLOTS: usize = u32::MAX as usize;

/// Checks that an arena of `len` slots with at most `limit` slots can take
/// one more.
pub fn check_slot(len: usize, limit: usize) -> Result<(), AllocError> {
    let limit = limit.min(MAX_SLOTS);
    if len < limit {
        Ok(())
    } else {
        Err(AllocError::Exhausted { limit })
    }
}

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, key_of(&arena[i as usize])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Empty child position a new key would occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Root,
    Left(u32),
    Right(u32),
}

/// Descends from `root` to the empty slot where `key` belongs.
///
/// Returns `Err(existing)` when a node with an equal key is already present.
pub fn find_slot<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Result<Slot, u32>
where
    N: Node,
    K: ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = root else {
        return Ok(Slot::Root);
    };
    loop {
        match comparator(key, key_of(&arena[curr as usize])) {
            Ordering::Equal => return Err(curr),
            Ordering::Less => match get_l(arena, curr) {
                Some(l) => curr = l,
                None => return Ok(Slot::Left(curr)),
            },
            Ordering::Greater => match get_r(arena, curr) {
                Some(r) => curr = r,
                None => return Ok(Slot::Right(curr)),
            },
        }
    }
}

/// Links the detached `node` into `slot`. Returns the new root.
pub fn attach<N: Node>(arena: &mut [N], root: Option<u32>, slot: Slot, node: u32) -> Option<u32> {
    match slot {
        Slot::Root => {
            set_p(arena, node, None);
            Some(node)
        }
        Slot::Left(parent) => {
            set_l(arena, parent, Some(node));
            set_p(arena, node, Some(parent));
            root
        }
        Slot::Right(parent) => {
            set_r(arena, parent, Some(node));
            set_p(arena, node, Some(parent));
            root
        }
    }
}

/// Unlinks `node`, which must have at most one child, splicing that child
/// into its position. Returns the new root.
pub fn splice<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice of a two-child node");
    let child = l.or(r);

    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    if let Some(c) = child {
        set_p(arena, c, p);
    }
    match p {
        Some(p) => {
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, child);
            } else {
                set_r(arena, p, child);
            }
            root
        }
        None => child,
    }
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut height = 0;
    let mut level: Vec<u32> = root.into_iter().collect();
    while !level.is_empty() {
        height += 1;
        level = level
            .iter()
            .flat_map(|&i| [get_l(arena, i), get_r(arena, i)])
            .flatten()
            .collect();
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeNode;

    fn key_of(n: &TreeNode<i32>) -> &i32 {
        n.v.as_ref().unwrap()
    }

    fn arena_of(keys: &[i32]) -> (Vec<TreeNode<i32>>, Option<u32>) {
        let mut arena: Vec<TreeNode<i32>> = Vec::new();
        let mut root = None;
        for &k in keys {
            let slot = find_slot(&arena, root, &k, key_of, i32::cmp).expect("distinct keys");
            let idx = arena.len() as u32;
            arena.push(TreeNode::new(k));
            root = attach(&mut arena, root, slot, idx);
        }
        (arena, root)
    }

    fn key(arena: &[TreeNode<i32>], idx: Option<u32>) -> Option<i32> {
        idx.and_then(|i| arena[i as usize].v)
    }

    #[test]
    fn first_last_next_prev() {
        let (arena, root) = arena_of(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(key(&arena, first(&arena, root)), Some(1));
        assert_eq!(key(&arena, last(&arena, root)), Some(9));

        let mut walked = Vec::new();
        let mut curr = first(&arena, root);
        while let Some(i) = curr {
            walked.push(arena[i as usize].v.unwrap());
            curr = next(&arena, i);
        }
        assert_eq!(walked, vec![1, 3, 4, 5, 7, 8, 9]);

        let mut back = Vec::new();
        let mut curr = last(&arena, root);
        while let Some(i) = curr {
            back.push(arena[i as usize].v.unwrap());
            curr = prev(&arena, i);
        }
        assert_eq!(back, vec![9, 8, 7, 5, 4, 3, 1]);
    }

    #[test]
    fn find_slot_rejects_equal_key() {
        let (arena, root) = arena_of(&[5, 3, 8]);
        let of = key_of;
        assert_eq!(find_slot(&arena, root, &3, of, i32::cmp), Err(1));
        assert_eq!(find_slot(&arena, root, &2, of, i32::cmp), Ok(Slot::Left(1)));
        assert_eq!(find_slot(&arena, root, &9, of, i32::cmp), Ok(Slot::Right(2)));
        assert_eq!(find_slot(&arena, None, &9, of, i32::cmp), Ok(Slot::Root));
        assert_eq!(find(&arena, root, &8, of, i32::cmp), Some(2));
        assert_eq!(find(&arena, root, &6, of, i32::cmp), None);
    }

    #[test]
    fn splice_root_with_single_child() {
        let (mut arena, root) = arena_of(&[5, 8, 7]);
        let root = splice(&mut arena, root, 0);
        assert_eq!(key(&arena, root), Some(8));
        assert_eq!(arena[1].p, None);
        assert_eq!(arena[0].l, None);
        assert_eq!(arena[0].r, None);
    }

    #[test]
    fn splice_inner_node_relinks_parent() {
        let (mut arena, root) = arena_of(&[5, 3, 1]);
        let root = splice(&mut arena, root, 1);
        assert_eq!(key(&arena, root), Some(5));
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[2].p, Some(0));
    }

    #[test]
    fn height_of_chain_and_bushy_tree() {
        let (arena, root) = arena_of(&[1, 2, 3, 4]);
        assert_eq!(height(&arena, root), 4);
        let (arena, root) = arena_of(&[2, 1, 3]);
        assert_eq!(height(&arena, root), 2);
        assert_eq!(height::<TreeNode<i32>>(&[], None), 0);
    }

    #[test]
    fn check_slot_caps_at_limit_and_u32_range() {
        assert_eq!(check_slot(0, 1), Ok(()));
        assert_eq!(check_slot(1, 1), Err(AllocError::Exhausted { limit: 1 }));
        assert_eq!(check_slot(MAX_SLOTS - 1, usize::MAX), Ok(()));
        assert_eq!(
            check_slot(MAX_SLOTS, usize::MAX),
            Err(AllocError::Exhausted { limit: MAX_SLOTS })
        );
    }
}
