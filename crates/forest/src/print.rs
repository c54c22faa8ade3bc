//! Structural dump of a [`Bst`] for diagnostics.

use std::fmt::Display;

use crate::bst::{occupied, Bst};

impl<T: Display> Bst<T> {
    /// Renders the tree shape, one node per line, left subtree first.
    ///
    /// ```text
    /// Bst
    /// └─ 5
    ///   ← 3
    ///   → 8
    /// ```
    pub fn print(&self, tab: &str) -> String {
        let arena = self.arena();
        let Some(root) = self.root_index() else {
            return "Bst ∅".to_string();
        };

        let mut out = String::from("Bst");
        let mut stack = vec![(root, tab.to_string(), "└─")];
        while let Some((idx, tab, side)) = stack.pop() {
            let node = &arena[idx as usize];
            out.push_str(&format!("\n{tab}{side} {}", occupied(node)));
            let child_tab = format!("{tab}  ");
            if let Some(r) = node.r {
                stack.push((r, child_tab.clone(), "→"));
            }
            if let Some(l) = node.l {
                stack.push((l, child_tab, "←"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_left_before_right() {
        let tree: Bst<i32> = [5, 3, 8, 1].into_iter().collect();
        assert_eq!(tree.print(""), "Bst\n└─ 5\n  ← 3\n    ← 1\n  → 8");
        assert_eq!(Bst::<i32>::new().print(""), "Bst ∅");
    }
}
