//! Arena-based binary search tree.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every "pointer"
//! (`p` / `l` / `r`) is an `Option<u32>` index into that arena, so the parent
//! link is a plain navigation handle and never takes part in destruction.
//! Freed slots are chained into an intrusive free list and reused by later
//! inserts.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] trait (p / l / r links) |
//! [`tree_node`] | [`TreeNode`], the arena slot used by [`Bst`] |
//! [`util`] | `first`, `last`, `next`, `prev`, `find`, `find_slot`, `attach`, `splice`, slot limits |
//! [`bst`] | [`Bst`]: insert / find / remove / min / max |
//! [`print`] | indented structural dump of a [`Bst`] |
//! [`error`] | [`BstError`], [`AllocError`] |

pub mod bst;
pub mod error;
pub mod print;
pub mod tree_node;
pub mod types;
pub mod util;

pub use bst::{Bst, IntoIter, Iter};
pub use error::{AllocError, BstError};
pub use tree_node::TreeNode;
pub use types::Node;
pub use util::{check_slot, first, last, next, prev, Slot, MAX_SLOTS};
