//! Containers over index arenas.
//!
//! - [`Sequence`]: doubly-linked chain with O(1) access at both ends; the
//!   shared engine behind [`Queue`], [`Stack`] and [`SortedList`].
//! - [`Queue`]: FIFO, enqueue at the back, dequeue at the front.
//! - [`Stack`]: LIFO, push and pop at the front.
//! - [`SortedList`]: ordered list with positional access.
//! - [`Counter`]: element occurrence counts, ranked by frequency.
//! - [`Bst`]: unbalanced binary search tree, re-exported from
//!   `containers-forest`.
//!
//! Running out of elements is reported as `None`; asking an empty [`Bst`]
//! for `min`/`max`/`root` is a [`BstError`]; failed node allocation is an
//! [`AllocError`] from the `try_*` mutators.

pub mod counter;
pub mod error;
pub mod link_node;
pub mod queue;
pub mod sequence;
pub mod sorted_list;
pub mod stack;
pub mod types;

pub use containers_forest::{Bst, BstError};
pub use counter::Counter;
pub use error::{AllocError, ListError};
pub use link_node::LinkNode;
pub use queue::Queue;
pub use sequence::Sequence;
pub use sorted_list::SortedList;
pub use stack::Stack;
pub use types::Link;
