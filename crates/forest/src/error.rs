use std::collections::TryReserveError;

use thiserror::Error;

/// Domain errors of [`Bst`](crate::Bst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BstError {
    /// `min`, `max` and `root` have nothing to traverse from.
    #[error("the binary search tree is empty")]
    Empty,
}

/// A node slot could not be allocated. The container is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("failed to allocate a container node")]
    Reserve(#[from] TryReserveError),
    /// Every `u32` slot index is taken.
    #[error("node arena limit of {limit} slots reached")]
    Exhausted { limit: usize },
}
