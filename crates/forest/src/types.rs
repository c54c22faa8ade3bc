//! Node trait definitions.
//!
//! Each link is an `Option<u32>` index into a [`Vec`]-backed arena. All
//! tree-manipulation functions take the arena as a slice and work with
//! indices.

/// Tree links (`p`, `l`, `r`).
///
/// `p` is a back-reference used only for upward traversal. Ownership of a
/// slot always belongs to the arena.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
