//! Sequence link definitions.

/// Chain links (`prev`, `next`) as indices into a [`Vec`]-backed arena.
///
/// `prev` is a back-reference; the arena owns every slot.
pub trait Link {
    fn prev(&self) -> Option<u32>;
    fn next(&self) -> Option<u32>;
    fn set_prev(&mut self, v: Option<u32>);
    fn set_next(&mut self, v: Option<u32>);
}
