use crate::types::Link;

/// Arena slot of a [`Sequence`](crate::Sequence).
///
/// A vacant slot has `v == None`; while vacant its `next` link chains it
/// into the sequence's free list.
#[derive(Clone, Debug)]
pub struct LinkNode<T> {
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub v: Option<T>,
}

impl<T> LinkNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            prev: None,
            next: None,
            v: Some(v),
        }
    }

    pub(crate) fn vacant(next_free: Option<u32>) -> Self {
        Self {
            prev: None,
            next: next_free,
            v: None,
        }
    }
}

impl<T> Link for LinkNode<T> {
    fn prev(&self) -> Option<u32> {
        self.prev
    }

    fn next(&self) -> Option<u32> {
        self.next
    }

    fn set_prev(&mut self, v: Option<u32>) {
        self.prev = v;
    }

    fn set_next(&mut self, v: Option<u32>) {
        self.next = v;
    }
}
