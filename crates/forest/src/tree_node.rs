use crate::types::Node;

/// Arena slot of a [`Bst`](crate::Bst).
///
/// A vacant slot has `v == None`; while vacant its `r` link chains it into
/// the tree's free list.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: Option<T>,
}

impl<T> TreeNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v: Some(v),
        }
    }

    pub(crate) fn vacant(next_free: Option<u32>) -> Self {
        Self {
            p: None,
            l: None,
            r: next_free,
            v: None,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.v.is_none()
    }
}

impl<T> Node for TreeNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
