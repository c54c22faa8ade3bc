use thiserror::Error;

pub use containers_forest::AllocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("position {pos} is out of range for a list of {len} elements")]
    OutOfRange { pos: usize, len: usize },
}
