use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("index out of bounds: the len is {} but the index is {}", .len, .index)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    pub fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// Returns an error if `index` does not address an element of a
    /// collection of length `len`.
    pub fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::new(index, len))
        }
    }
}
