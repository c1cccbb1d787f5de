use crate::{Container, IndexOutOfBounds};

pub trait List<T>: Container<T> {
    /// Returns a copy of the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> T
    where
        T: Clone;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn set(&self, index: usize, item: T) -> T;

    fn try_get(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone;

    /// Returns the rejected item alongside the error when `index` is out of bounds.
    fn try_set(&self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)>;
}
