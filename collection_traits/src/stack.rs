use crate::Container;

/// Last-in, first-out access on top of [`Container`].
pub trait Stack<T>: Container<T> {
    fn push(&self, item: T) -> bool;

    /// Removes and returns the most recently pushed element, or `None` if empty.
    fn pop(&self) -> Option<T>;

    fn peek(&self) -> Option<T>
    where
        T: Clone;
}
