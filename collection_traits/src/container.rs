use crate::HasLength;

/// The capability set shared by lists, queues and stacks.
pub trait Container<T>: HasLength {
    /// Removes every element.
    fn clear(&self);

    /// Returns `true` if an element equal to `item` is stored.
    fn contains(&self, item: &T) -> bool;

    /// Appends `item`, returning whether it was accepted.
    fn add(&self, item: T) -> bool;

    /// Removes the first element equal to `item`.
    ///
    /// Returns `false` and leaves the container untouched if there is none.
    fn remove(&self, item: &T) -> bool;
}
