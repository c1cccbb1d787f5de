use crate::Container;

/// First-in, first-out access on top of [`Container`].
pub trait Queue<T>: Container<T> {
    /// Appends `item` to the back of the queue.
    fn enqueue(&self, item: T) -> bool {
        self.add(item)
    }

    /// Removes and returns the element at the front, or `None` if empty.
    fn dequeue(&self) -> Option<T>;

    fn peek(&self) -> Option<T>
    where
        T: Clone;
}
