use crate::adapters::delegate_container;
use crate::element::Element;
use crate::linked_container::LinkedContainer;
use crate::lock::{Locked, Unlocked};
use crate::slice_container::SliceContainer;
use crate::store::Store;
use duplicate::duplicate_item;
use std::marker::PhantomData;

/// A first-in, first-out queue.
pub struct BackedQueue<T, S> {
    store: S,
    _item: PhantomData<fn() -> T>,
}

/// A queue over a growable buffer. Dequeueing shifts the remaining
/// elements, so it is O(n).
pub type SliceQueue<T, M = Unlocked> = BackedQueue<T, SliceContainer<T, M>>;

/// A queue over a linked chain. Both ends are O(1).
pub type LinkedQueue<T, M = Unlocked> = BackedQueue<T, LinkedContainer<T, M>>;

delegate_container!(BackedQueue);

#[duplicate_item(
    tStore              tMode           constructor;
    [ SliceContainer ]  [ Unlocked ]    [ new ];
    [ SliceContainer ]  [ Locked ]      [ new_thread_safe ];
    [ LinkedContainer ] [ Unlocked ]    [ new ];
    [ LinkedContainer ] [ Locked ]      [ new_thread_safe ];
)]
impl<T: Element> BackedQueue<T, tStore<T, tMode>> {
    pub fn constructor() -> Self {
        Self::from_store(tStore::constructor())
    }
}

impl<T, S: Store<T>> BackedQueue<T, S> {
    /// Same as [`enqueue`](Self::enqueue).
    pub fn add(&self, item: T) -> bool {
        self.store.add(item)
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&self, item: T) -> bool {
        self.add(item)
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty. Reading and removing happen in one critical section.
    pub fn dequeue(&self) -> Option<T> {
        self.store.pop_front()
    }

    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.store.peek_front()
    }
}

impl<T, S: Store<T>> collection_traits::Queue<T> for BackedQueue<T, S> {
    fn enqueue(&self, item: T) -> bool {
        self.enqueue(item)
    }

    fn dequeue(&self) -> Option<T> {
        self.dequeue()
    }

    fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek()
    }
}
