use crate::element::Element;
use crate::linked_container::LinkedContainer;
use crate::lock::LockMode;
use crate::slice_container::SliceContainer;
use collection_traits::{Container, IndexOutOfBounds};

/// A backing store the list, queue and stack adapters can sit on.
///
/// Each method is a single critical section of the store, so compound
/// steps such as "read the first element, then remove it" are atomic
/// even on a shared store.
///
/// The "top" end used by stacks is whichever end the store can pop in
/// O(1): the tail of a [`SliceContainer`], the head of a
/// [`LinkedContainer`].
pub trait Store<T>: Container<T> {
    fn is_thread_safe(&self) -> bool;

    fn get(&self, index: usize) -> T
    where
        T: Clone;

    fn try_get(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone;

    fn set(&self, index: usize, item: T) -> T;

    fn try_set(&self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)>;

    fn remove_at(&self, index: usize) -> T;

    fn try_remove_at(&self, index: usize) -> Result<T, IndexOutOfBounds>;

    fn push_top(&self, item: T);

    fn pop_top(&self) -> Option<T>;

    fn peek_top(&self) -> Option<T>
    where
        T: Clone;

    fn pop_front(&self) -> Option<T>;

    fn peek_front(&self) -> Option<T>
    where
        T: Clone;

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

#[duplicate::duplicate_item(
    tStore              push_top_impl   pop_top_impl    peek_top_impl;
    [ SliceContainer ]  [ add ]         [ take_last ]   [ last ];
    [ LinkedContainer ] [ push_front ]  [ take_first ]  [ first ];
)]
impl<T: Element, M: LockMode> Store<T> for tStore<T, M> {
    fn is_thread_safe(&self) -> bool {
        self.is_thread_safe()
    }

    #[track_caller]
    fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.get(index)
    }

    fn try_get(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone,
    {
        self.try_get(index)
    }

    #[track_caller]
    fn set(&self, index: usize, item: T) -> T {
        self.set(index, item)
    }

    fn try_set(&self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)> {
        self.try_set(index, item)
    }

    #[track_caller]
    fn remove_at(&self, index: usize) -> T {
        self.remove_at(index)
    }

    fn try_remove_at(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.try_remove_at(index)
    }

    fn push_top(&self, item: T) {
        self.push_top_impl(item);
    }

    fn pop_top(&self) -> Option<T> {
        self.pop_top_impl()
    }

    fn peek_top(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek_top_impl()
    }

    fn pop_front(&self) -> Option<T> {
        self.take_first()
    }

    fn peek_front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.first()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}
