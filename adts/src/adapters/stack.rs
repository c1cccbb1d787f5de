use crate::adapters::delegate_container;
use crate::element::Element;
use crate::linked_container::LinkedContainer;
use crate::lock::{Locked, Unlocked};
use crate::slice_container::SliceContainer;
use crate::store::Store;
use duplicate::duplicate_item;
use std::marker::PhantomData;

/// A last-in, first-out stack. The top is whichever end the store pops in
/// O(1), see [`Store`].
pub struct BackedStack<T, S> {
    store: S,
    _item: PhantomData<fn() -> T>,
}

pub type SliceStack<T, M = Unlocked> = BackedStack<T, SliceContainer<T, M>>;

pub type LinkedStack<T, M = Unlocked> = BackedStack<T, LinkedContainer<T, M>>;

delegate_container!(BackedStack);

#[duplicate_item(
    tStore              tMode           constructor;
    [ SliceContainer ]  [ Unlocked ]    [ new ];
    [ SliceContainer ]  [ Locked ]      [ new_thread_safe ];
    [ LinkedContainer ] [ Unlocked ]    [ new ];
    [ LinkedContainer ] [ Locked ]      [ new_thread_safe ];
)]
impl<T: Element> BackedStack<T, tStore<T, tMode>> {
    pub fn constructor() -> Self {
        Self::from_store(tStore::constructor())
    }
}

impl<T, S: Store<T>> BackedStack<T, S> {
    /// Same as [`push`](Self::push).
    pub fn add(&self, item: T) -> bool {
        self.push(item)
    }

    /// Puts `item` on top of the stack. Always succeeds.
    pub fn push(&self, item: T) -> bool {
        self.store.push_top(item);
        true
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn pop(&self) -> Option<T> {
        self.store.pop_top()
    }

    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.store.peek_top()
    }
}

impl<T, S: Store<T>> collection_traits::Stack<T> for BackedStack<T, S> {
    fn push(&self, item: T) -> bool {
        self.push(item)
    }

    fn pop(&self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.peek()
    }
}
