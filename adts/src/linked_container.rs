use crate::element::Element;
use crate::lock::{LockMode, Locked, Unlocked};
use collection_traits::{Container, HasLength, IndexOutOfBounds};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;
use tracing::trace;

#[cfg(test)]
mod tests;

struct Node<T> {
    item: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn leak(item: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { item, next })))
    }
}

/// Unguarded state of a [`LinkedContainer`]: a singly linked chain of
/// heap nodes.
///
/// Nodes are leaked boxes linked through raw pointers; the chain owns all
/// of them and rebuilds the box when a node is unlinked. `tail` points at
/// the last node so appends do not walk the chain.
pub struct RawChain<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// Safety: every node is reachable only through this chain, which owns them
// the same way a `Box` owns its contents.
unsafe impl<T: Send> Send for RawChain<T> {}
unsafe impl<T: Sync> Sync for RawChain<T> {}

impl<T> RawChain<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _chain: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing linked container");
        self.release_nodes();
    }

    /// Releases every node without recursing through the chain.
    fn release_nodes(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            // Safety: `node` was leaked by this chain and is unlinked here
            // exactly once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            cursor = node.next;
        }
        self.tail = None;
        self.len = 0;
    }

    /// Pointer to the node at `index`, walking from the head.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        let mut cursor = self.head;
        for _ in 0..index {
            // Safety: `index < len`, so every hop lands on a live node.
            cursor = unsafe { cursor?.as_ref().next };
        }
        cursor
    }

    pub fn push_back(&mut self, item: T) {
        let node = Node::leak(item, None);
        match self.tail {
            None => self.head = Some(node),
            // Safety: `tail` is the live last node, and `&mut self` rules out
            // any other reference into the chain.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn push_front(&mut self, item: T) {
        let node = Node::leak(item, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: Element,
    {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: Element,
    {
        self.index_of(item).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.node_at(index)?;
        // Safety: the node is live and `&mut self` is the only way in.
        Some(unsafe { &mut (*node.as_ptr()).item })
    }

    pub fn first(&self) -> Option<&T> {
        // Safety: `head` is a live node borrowed through `&self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).item })
    }

    pub fn last(&self) -> Option<&T> {
        // Safety: `tail` is a live node borrowed through `&self`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).item })
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// On an out-of-range index the chain is untouched and `item` is handed
    /// back with the error.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err((IndexOutOfBounds::new(index, len), item)),
        }
    }

    pub fn take_first(&mut self) -> Option<T> {
        let head = self.head?;
        // Safety: `head` was leaked by this chain and is unlinked right here.
        let Node { item, next } = *unsafe { Box::from_raw(head.as_ptr()) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(item)
    }

    /// Removes the last element. Walks the chain to find its predecessor.
    pub fn take_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove_at(last).ok()
    }

    /// Unlinks the node at `index` and releases it.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len)?;
        if index == 0 {
            return self
                .take_first()
                .ok_or_else(|| IndexOutOfBounds::new(index, 0));
        }

        let Some(prev) = self.node_at(index - 1) else {
            unreachable!("chain is shorter than its length");
        };
        // Safety: `prev` and its successor are live nodes of this chain, and
        // `&mut self` rules out any other reference into it.
        let Some(removed) = (unsafe { (*prev.as_ptr()).next }) else {
            unreachable!("chain is shorter than its length");
        };
        // Safety: `removed` was leaked by this chain and is unlinked here.
        let Node { item, next } = *unsafe { Box::from_raw(removed.as_ptr()) };
        // Safety: see above.
        unsafe { (*prev.as_ptr()).next = next };
        if next.is_none() {
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(item)
    }

    /// Removes the first element equal to `item`.
    pub fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: Element,
    {
        let index = self.index_of(item)?;
        self.remove_at(index).ok()
    }
}

impl<T> Default for RawChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawChain<T> {
    fn drop(&mut self) {
        self.release_nodes();
    }
}

impl<T: Debug> Debug for RawChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RawChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Extend<T> for RawChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    _chain: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // Safety: the chain is borrowed for `'a`, so its nodes stay alive and
        // unmodified while the iterator exists.
        let node: &'a Node<T> = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RawChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A container backed by a singly linked chain of nodes.
///
/// Nodes are allocated and released one at a time, so there is no
/// capacity to manage. Appending and removing the first element are O(1);
/// index access walks the chain.
pub struct LinkedContainer<T, M: LockMode = Unlocked> {
    inner: M::Guarded<RawChain<T>>,
}

impl<T> LinkedContainer<T, Unlocked> {
    /// Creates an empty, single-threaded container.
    pub fn new() -> Self {
        Self::from_raw(RawChain::new())
    }
}

impl<T> LinkedContainer<T, Locked> {
    /// Creates an empty container that can be shared between threads.
    pub fn new_thread_safe() -> Self {
        Self::from_raw(RawChain::new())
    }
}

impl<T, M: LockMode> LinkedContainer<T, M> {
    pub fn from_raw(raw: RawChain<T>) -> Self {
        Self {
            inner: M::guard(raw),
        }
    }

    pub fn is_thread_safe(&self) -> bool {
        M::THREAD_SAFE
    }

    /// Runs `f` as a single critical section over the whole chain.
    ///
    /// Calling back into this container from `f` panics on an
    /// [`Unlocked`] container and deadlocks on a [`Locked`] one.
    pub fn with_locked<R>(&self, f: impl FnOnce(&mut RawChain<T>) -> R) -> R {
        M::with(&self.inner, f)
    }

    pub fn len(&self) -> usize {
        self.with_locked(|raw| raw.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with_locked(|raw| raw.is_empty())
    }

    pub fn clear(&self) {
        self.with_locked(|raw| raw.clear())
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: Element,
    {
        self.with_locked(|raw| raw.contains(item))
    }

    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: Element,
    {
        self.with_locked(|raw| raw.index_of(item))
    }

    /// Appends `item` after the current tail. Always succeeds.
    pub fn add(&self, item: T) -> bool {
        self.with_locked(|raw| raw.push_back(item));
        true
    }

    pub fn push_front(&self, item: T) {
        self.with_locked(|raw| raw.push_front(item))
    }

    pub fn remove(&self, item: &T) -> bool
    where
        T: Element,
    {
        self.with_locked(|raw| raw.remove_item(item)).is_some()
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn remove_at(&self, index: usize) -> T {
        match self.try_remove_at(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_remove_at(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.with_locked(|raw| raw.remove_at(index))
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        match self.try_get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_get(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone,
    {
        self.with_locked(|raw| {
            raw.get(index)
                .cloned()
                .ok_or_else(|| IndexOutOfBounds::new(index, raw.len()))
        })
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn set(&self, index: usize, item: T) -> T {
        match self.try_set(index, item) {
            Ok(old) => old,
            Err((err, _)) => panic!("{err}"),
        }
    }

    pub fn try_set(&self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)> {
        self.with_locked(|raw| raw.set(index, item))
    }

    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.with_locked(|raw| raw.first().cloned())
    }

    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.with_locked(|raw| raw.last().cloned())
    }

    pub fn take_first(&self) -> Option<T> {
        self.with_locked(|raw| raw.take_first())
    }

    pub fn take_last(&self) -> Option<T> {
        self.with_locked(|raw| raw.take_last())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.with_locked(|raw| raw.iter().cloned().collect())
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut raw = M::into_inner(self.inner);
        let mut items = Vec::with_capacity(raw.len());
        while let Some(item) = raw.take_first() {
            items.push(item);
        }
        items
    }
}

impl<T, M: LockMode> HasLength for LinkedContainer<T, M> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Element, M: LockMode> Container<T> for LinkedContainer<T, M> {
    fn clear(&self) {
        self.clear()
    }

    fn contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn add(&self, item: T) -> bool {
        self.add(item)
    }

    fn remove(&self, item: &T) -> bool {
        self.remove(item)
    }
}

impl<T, M: LockMode> Default for LinkedContainer<T, M> {
    fn default() -> Self {
        Self::from_raw(RawChain::new())
    }
}

impl<T, M: LockMode> FromIterator<T> for LinkedContainer<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_raw(iter.into_iter().collect())
    }
}

impl<T, M: LockMode> Extend<T> for LinkedContainer<T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        M::get_mut(&mut self.inner).extend(iter);
    }
}

impl<T: Debug, M: LockMode> Debug for LinkedContainer<T, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.with_locked(|raw| {
            f.debug_struct("LinkedContainer")
                .field("elements", &*raw)
                .field("thread_safe", &M::THREAD_SAFE)
                .finish()
        })
    }
}
