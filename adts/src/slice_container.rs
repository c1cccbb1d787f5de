use crate::element::Element;
use crate::lock::{LockMode, Locked, Unlocked};
use crate::settings::SliceSettings;
use collection_traits::{Container, HasLength, IndexOutOfBounds};
use std::fmt::{Debug, Formatter};
use tracing::trace;


/// Unguarded state of a [`SliceContainer`].
///
/// Only reachable through [`SliceContainer::with_locked`] (or by owning
/// it outright), so none of these methods touch a lock.
#[derive(Debug, Clone)]
pub struct RawSlice<T> {
    elements: Vec<T>,
    settings: SliceSettings,
}

impl<T> RawSlice<T> {
    pub fn new(settings: SliceSettings) -> Self {
        Self {
            elements: Vec::with_capacity(settings.initial_capacity()),
            settings,
        }
    }

    pub fn from_vec(elements: Vec<T>, settings: SliceSettings) -> Self {
        Self { elements, settings }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn settings(&self) -> SliceSettings {
        self.settings
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Drops every element and the allocation holding them, going back to
    /// the initial capacity.
    pub fn clear(&mut self) {
        trace!(
            len = self.elements.len(),
            capacity = self.elements.capacity(),
            "clearing slice container"
        );
        self.elements = Vec::with_capacity(self.settings.initial_capacity());
    }

    /// Appends `item`, doubling the capacity when the buffer is full.
    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Position of the first element equal to `item`.
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
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// On an out-of-range index the buffer is untouched and `item` is handed
    /// back with the error.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)> {
        let len = self.elements.len();
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err((IndexOutOfBounds::new(index, len), item)),
        }
    }

    /// Removes the element at `index`, shifting everything after it one
    /// position to the left, then gives back capacity if the buffer became
    /// sparse.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.elements.len())?;
        let item = self.elements.remove(index);
        self.shrink_if_sparse();
        Ok(item)
    }

    /// Removes the first element equal to `item`.
    pub fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: Element,
    {
        let index = self.index_of(item)?;
        let removed = self.elements.remove(index);
        self.shrink_if_sparse();
        Some(removed)
    }

    pub fn take_first(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let item = self.elements.remove(0);
        self.shrink_if_sparse();
        Some(item)
    }

    pub fn take_last(&mut self) -> Option<T> {
        let item = self.elements.pop()?;
        self.shrink_if_sparse();
        Some(item)
    }

    /// Halves the capacity once occupancy drops to the shrink factor.
    ///
    /// The new capacity never goes below the current length.
    fn shrink_if_sparse(&mut self) {
        // Zero-sized elements never allocate.
        if std::mem::size_of::<T>() == 0 {
            return;
        }

        let capacity = self.elements.capacity();
        if capacity == 0 {
            return;
        }

        let len = self.elements.len();
        if !is_sparse(len, capacity, self.settings.shrink_factor()) {
            return;
        }

        let target = (capacity / 2).max(len);
        if target < capacity {
            trace!(len, capacity, target, "shrinking slice container");
            self.elements.shrink_to(target);
        }
    }
}

/// Whether `len / capacity <= shrink_factor`.
///
/// Compared as `len <= shrink_factor * capacity` in `f64`, which is exact
/// for every length below 2^53.
fn is_sparse(len: usize, capacity: usize, shrink_factor: f32) -> bool {
    len as f64 <= f64::from(shrink_factor) * capacity as f64
}

/// A container backed by one contiguous, growable buffer.
///
/// Appends are amortized O(1); removals shift the tail of the buffer and
/// may halve the capacity (see [`SliceSettings`]). Index access is O(1).
///
/// Element access hands out clones: the buffer sits behind the lock, so
/// references into it cannot leave a critical section. Use
/// [`with_locked`](Self::with_locked) to work on the buffer in place.
pub struct SliceContainer<T, M: LockMode = Unlocked> {
    inner: M::Guarded<RawSlice<T>>,
}

impl<T> SliceContainer<T, Unlocked> {
    /// Creates an empty, single-threaded container.
    pub fn new() -> Self {
        Self::with_settings(SliceSettings::default())
    }
}

impl<T> SliceContainer<T, Locked> {
    /// Creates an empty container that can be shared between threads.
    pub fn new_thread_safe() -> Self {
        Self::with_settings(SliceSettings::default())
    }
}

impl<T, M: LockMode> SliceContainer<T, M> {
    pub fn with_settings(settings: SliceSettings) -> Self {
        Self::from_raw(RawSlice::new(settings))
    }

    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_raw(RawSlice::from_vec(elements, SliceSettings::default()))
    }

    pub fn from_raw(raw: RawSlice<T>) -> Self {
        Self {
            inner: M::guard(raw),
        }
    }

    pub fn is_thread_safe(&self) -> bool {
        M::THREAD_SAFE
    }

    /// Runs `f` as a single critical section over the whole buffer.
    ///
    /// Calling back into this container from `f` panics on an
    /// [`Unlocked`] container and deadlocks on a [`Locked`] one.
    pub fn with_locked<R>(&self, f: impl FnOnce(&mut RawSlice<T>) -> R) -> R {
        M::with(&self.inner, f)
    }

    pub fn settings(&self) -> SliceSettings {
        self.with_locked(|raw| raw.settings())
    }

    pub fn len(&self) -> usize {
        self.with_locked(|raw| raw.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with_locked(|raw| raw.is_empty())
    }

    pub fn capacity(&self) -> usize {
        self.with_locked(|raw| raw.capacity())
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

    /// Appends `item` to the end of the buffer. Always succeeds.
    pub fn add(&self, item: T) -> bool {
        self.with_locked(|raw| raw.push(item));
        true
    }

    /// Removes the first element equal to `item`, returning `false` if
    /// there is none.
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

    /// Removes and returns the first element in one critical section.
    pub fn take_first(&self) -> Option<T> {
        self.with_locked(|raw| raw.take_first())
    }

    /// Removes and returns the last element in one critical section.
    pub fn take_last(&self) -> Option<T> {
        self.with_locked(|raw| raw.take_last())
    }

    /// Copies the elements out in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.with_locked(|raw| raw.as_slice().to_vec())
    }

    pub fn into_vec(self) -> Vec<T> {
        M::into_inner(self.inner).elements
    }
}

impl<T, M: LockMode> HasLength for SliceContainer<T, M> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Element, M: LockMode> Container<T> for SliceContainer<T, M> {
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

impl<T, M: LockMode> Default for SliceContainer<T, M> {
    fn default() -> Self {
        Self::with_settings(SliceSettings::default())
    }
}

impl<T, M: LockMode> From<Vec<T>> for SliceContainer<T, M> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, M: LockMode> FromIterator<T> for SliceContainer<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, M: LockMode> Extend<T> for SliceContainer<T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        M::get_mut(&mut self.inner).elements.extend(iter);
    }
}

impl<T: Debug, M: LockMode> Debug for SliceContainer<T, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.with_locked(|raw| {
            f.debug_struct("SliceContainer")
                .field("elements", &raw.elements)
                .field("capacity", &raw.capacity())
                .field("thread_safe", &M::THREAD_SAFE)
                .finish()
        })
    }
}
