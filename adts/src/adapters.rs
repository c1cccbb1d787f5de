//! List, queue and stack views over a [`Store`](crate::Store).
//!
//! Each adapter owns exactly one store and forwards to it; the store does
//! all the locking, so an adapter operation is as atomic as the store
//! operation it maps to.

pub mod list;
pub mod queue;
pub mod stack;

/// Generates the store plumbing shared by all adapters: construction from
/// a store, the container methods other than `add`, and the
/// `HasLength`/`Container`/`Default`/`Debug` impls.
///
/// The adapter must define an inherent `add`.
macro_rules! delegate_container {
    ($adapter:ident) => {
        impl<T, S: $crate::store::Store<T>> $adapter<T, S> {
            pub fn from_store(store: S) -> Self {
                Self {
                    store,
                    _item: std::marker::PhantomData,
                }
            }

            pub fn store(&self) -> &S {
                &self.store
            }

            pub fn into_store(self) -> S {
                self.store
            }

            pub fn is_thread_safe(&self) -> bool {
                self.store.is_thread_safe()
            }

            pub fn len(&self) -> usize {
                $crate::HasLength::len(&self.store)
            }

            pub fn is_empty(&self) -> bool {
                $crate::HasLength::is_empty(&self.store)
            }

            pub fn clear(&self) {
                $crate::Container::<T>::clear(&self.store)
            }

            pub fn contains(&self, item: &T) -> bool {
                $crate::Container::contains(&self.store, item)
            }

            /// Removes the first element equal to `item`, wherever it sits.
            pub fn remove(&self, item: &T) -> bool {
                $crate::Container::remove(&self.store, item)
            }

            /// Copies the elements out in store order.
            pub fn to_vec(&self) -> Vec<T>
            where
                T: Clone,
            {
                self.store.to_vec()
            }
        }

        impl<T, S: $crate::store::Store<T>> $crate::HasLength for $adapter<T, S> {
            fn len(&self) -> usize {
                self.len()
            }

            fn is_empty(&self) -> bool {
                self.is_empty()
            }
        }

        impl<T, S: $crate::store::Store<T>> $crate::Container<T> for $adapter<T, S> {
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

        impl<T, S: Default> Default for $adapter<T, S> {
            fn default() -> Self {
                Self {
                    store: S::default(),
                    _item: std::marker::PhantomData,
                }
            }
        }

        impl<T, S: std::fmt::Debug> std::fmt::Debug for $adapter<T, S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($adapter))
                    .field(&self.store)
                    .finish()
            }
        }
    };
}

pub(crate) use delegate_container;
