//! Generic containers: lists, queues and stacks, each over either a
//! growable contiguous buffer ([`SliceContainer`]) or a singly linked
//! chain of nodes ([`LinkedContainer`]).
//!
//! Every store is parameterized by a [`LockMode`]. [`Unlocked`] stores are
//! single-threaded; [`Locked`] stores guard their whole state with one
//! mutex and can be shared between threads. The mode is picked at
//! construction and cannot change afterwards.
//!
//! ```
//! use adts::{Locked, SliceQueue};
//!
//! let queue = SliceQueue::<u32, Locked>::new_thread_safe();
//! std::thread::scope(|s| {
//!     s.spawn(|| queue.enqueue(1));
//!     s.spawn(|| queue.enqueue(2));
//! });
//! assert_eq!(queue.len(), 2);
//! ```

pub use collection_traits::{Container, HasLength, IndexOutOfBounds, List, Queue, Stack};

pub use adapters::list::{BackedList, LinkedList, SliceList};
pub use adapters::queue::{BackedQueue, LinkedQueue, SliceQueue};
pub use adapters::stack::{BackedStack, LinkedStack, SliceStack};
pub use element::{DynElement, Element};
pub use linked_container::{LinkedContainer, RawChain};
pub use lock::{LockMode, Locked, Unlocked};
pub use settings::{SettingsError, SliceSettings};
pub use slice_container::{RawSlice, SliceContainer};
pub use store::Store;

pub mod adapters;
pub mod element;
pub mod linked_container;
pub mod lock;
pub mod settings;
pub mod slice_container;
pub mod store;
