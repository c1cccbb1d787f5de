#![forbid(clippy::unconditional_recursion)]

//! Capability traits shared by every container in the workspace.
//!
//! All mutating methods take `&self`: implementations guard their state
//! with interior mutability, either a single-threaded cell or a mutex,
//! so a container can be shared by reference regardless of which one it
//! uses.

pub mod container;
pub mod error;
pub mod has_length;
pub mod list;
pub mod queue;
pub mod stack;

pub use container::Container;
pub use error::IndexOutOfBounds;
pub use has_length::HasLength;
pub use list::List;
pub use queue::Queue;
pub use stack::Stack;
