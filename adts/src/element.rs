use downcast_rs::{impl_downcast, DowncastSync};
use dyn_clone::DynClone;
use std::fmt::Debug;

/// Values that can be stored in a container.
///
/// Containers only ever compare elements for equality, so this is nothing
/// more than [`PartialEq`]. Whether equality means "same value" or "same
/// identity" is up to the element type.
pub trait Element: PartialEq {}

impl<T: PartialEq + ?Sized> Element for T {}

/// Object-safe element for containers that hold values of several
/// concrete types at once, stored as `Box<dyn DynElement>`.
///
/// Two elements of different concrete types are never equal.
///
/// ```
/// use adts::{DynElement, SliceStack};
///
/// let stack = SliceStack::<Box<dyn DynElement>>::new();
/// stack.push(Box::new(1u8));
/// stack.push(Box::new("one"));
///
/// assert!(stack.contains(&(Box::new(1u8) as Box<dyn DynElement>)));
/// assert!(!stack.contains(&(Box::new(1u16) as Box<dyn DynElement>)));
/// ```
pub trait DynElement: DowncastSync + DynClone + Debug {
    fn dyn_eq(&self, other: &dyn DynElement) -> bool;
}

impl_downcast!(sync DynElement);
dyn_clone::clone_trait_object!(DynElement);

impl<T: PartialEq + Clone + Debug + Send + Sync + 'static> DynElement for T {
    fn dyn_eq(&self, other: &dyn DynElement) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

impl PartialEq for dyn DynElement {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}
