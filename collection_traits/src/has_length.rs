use std::collections::VecDeque;

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

#[duplicate::duplicate_item(
    tCollection;
    [ Vec<T> ];
    [ VecDeque<T> ];
    [ [T] ];
)]
impl<T> HasLength for tCollection {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn len(&self) -> usize {
        T::len(self)
    }

    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}
