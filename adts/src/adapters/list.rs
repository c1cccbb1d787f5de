use crate::adapters::delegate_container;
use crate::element::Element;
use crate::linked_container::LinkedContainer;
use crate::lock::{Locked, Unlocked};
use crate::slice_container::SliceContainer;
use crate::store::Store;
use collection_traits::IndexOutOfBounds;
use duplicate::duplicate_item;
use std::marker::PhantomData;

/// An insertion-ordered list with index access.
pub struct BackedList<T, S> {
    store: S,
    _item: PhantomData<fn() -> T>,
}

/// A list over a growable buffer: O(1) index access.
pub type SliceList<T, M = Unlocked> = BackedList<T, SliceContainer<T, M>>;

/// A singly linked list: O(1) append, O(n) index access.
pub type LinkedList<T, M = Unlocked> = BackedList<T, LinkedContainer<T, M>>;

delegate_container!(BackedList);

#[duplicate_item(
    tStore              tMode           constructor;
    [ SliceContainer ]  [ Unlocked ]    [ new ];
    [ SliceContainer ]  [ Locked ]      [ new_thread_safe ];
    [ LinkedContainer ] [ Unlocked ]    [ new ];
    [ LinkedContainer ] [ Locked ]      [ new_thread_safe ];
)]
impl<T: Element> BackedList<T, tStore<T, tMode>> {
    pub fn constructor() -> Self {
        Self::from_store(tStore::constructor())
    }
}

impl<T, S: Store<T>> BackedList<T, S> {
    /// Appends `item` to the end of the list.
    pub fn add(&self, item: T) -> bool {
        self.store.add(item)
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.store.get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone,
    {
        self.store.try_get(index)
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn set(&self, index: usize, item: T) -> T {
        self.store.set(index, item)
    }

    pub fn try_set(&self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)> {
        self.store.try_set(index, item)
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn remove_at(&self, index: usize) -> T {
        self.store.remove_at(index)
    }

    pub fn try_remove_at(&self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.store.try_remove_at(index)
    }
}

impl<T, S: Store<T>> collection_traits::List<T> for BackedList<T, S> {
    fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        self.get(index)
    }

    fn set(&self, index: usize, item: T) -> T {
        self.set(index, item)
    }

    fn try_get(&self, index: usize) -> Result<T, IndexOutOfBounds>
    where
        T: Clone,
    {
        self.try_get(index)
    }

    fn try_set(&self, index: usize, item: T) -> Result<T, (IndexOutOfBounds, T)> {
        self.try_set(index, item)
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::list::{LinkedList, SliceList};
    use crate::lock::Locked;
    use crate::DynElement;
    use collection_traits::{IndexOutOfBounds, List};
    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn all_lists() -> Vec<Box<dyn List<i32>>> {
        vec![
            Box::new(SliceList::<i32>::new()),
            Box::new(SliceList::<i32, Locked>::new_thread_safe()),
            Box::new(LinkedList::<i32>::new()),
            Box::new(LinkedList::<i32, Locked>::new_thread_safe()),
        ]
    }

    fn contents(list: &dyn List<i32>) -> Vec<i32> {
        (0..list.len()).map(|i| list.get(i)).collect_vec()
    }

    #[test]
    fn concrete_scenario() {
        for list in all_lists() {
            list.add(1);
            list.add(2);
            list.add(3);
            assert_eq!(list.len(), 3);
            assert_eq!(contents(&*list), vec![1, 2, 3]);

            assert!(list.remove(&2));
            assert_eq!(list.len(), 2);
            assert_eq!(list.get(1), 3);
        }
    }

    #[test]
    fn set_returns_old_value() {
        for list in all_lists() {
            list.add(1);
            list.add(2);
            assert_eq!(list.set(0, 10), 1);
            assert_eq!(contents(&*list), vec![10, 2]);
            assert_eq!(list.try_set(2, 5), Err((IndexOutOfBounds::new(2, 2), 5)));
            assert_eq!(list.try_get(2), Err(IndexOutOfBounds::new(2, 2)));
        }
    }

    #[rstest]
    #[case(99)]
    #[case(17)]
    fn order_preserved_across_removals(#[case] seed: u64) {
        for list in all_lists() {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut model = vec![];
            for _ in 0..500 {
                if rng.gen_bool(0.6) {
                    let x = rng.gen_range(0..40);
                    list.add(x);
                    model.push(x);
                } else {
                    let x = rng.gen_range(0..40);
                    let found = model.iter().position(|e| *e == x);
                    assert_eq!(list.remove(&x), found.is_some());
                    if let Some(idx) = found {
                        model.remove(idx);
                    }
                }
                assert_eq!(list.len(), model.len());
            }
            assert_eq!(contents(&*list), model);
        }
    }

    #[test]
    fn remove_at_on_both_backings() {
        let slice = SliceList::<char>::new();
        let linked = LinkedList::<char>::new();
        for c in "abcd".chars() {
            slice.add(c);
            linked.add(c);
        }
        assert_eq!(slice.remove_at(2), 'c');
        assert_eq!(linked.remove_at(2), 'c');
        assert_eq!(slice.to_vec(), linked.to_vec());
        assert_eq!(slice.try_remove_at(3), Err(IndexOutOfBounds::new(3, 3)));
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 0 but the index is 0")]
    fn get_on_empty_list_panics() {
        SliceList::<i32>::new().get(0);
    }

    #[test]
    fn heterogeneous_values_through_dyn_element() {
        let list = LinkedList::<Box<dyn DynElement>>::new();
        list.add(Box::new(1i32));
        list.add(Box::new("one"));
        list.add(Box::new(1.0f64));

        let needle: Box<dyn DynElement> = Box::new("one");
        assert!(list.contains(&needle));
        assert!(list.remove(&needle));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).downcast_ref::<f64>(), Some(&1.0));
        assert!(!list.contains(&(Box::new(1i64) as Box<dyn DynElement>)));
    }

    #[test]
    fn debug_shows_store() {
        let list = SliceList::<i32>::new();
        list.add(4);
        let debug = format!("{list:?}");
        assert!(debug.starts_with("BackedList(SliceContainer { elements: [4]"), "{debug}");
    }
}
