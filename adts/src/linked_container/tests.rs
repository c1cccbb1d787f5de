use crate::linked_container::{LinkedContainer, RawChain};
use crate::lock::{LockMode, Locked, Unlocked};
use collection_traits::IndexOutOfBounds;
use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn filled<M: LockMode>(count: i32) -> LinkedContainer<i32, M> {
    (0..count).collect()
}

fn assert_send_sync<T: Send + Sync>() {}
fn assert_send<T: Send>() {}

#[test]
fn locked_container_is_shareable() {
    assert_send_sync::<LinkedContainer<i32, Locked>>();
    assert_send::<LinkedContainer<String, Unlocked>>();
    assert_send_sync::<RawChain<u8>>();
}

#[test]
fn constructors_pick_thread_safety() {
    assert!(!LinkedContainer::<i32>::new().is_thread_safe());
    assert!(LinkedContainer::<i32, Locked>::new_thread_safe().is_thread_safe());
}

fn concrete_scenario<M: LockMode>() {
    let container = LinkedContainer::<i32, M>::default();
    container.add(1);
    container.add(2);
    container.add(3);
    assert_eq!(container.len(), 3);
    assert_eq!(
        (0..3).map(|i| container.get(i)).collect_vec(),
        vec![1, 2, 3]
    );

    assert!(container.remove(&2));
    assert_eq!(container.len(), 2);
    assert_eq!(container.get(1), 3);

    assert_eq!(container.take_first(), Some(1));
    assert_eq!(container.len(), 1);
}

#[test]
fn concrete_scenario_both_modes() {
    concrete_scenario::<Unlocked>();
    concrete_scenario::<Locked>();
}

#[test]
fn clear_releases_everything() {
    let container = filled::<Unlocked>(100);
    assert_eq!(container.len(), 100);
    container.clear();
    assert!(container.is_empty());
    assert_eq!(container.first(), None);
    assert_eq!(container.last(), None);

    container.add(5);
    assert_eq!(container.first(), Some(5));
    assert_eq!(container.last(), Some(5));
}

#[test]
fn remove_relinks_head_middle_and_tail() {
    let container = filled::<Unlocked>(5);

    assert!(container.remove(&0));
    assert_eq!(container.to_vec(), vec![1, 2, 3, 4]);

    assert!(container.remove(&2));
    assert_eq!(container.to_vec(), vec![1, 3, 4]);

    assert!(container.remove(&4));
    assert_eq!(container.to_vec(), vec![1, 3]);
    assert_eq!(container.last(), Some(3));

    // tail must follow the removal so appends land after 3
    container.add(9);
    assert_eq!(container.to_vec(), vec![1, 3, 9]);

    assert!(!container.remove(&42));
    assert_eq!(container.len(), 3);
}

#[test]
fn removing_only_node_resets_tail() {
    let container = LinkedContainer::<i32>::new();
    container.add(1);
    assert!(container.remove(&1));
    assert!(container.is_empty());
    assert_eq!(container.last(), None);

    container.add(2);
    container.add(3);
    assert_eq!(container.to_vec(), vec![2, 3]);
}

#[test]
fn push_front_sets_tail_on_empty_chain() {
    let container = LinkedContainer::<i32>::new();
    container.push_front(2);
    container.push_front(1);
    container.add(3);
    assert_eq!(container.to_vec(), vec![1, 2, 3]);
    assert_eq!(container.last(), Some(3));
}

#[test]
fn take_last_walks_to_predecessor() {
    let container = filled::<Locked>(3);
    assert_eq!(container.take_last(), Some(2));
    assert_eq!(container.last(), Some(1));
    container.add(7);
    assert_eq!(container.to_vec(), vec![0, 1, 7]);
    assert_eq!(container.take_last(), Some(7));
    assert_eq!(container.take_last(), Some(1));
    assert_eq!(container.take_last(), Some(0));
    assert_eq!(container.take_last(), None);
}

#[test]
fn set_and_get() {
    let container = filled::<Unlocked>(4);
    assert_eq!(container.set(3, 30), 3);
    assert_eq!(container.get(3), 30);
    assert_eq!(container.last(), Some(30));
    assert_eq!(
        container.try_set(4, 40),
        Err((IndexOutOfBounds::new(4, 4), 40))
    );
    assert_eq!(container.try_get(4), Err(IndexOutOfBounds::new(4, 4)));
}

/// Mixes writes through the head with appends through the tail pointer.
/// Worth running under Miri: `cargo +nightly miri test -p adts linked_container`.
#[test]
fn tail_survives_writes_from_the_head() {
    let container = LinkedContainer::<i32>::new();
    container.add(1);
    assert_eq!(container.set(0, 5), 1);
    container.add(2);
    assert_eq!(container.last(), Some(2));

    container.push_front(0);
    assert_eq!(container.set(2, 20), 2);
    container.add(3);
    assert_eq!(container.remove_at(3), 3);
    assert_eq!(container.last(), Some(20));
    container.add(4);
    assert_eq!(container.to_vec(), vec![0, 5, 20, 4]);

    let mut raw = RawChain::new();
    raw.push_back('a');
    if let Some(first) = raw.get_mut(0) {
        *first = 'b';
    }
    raw.push_back('c');
    assert_eq!(raw.take_last(), Some('c'));
    raw.push_back('d');
    assert_eq!(raw.iter().copied().collect_vec(), vec!['b', 'd']);
    assert_eq!(raw.last(), Some(&'d'));
}

#[rstest]
#[case(0, 0)]
#[case(3, 3)]
#[case(9, 1)]
fn try_remove_at_rejects_out_of_range(#[case] index: usize, #[case] len: i32) {
    let container = filled::<Unlocked>(len);
    assert_eq!(
        container.try_remove_at(index),
        Err(IndexOutOfBounds::new(index, len as usize))
    );
    assert_eq!(container.len(), len as usize);
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 1 but the index is 1")]
fn get_panics_out_of_range() {
    filled::<Locked>(1).get(1);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn remove_at_panics_out_of_range() {
    filled::<Unlocked>(0).remove_at(0);
}

#[test]
fn long_chain_drops_without_recursion() {
    let mut raw = RawChain::new();
    for i in 0..200_000 {
        raw.push_back(i);
    }
    assert_eq!(raw.len(), 200_000);
    assert_eq!(raw.iter().len(), 200_000);
    drop(raw);
}

#[test]
fn raw_chain_iterates_in_order() {
    let raw: RawChain<_> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(raw.iter().copied().collect_vec(), vec!["a", "b", "c"]);
    assert_eq!((&raw).into_iter().count(), 3);
    assert_eq!(format!("{raw:?}"), r#"["a", "b", "c"]"#);
}

#[test]
fn conversions() {
    let mut container = LinkedContainer::<i32, Locked>::default();
    container.extend([1, 2]);
    container.add(3);
    assert_eq!(
        format!("{container:?}"),
        "LinkedContainer { elements: [1, 2, 3], thread_safe: true }"
    );
    assert_eq!(container.into_vec(), vec![1, 2, 3]);
}

#[rstest]
#[case(99)]
#[case(3)]
#[case(2024)]
fn random_operations_match_vec(#[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let container = LinkedContainer::<i32>::new();
    let mut model: Vec<i32> = vec![];

    for _ in 0..2000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                let x = rng.gen_range(0..30);
                container.add(x);
                model.push(x);
            }
            4 => {
                let x = rng.gen_range(0..30);
                container.push_front(x);
                model.insert(0, x);
            }
            5..=6 => {
                let x = rng.gen_range(0..30);
                let position = model.iter().position(|e| *e == x);
                assert_eq!(container.remove(&x), position.is_some());
                if let Some(idx) = position {
                    model.remove(idx);
                }
            }
            7 => {
                let idx = rng.gen_range(0..model.len().max(1));
                let expected = (idx < model.len()).then(|| model.remove(idx));
                assert_eq!(container.try_remove_at(idx).ok(), expected);
            }
            8 => assert_eq!(container.take_first(), (!model.is_empty()).then(|| model.remove(0))),
            _ => assert_eq!(container.take_last(), model.pop()),
        }

        assert_eq!(container.len(), model.len());
        assert_eq!(container.first(), model.first().copied());
        assert_eq!(container.last(), model.last().copied());
    }

    assert_eq!(container.to_vec(), model);
}

#[test]
fn concurrent_producers_and_consumers() {
    let container = LinkedContainer::<u32, Locked>::new_thread_safe();
    let consumed = std::thread::scope(|s| {
        for t in 0..4u32 {
            let container = &container;
            s.spawn(move || {
                for i in 0..1000 {
                    container.add(t * 10_000 + i);
                }
            });
        }
        let consumers = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let mut seen = vec![];
                    while seen.len() < 1000 {
                        if let Some(item) = container.take_first() {
                            seen.push(item);
                        } else {
                            std::thread::yield_now();
                        }
                    }
                    seen
                })
            })
            .collect_vec();
        consumers
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect_vec()
    });

    assert!(container.is_empty());
    let expected = (0..4u32)
        .flat_map(|t| (0..1000).map(move |i| t * 10_000 + i))
        .sorted()
        .collect_vec();
    assert_eq!(consumed.into_iter().sorted().collect_vec(), expected);
}
