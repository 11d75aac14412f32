//! Element ownership: every element placed in an array is dropped exactly
//! once, whatever path it leaves by.

use dynarr_array::{ArrayConfig, ArrayError, DynamicArray};
use dynarr_test_utils::{Ledger, Tracked};

fn tracked_array(ledger: &Ledger, n: u32) -> DynamicArray<Tracked<u32>> {
    let mut arr = DynamicArray::new();
    for i in 0..n {
        arr.push_back(ledger.track(i)).unwrap();
    }
    arr
}

fn values(arr: &DynamicArray<Tracked<u32>>) -> Vec<u32> {
    arr.iter().map(|t| t.value).collect()
}

#[test]
fn growth_moves_without_dropping() {
    let ledger = Ledger::new();
    let arr = tracked_array(&ledger, 100);
    assert!(arr.stats().reallocations > 0);
    assert_eq!(ledger.dropped(), 0);
    assert_eq!(ledger.live(), 100);

    drop(arr);
    assert_eq!(ledger.dropped(), 100);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn shifting_insertions_do_not_drop() {
    let ledger = Ledger::new();
    let mut arr = tracked_array(&ledger, 5);
    arr.push_front(ledger.track(100)).unwrap();
    arr.insert(3, ledger.track(200)).unwrap();
    arr.insert(arr.len(), ledger.track(300)).unwrap();

    assert_eq!(values(&arr), [100, 0, 1, 200, 2, 3, 4, 300]);
    assert_eq!(ledger.dropped(), 0);
    drop(arr);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn removed_elements_belong_to_the_caller() {
    let ledger = Ledger::new();
    let mut arr = tracked_array(&ledger, 5);

    let middle = arr.remove(2).unwrap();
    let last = arr.pop_back().unwrap();
    assert_eq!((middle.value, last.value), (2, 4));
    assert_eq!(values(&arr), [0, 1, 3]);
    assert_eq!(ledger.dropped(), 0);

    drop(middle);
    drop(last);
    assert_eq!(ledger.dropped(), 2);
    drop(arr);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn clear_drops_elements_and_keeps_capacity() {
    let ledger = Ledger::new();
    let mut arr = tracked_array(&ledger, 6);
    let capacity = arr.capacity();

    arr.clear();
    assert_eq!(ledger.dropped(), 6);
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), capacity);

    arr.push_back(ledger.track(9)).unwrap();
    drop(arr);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn clone_is_deep() {
    let ledger = Ledger::new();
    let arr = tracked_array(&ledger, 4);
    let copy = arr.clone();

    assert_eq!(ledger.cloned(), 4);
    assert_eq!(copy, arr);
    assert_eq!(copy.capacity(), 4);

    drop(arr);
    assert_eq!(ledger.dropped(), 4);
    assert_eq!(values(&copy), [0, 1, 2, 3]);
    drop(copy);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn assign_from_releases_previous_contents() {
    let ledger = Ledger::new();
    let mut target = tracked_array(&ledger, 3);
    let source = tracked_array(&ledger, 2);

    target.assign_from(&source).unwrap();
    assert_eq!(ledger.dropped(), 3);
    assert_eq!(ledger.cloned(), 2);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 2);

    drop(source);
    drop(target);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn clone_from_replaces_contents() {
    let ledger = Ledger::new();
    let mut arr = tracked_array(&ledger, 3);
    let snapshot = arr.clone();

    arr.clone_from(&snapshot);
    assert_eq!(values(&arr), [0, 1, 2]);
    drop(arr);
    drop(snapshot);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn clone_from_longer_than_target_ceiling() {
    let ledger = Ledger::new();
    let config = ArrayConfig::new(1).with_max_capacity(2);
    let mut target = DynamicArray::with_config(config).unwrap();
    target.push_back(ledger.track(99u32)).unwrap();
    let source = tracked_array(&ledger, 5);

    target.clone_from(&source);
    assert_eq!(values(&target), [0, 1, 2, 3, 4]);
    assert_eq!(target.max_capacity(), source.max_capacity());
    assert_eq!(ledger.cloned(), 5);
    assert_eq!(ledger.dropped(), 1);

    drop(source);
    drop(target);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn partially_consumed_into_iter_drops_the_rest() {
    let ledger = Ledger::new();
    let arr = tracked_array(&ledger, 5);

    let mut iter = arr.into_iter();
    let first = iter.next().unwrap();
    let last = iter.next_back().unwrap();
    assert_eq!((first.value, last.value), (0, 4));
    assert_eq!(iter.len(), 3);
    assert_eq!(ledger.dropped(), 0);

    drop(iter);
    assert_eq!(ledger.dropped(), 3);
    drop(first);
    drop(last);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn rejected_value_is_dropped_and_array_unchanged() {
    let ledger = Ledger::new();
    let config = ArrayConfig::new(1).with_max_capacity(1);
    let mut arr = DynamicArray::with_config(config).unwrap();
    arr.push_back(ledger.track(1u32)).unwrap();

    let err = arr.push_back(ledger.track(2)).unwrap_err();
    assert_eq!(err, ArrayError::CapacityLimit { requested: 2, limit: 1 });
    assert_eq!(ledger.dropped(), 1);
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0].value, 1);

    let err = arr.insert(5, ledger.track(3)).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 5, len: 1 });
    assert_eq!(ledger.dropped(), 2);

    drop(arr);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn collected_array_owns_every_element() {
    let ledger = Ledger::new();
    let arr: DynamicArray<Tracked<u32>> = (0..10).map(|i| ledger.track(i)).collect();
    assert_eq!(arr.len(), 10);
    assert_eq!(ledger.live(), 10);
    drop(arr);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn zero_sized_elements_are_counted() {
    let mut arr = DynamicArray::new();
    for _ in 0..1000 {
        arr.push_back(()).unwrap();
    }
    arr.push_front(()).unwrap();
    assert_eq!(arr.len(), 1001);
    assert_eq!(arr.pop_back(), Some(()));
    assert_eq!(arr.into_iter().count(), 1000);
}
