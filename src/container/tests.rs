#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut vec = StaticVector::<u8, 3>::new();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 3);

    vec.push(1);
    vec.push(2);
    assert_eq!(vec.try_push(3), Ok(()));
    assert!(vec.is_full());
    assert_eq!(
        vec.try_push(4),
        Err(CapacityOverflow { cap: 3 }),
        "Pushing onto a full StaticVector should fail."
    );
    assert_eq!(&*vec, &[1, 2, 3]);

    assert_panics!({
        let mut vec = StaticVector::<u8, 1>::new();
        vec.push(1);
        vec.push(2);
    });

    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.pop(), None);
}

#[test]
fn test_insert_and_remove() {
    let mut vec: StaticVector<_, 6> = (0..3).collect();
    vec.insert(1, 100);
    vec.insert(1, 200);
    vec.insert(5, 300);
    assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);

    assert_eq!(
        vec.try_insert(0, 400),
        Err(CapacityOverflow { cap: 6 }.into()),
        "Inserting into a full StaticVector should fail."
    );

    assert_eq!(vec.remove(1), 200);
    assert_eq!(vec.remove(4), 300);
    assert_eq!(&*vec, &[0, 100, 1, 2]);

    assert_eq!(
        vec.try_insert(5, 0),
        Err(IndexOutOfBounds { index: 5, len: 4 }.into())
    );
    assert_panics!({
        let mut vec: StaticVector<u8, 2> = StaticVector::new();
        vec.remove(0);
    });

    assert_eq!(vec.replace(0, 42), 0);
    assert_eq!(vec.at(0), Ok(&42));
    assert_eq!(vec.at(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    *vec.at_mut(3).expect("index 3 is in bounds") = 7;
    assert_eq!(vec.last(), Some(&7));
}

#[test]
fn test_from_iter() {
    let vec = StaticVector::<_, 4>::try_from_iter("abcd".chars());
    assert_eq!(vec.as_deref(), Ok(&['a', 'b', 'c', 'd'][..]));

    assert_eq!(
        StaticVector::<_, 3>::try_from_iter(0..4),
        Err(CapacityOverflow { cap: 3 })
    );
    assert_panics!({
        let _: StaticVector<_, 3> = (0..4).collect();
    });

    let mut vec = StaticVector::<_, 5>::repeat("x", 2);
    vec.extend(["y", "z"]);
    assert_eq!(&*vec, &["x", "x", "y", "z"]);
}

#[test]
fn test_zst_support() {
    let mut vec = StaticVector::<ZeroSizedType, 5>::repeat(ZeroSizedType, 5);
    assert_eq!(vec[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(vec[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(vec.iter().len(), 5, "Should iterate over the right number of ZST instances.");
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 4);
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut vec = StaticVector::<_, 8>::repeat(counter.clone(), 5);
    assert_eq!(counter.get(), 0);

    drop(vec.pop());
    assert_eq!(counter.get(), 1, "A popped value should be dropped by its new owner.");

    drop(vec.remove(0));
    assert_eq!(counter.get(), 2);

    drop(vec.replace(0, counter.clone()));
    assert_eq!(counter.get(), 3, "The replaced value should be returned, then dropped.");

    vec.clear();
    assert_eq!(counter.get(), 6, "Clearing should drop every value.");
    assert!(vec.is_empty());

    vec.extend([counter.clone(), counter.clone(), counter.clone()]);
    drop(vec);
    assert_eq!(counter.get(), 9, "Dropping the StaticVector should drop every value.");

    let vec = StaticVector::<_, 4>::repeat(counter.clone(), 4);
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.get(), 11);
    drop(iter);
    assert_eq!(
        counter.get(),
        13,
        "Values left in an IntoIter should be dropped with it."
    );
}

#[test]
fn test_equality_and_hash() {
    let state = RandomState::new();
    let a: StaticVector<_, 4> = [1, 2, 3].into_iter().collect();
    let b = a.clone();
    let mut c = a.clone();
    c.push(4);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal values should hash the same.");
    assert_eq!(state.hash_one(&a), state.hash_one([1, 2, 3].as_slice()));
    assert_eq!(
        format!("{a:?}"),
        "StaticVector { contents: [1, 2, 3], len: 3, cap: 4 }"
    );
    assert_eq!((&a).into_iter().sum::<i32>(), 6);
}
