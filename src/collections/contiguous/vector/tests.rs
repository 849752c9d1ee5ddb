#![cfg(test)]

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_append_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0_u32);
    assert_eq!(vec.cap(), DEFAULT_CAP, "The first append should allocate the default capacity.");

    for i in 1..DEFAULT_CAP as u32 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), DEFAULT_CAP, "Filling to capacity shouldn't reallocate.");

    vec.push(100);
    assert_eq!(vec.cap(), 150, "Capacity should grow by half.");
    assert_eq!(vec.len(), 101);
    assert!(vec.iter().copied().eq(0..=100));

    let mut vec = Vector::with_cap(4);
    vec.extend([1_u8, 2, 3, 4]);
    vec.add_n(10);
    assert_eq!(
        vec.cap(), 14,
        "Capacity should grow to the required size when half isn't enough."
    );
}

#[test]
fn test_large_first_append() {
    let mut vec = Vector::<u8>::new();
    vec.add_n(120);
    assert_eq!(
        vec.cap(), 150,
        "An unallocated Vector should take the default capacity and then grow by half."
    );
    assert_eq!(vec.len(), 120);

    let mut vec = Vector::<u8>::new();
    vec.add_n(200);
    assert_eq!(vec.cap(), 200, "Growing by half from the default isn't enough here.");

    let mut vec = Vector::<u8>::new();
    vec.add_n(DEFAULT_CAP);
    assert_eq!(vec.cap(), DEFAULT_CAP, "An append that fits the default shouldn't grow further.");
}

#[test]
fn test_with_cap() {
    assert_eq!(Vector::<u8>::with_cap(5).cap(), 5);
    assert_eq!(Vector::<u8>::with_cap(0).cap(), DEFAULT_CAP);
    assert!(Vector::<u8>::with_cap(5).is_empty());
}

#[test]
fn test_add_n() {
    let mut vec = Vector::from_iter([9_i32]);
    let added = vec.add_n(3);
    assert_eq!(added, &[0, 0, 0], "Added slots should hold default values.");
    added.copy_from_slice(&[1, 2, 3]);
    assert_eq!(&*vec, &[9, 1, 2, 3]);

    let mut next = 10;
    vec.add_n_with(2, || { next += 1; next });
    assert_eq!(&*vec, &[9, 1, 2, 3, 11, 12]);

    assert!(vec.add_n(0).is_empty());
    assert_eq!(vec.len(), 6);
}

#[test]
fn test_push_delete_insert_pop() {
    let mut vec = Vector::new();
    for i in 0..20 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 20);

    vec.delete_n(0, 5).unwrap();
    assert_eq!(vec.len(), 15);
    assert!(vec.iter().copied().eq(5..20));

    vec.insert(1, 1987).unwrap();
    assert_eq!(&vec[..4], &[5, 1987, 6, 7]);
    assert_eq!(vec.len(), 16);

    vec.insert_n(7, 3).unwrap().copy_from_slice(&[1, 2, 3]);
    assert_eq!(
        &*vec,
        &[5, 1987, 6, 7, 8, 9, 10, 1, 2, 3, 11, 12, 13, 14, 15, 16, 17, 18, 19]
    );

    assert_eq!(vec.pop(), Some(19));
    assert_eq!(vec.len(), 18);
}

#[test]
fn test_delete_bounds() {
    let mut vec = Vector::from_iter(0..5);

    assert_eq!(
        vec.delete_n(5, 0),
        Err(RangeError::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 5 })),
        "Deleting at len should fail even for an empty range."
    );
    assert_eq!(
        vec.delete_n(3, 3),
        Err(RangeError::RangeOutOfBounds(RangeOutOfBounds { index: 3, count: 3, len: 5 }))
    );
    assert_eq!(vec.delete(7), Err(IndexOutOfBounds { index: 7, len: 5 }));
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Failed deletions shouldn't change the Vector.");

    assert_eq!(vec.delete(1), Ok(1));
    vec.delete_n(3, 1).unwrap();
    vec.delete_n(0, 0).unwrap();
    assert_eq!(&*vec, &[0, 2, 3]);

    assert_eq!(
        vec.delete_n(2, 2).unwrap_err().to_string(),
        "Range of 2 elements at index 2 out of bounds for collection with 3 elements!"
    );
}

#[test]
fn test_insert_bounds() {
    let mut vec = Vector::from_iter(0..3);
    assert_eq!(vec.insert(4, 10), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert!(vec.insert_n(5, 2).is_err());
    assert_eq!(&*vec, &[0, 1, 2]);

    vec.insert(3, 3).unwrap();
    assert_eq!(&*vec, &[0, 1, 2, 3], "Inserting at len should append.");

    assert_eq!(
        vec.insert(9, 0).unwrap_err().to_string(),
        "Index 9 out of bounds for collection with 4 elements!"
    );
}

#[test]
fn test_insert_into_unallocated() {
    let mut vec = Vector::<u8>::new();
    assert_eq!(vec.insert_n(0, 3).unwrap(), &[0, 0, 0]);
    assert_eq!(vec.cap(), 3, "Inserting into an unallocated Vector should fit exactly.");
    assert_eq!(vec.len(), 3);

    let mut vec = Vector::<u8>::new();
    assert_eq!(vec.insert_n(1, 1), Err(IndexOutOfBounds { index: 1, len: 0 }));
    assert_eq!(vec.cap(), 0);
}

#[test]
fn test_insert_growth() {
    let mut vec = Vector::with_cap(2);
    vec.extend([1, 2]);
    vec.insert(0, 0).unwrap();
    assert_eq!(vec.cap(), 3, "Insertion should grow to fit exactly.");
    assert_eq!(&*vec, &[0, 1, 2]);
}

#[test]
fn test_insert_then_delete_restores() {
    let original = Vector::from_iter(0..8);

    for index in 0..=original.len() {
        let mut vec = original.duplicate();
        vec.insert_n_with(index, 4, || -1).unwrap();
        assert_eq!(vec.len(), 12);
        vec.delete_n(index, 4).unwrap();
        assert_eq!(vec, original, "Deleting the inserted range should restore the Vector.");
    }
}

#[test]
fn test_pop_empty() {
    let mut vec = Vector::<u8>::new();
    assert_eq!(vec.pop(), None);

    vec.push(1);
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.len(), 0);
}

#[test]
fn test_trim() {
    let mut vec = Vector::with_cap(10);
    vec.extend([1_u16, 2, 3]);
    vec.trim();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3], "Trimming shouldn't change the contents.");

    vec.push(4);
    assert_eq!(vec.cap(), 4);

    vec.delete_n(0, 4).unwrap();
    vec.trim();
    assert_eq!(vec.cap(), 0, "Trimming an empty Vector should release its allocation.");
}

#[test]
fn test_duplicate() {
    let mut vec = Vector::with_cap(12);
    vec.extend(["a".to_owned(), "b".to_owned()]);

    let mut copy = vec.duplicate();
    assert_eq!(copy, vec);
    assert_eq!(copy.cap(), 12, "The copy should keep the original capacity.");

    vec[0].push('!');
    copy[1] = "c".to_owned();
    assert_eq!(&*vec, &["a!", "b"], "Mutating the copy shouldn't affect the original.");
    assert_eq!(&*copy, &["a", "c"], "Mutating the original shouldn't affect the copy.");

    let empty = Vector::<u8>::new().duplicate();
    assert_eq!(empty.cap(), 0);
}

#[test]
fn test_index_out_of_bounds_panics() {
    assert_panics!({
        let vec = Vector::from_iter(0..3);
        vec[3]
    });
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut vec = Vector::new();
    vec.add_n_with(10, || counter.token());

    vec.delete_n(2, 3).unwrap();
    assert_eq!(counter.dropped(), 3, "Deleted elements should be dropped.");

    drop(vec.delete(0));
    drop(vec.pop());
    assert_eq!(counter.dropped(), 5);

    drop(vec);
    assert_eq!(counter.dropped(), 10, "All remaining elements should be dropped.");
}

#[test]
fn test_into_iter() {
    let vec = Vector::from_iter(0..5);
    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = DropCounter::new();
    let mut vec = Vector::new();
    vec.add_n_with(6, || counter.token());

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.dropped(),
        6,
        "Dropping a partially consumed iterator should drop the rest."
    );
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..150 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 150);
    assert_eq!(vec.pop(), Some(ZeroSizedType));

    vec.delete_n(10, 20).unwrap();
    vec.insert(0, ZeroSizedType).unwrap();
    assert_eq!(vec.len(), 130);
    assert_eq!(vec.into_iter().count(), 130);
}

#[test]
fn test_formatting() {
    let vec = Vector::from_iter([1, 2]);
    assert_eq!(vec.to_string(), "![1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
}
