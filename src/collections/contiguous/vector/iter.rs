use std::iter::FusedIterator;
use std::mem::MaybeUninit;
use std::ptr;

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (arr, len) = self.into_raw_parts();
        IntoIter {
            arr,
            head: 0,
            tail: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`Vector`], see [`Vector::into_iter`].
///
/// Elements that haven't been yielded are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        // SAFETY: head..tail is initialized. Moving head past the slot means it is never read
        // again.
        let value = unsafe { self.arr.ptr.add(self.head).read().assume_init() };
        self.head += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;
        // SAFETY: The slot at the old tail - 1 is initialized and is now outside of head..tail.
        Some(unsafe { self.arr.ptr.add(self.tail).read().assume_init() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only head..tail is still initialized and owned by the iterator. The Array then
        // deallocates without touching the values.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(self.head).as_ptr().cast::<T>(),
                self.tail - self.head,
            ));
        }
    }
}
