use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{IndexOutOfBounds, RangeError, RangeOutOfBounds};

/// The capacity used when an unallocated Vector first needs storage, or when a capacity of 0 is
/// requested from [`Vector::with_cap`].
pub const DEFAULT_CAP: usize = 100;

/// Appends grow the capacity by `cap / GROWTH_DIVISOR`, for a growth factor of 1.5.
const GROWTH_DIVISOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// A new Vector doesn't allocate until the first element is added, at which point it allocates
/// [`DEFAULT_CAP`] slots. When an append doesn't fit, the capacity grows by half (or straight to
/// the required size if half isn't enough). Inserting into the middle grows to fit exactly.
///
/// Reallocation may move the elements, so no references into a Vector survive a call that can
/// grow it. The borrow checker enforces this.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items added or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `add_n` | `O(m)`*, `O(n+m)` |
/// | `pop` | `O(1)` |
/// | `insert_n` | `O(n-i+m)` |
/// | `delete_n` | `O(n-i)` |
/// | `trim` | `O(n)` |
/// | `duplicate` | `O(n)` |
///
/// \* Amortized. If the Vector doesn't have enough capacity, the reallocation takes `O(n)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory is allocated on the first append.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new, empty Vector with capacity for `cap` elements. A `cap` of 0 is replaced by
    /// [`DEFAULT_CAP`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::{Vector, DEFAULT_CAP};
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// assert_eq!(Vector::<u8>::with_cap(0).cap(), DEFAULT_CAP);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_exact_cap(if cap == 0 { DEFAULT_CAP } else { cap })
    }

    /// Returns the number of elements in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the Vector can hold without reallocating.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Pushes the provided value onto the end of the Vector, growing if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.reserve_for_append(1);

        // SAFETY: The capacity has just been adjusted to fit one more element.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Appends `count` elements produced by `f`, growing if required, and returns the newly added
    /// elements as a slice.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter([1, 2]);
    /// let added = vec.add_n_with(3, || 7);
    /// added[1] = 8;
    /// assert_eq!(&*vec, &[1, 2, 7, 8, 7]);
    /// ```
    pub fn add_n_with<F: FnMut() -> T>(&mut self, count: usize, mut f: F) -> &mut [T] {
        self.reserve_for_append(count);

        let start = self.len;
        for i in start..start + count {
            // SAFETY: The capacity fits start + count elements. len is bumped after each write so
            // a panic in f leaves the Vector valid.
            unsafe { self.arr.ptr.add(i).write(MaybeUninit::new(f())); }
            self.len += 1;
        }

        &mut self[start..]
    }

    /// Appends `count` default values and returns them as a slice, ready to be overwritten.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn add_n(&mut self, count: usize) -> &mut [T]
    where
        T: Default,
    {
        self.add_n_with(count, T::default)
    }

    /// Pops the last value off the end of the Vector, or returns None if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter(0..3);
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.len(), 2);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The element at the old last position is initialized and is now outside of len,
        // so it is read out exactly once.
        Some(unsafe { self.arr.ptr.add(self.len).read().assume_init() })
    }

    /// Inserts the provided value at `index`, shifting all following elements right.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, without changing the Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter(0..3);
    /// vec.insert(1, 100).unwrap();
    /// vec.insert(4, 200).unwrap();
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// assert!(vec.insert(9, 300).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        self.check_insert_index(index)?;

        let tail = self.open_gap(index, 1);
        // SAFETY: open_gap has made index an unused slot within the capacity.
        unsafe { self.arr.ptr.add(index).write(MaybeUninit::new(value)); }
        self.len = index + 1 + tail;

        Ok(())
    }

    /// Opens a gap of `count` elements at `index`, shifting all following elements right, and
    /// fills it with values produced by `f`. Returns the inserted elements as a slice.
    ///
    /// An unallocated Vector is given exactly `count` slots when inserting at index 0.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, without changing the Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn insert_n_with<F: FnMut() -> T>(
        &mut self,
        index: usize,
        count: usize,
        mut f: F,
    ) -> Result<&mut [T], IndexOutOfBounds> {
        self.check_insert_index(index)?;

        let tail = self.open_gap(index, count);
        for i in index..index + count {
            // SAFETY: open_gap has made index..index + count unused slots within the capacity.
            // While filling, len excludes the gap and the tail, so a panic in f only leaks them.
            unsafe { self.arr.ptr.add(i).write(MaybeUninit::new(f())); }
        }
        self.len = index + count + tail;

        Ok(&mut self[index..index + count])
    }

    /// Opens a gap of `count` default values at `index` and returns it, ready to be overwritten.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, without changing the Vector.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter([1, 5]);
    /// vec.insert_n(1, 3).unwrap().copy_from_slice(&[2, 3, 4]);
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize) -> Result<&mut [T], IndexOutOfBounds>
    where
        T: Default,
    {
        self.insert_n_with(index, count, T::default)
    }

    /// Removes the element at `index`, shifting all following elements left, and returns it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, without changing the Vector.
    pub fn delete(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        let base = self.arr.ptr.as_ptr().cast::<T>();
        // SAFETY: index < len, so the read is of an initialized element and the copied tail is
        // within the initialized range. The read value is forgotten by the buffer by shrinking len.
        let value = unsafe {
            let value = base.add(index).read();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Removes and drops `count` elements starting at `index`, shifting all following elements left
    /// to close the gap.
    ///
    /// # Errors
    /// Returns [`RangeError::IndexOutOfBounds`] if `index >= len` and
    /// [`RangeError::RangeOutOfBounds`] if `index + count > len`. In both cases the Vector is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter(0..10);
    /// vec.delete_n(2, 5).unwrap();
    /// assert_eq!(&*vec, &[0, 1, 7, 8, 9]);
    /// assert!(vec.delete_n(3, 5).unwrap_err().is_range_out_of_bounds());
    /// ```
    pub fn delete_n(&mut self, index: usize, count: usize) -> Result<(), RangeError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }
        if count > self.len - index {
            return Err(RangeOutOfBounds { index, count, len: self.len }.into());
        }

        let tail = self.len - index - count;
        // Shrink len first so a panicking drop only leaks the tail.
        self.len = index;

        let base = self.arr.ptr.as_ptr().cast::<T>();
        // SAFETY: index..index + count is initialized and dropped exactly once, then the tail is
        // moved down over it. Both ranges are within the capacity.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(index), count));
            ptr::copy(base.add(index + count), base.add(index), tail);
        }
        self.len = index + tail;

        Ok(())
    }

    /// Shrinks the capacity of the Vector to exactly its length, releasing the spare slots.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(10);
    /// vec.push(1_u8);
    /// vec.trim();
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn trim(&mut self) {
        self.arr.realloc(self.len);
    }

    /// Ensures that the Vector can hold another `extra` elements without reallocating. Unlike
    /// appends, this grows to fit exactly.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).expect("Capacity overflow!");

        if required > self.cap() {
            self.arr.realloc(required);
        }
    }

    /// Creates an independent copy of the Vector, with the same elements and the same capacity.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Vector;
    /// let vec = Vector::from_iter(0..4);
    /// let mut copy = vec.duplicate();
    /// copy[0] = 10;
    /// assert_eq!(&*vec, &[0, 1, 2, 3]);
    /// assert_eq!(copy.cap(), vec.cap());
    /// ```
    pub fn duplicate(&self) -> Vector<T>
    where
        T: Clone,
    {
        let mut copy = Vector::with_exact_cap(self.cap());

        for value in self.iter() {
            // SAFETY: copy has the same capacity as self, which holds at least len elements.
            unsafe { copy.arr.ptr.add(copy.len).write(MaybeUninit::new(value.clone())); }
            copy.len += 1;
        }

        copy
    }

    /// Creates an empty Vector with capacity for exactly `cap` elements.
    pub(crate) fn with_exact_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Decomposes the Vector into its buffer and length without dropping any elements.
    pub(crate) fn into_raw_parts(self) -> (Array<MaybeUninit<T>>, usize) {
        let vec = ManuallyDrop::new(self);
        // SAFETY: vec is never dropped, so arr is moved out exactly once.
        (unsafe { ptr::read(&vec.arr) }, vec.len)
    }

    /// Grows the Vector so that another `count` elements can be appended. An unallocated Vector
    /// is first given [`DEFAULT_CAP`] slots. If that still doesn't fit, the capacity grows by half,
    /// or to exactly the required size if half isn't enough.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn reserve_for_append(&mut self, count: usize) {
        let required = self.len.checked_add(count).expect("Capacity overflow!");
        if required <= self.cap() {
            return;
        }

        let cap = match self.cap() {
            0 => DEFAULT_CAP,
            cap => cap,
        };

        let new_cap = if cap >= required {
            cap
        } else {
            cmp::max(cap.saturating_add(cap / GROWTH_DIVISOR), required)
        };

        self.arr.realloc(new_cap);
    }

    /// Makes room for `count` elements at `index` by moving the tail right, growing to fit exactly
    /// if needed. Returns the length of the moved tail. len is set to `index`, so the caller must
    /// fill the gap and then restore len to `index + count + tail`.
    fn open_gap(&mut self, index: usize, count: usize) -> usize {
        self.reserve(count);

        let tail = self.len - index;
        let base = self.arr.ptr.as_ptr().cast::<T>();
        // SAFETY: The capacity fits len + count elements, so both the source and destination of
        // the tail are in bounds. ptr::copy handles the overlap.
        unsafe { ptr::copy(base.add(index), base.add(index + count), tail); }
        self.len = index;

        tail
    }

    fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Vector::new();
        vec.reserve(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and are dropped exactly once. The
        // Array itself only holds MaybeUninit values, so it just deallocates.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                self.len,
            ));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values are initialized, properly aligned and within the allocation.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the &mut self receiver makes the access unique.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
