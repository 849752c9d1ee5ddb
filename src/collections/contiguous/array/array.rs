use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

/// A runtime-sized buffer that owns exactly one allocation, similar to a [`Box<[T]>`](Box<T>).
///
/// Array is the backing store for both [`Vector`](super::super::Vector) and the bucket array of
/// [`StrMap`](crate::collections::hash::StrMap). The size of an Array is the number of slots it
/// has allocated, an `Array<MaybeUninit<T>>` can be resized in place with [`Array::realloc`].
///
/// Zero-sized types and zero-sized Arrays never allocate.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);

        Array {
            ptr: Array::<MaybeUninit<T>>::make_ptr(layout),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `size` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stlib::collections::contiguous::Array;
    /// let mut next = 0;
    /// let arr = Array::repeat_with(4, || { next += 2; next });
    /// assert_eq!(&*arr, &[2, 4, 6, 8]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(size: usize, mut f: F) -> Array<T> {
        let mut arr = Self::new_uninit(size);

        for slot in arr.iter_mut() {
            slot.write(f());
        }

        // SAFETY: Every slot has just been written. If f panics, arr is dropped as an Array of
        // MaybeUninit, which deallocates without reading any slot.
        unsafe { arr.assume_init() }
    }

    /// Decomposes the Array into its pointer and size without freeing anything.
    pub(crate) fn into_parts(self) -> (NonNull<T>, usize) {
        let arr = ManuallyDrop::new(self);
        (arr.ptr, arr.size)
    }

    /// Reinterprets self as an `Array<MaybeUninit<T>>`, the counterpart to [`Array::assume_init`].
    /// The values are not dropped.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a [`Layout`] for `size` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).expect("Capacity overflow!")
    }

    /// Allocates memory for the provided [`Layout`], returning a dangling pointer for a zero-sized
    /// layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] rather
    /// than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array by repeating the default value of `T` `size` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(size: usize) -> Array<T> {
        Array::repeat_with(size, T::default)
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assumes that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every slot is initialized. Failing to do so is
    /// undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();

        Array {
            ptr: ptr.cast(),
            size,
            _phantom: PhantomData,
        }
    }

    /// Reallocates the Array to hold `new_size` slots. Slots below both sizes keep their contents,
    /// new slots are uninitialized and slots past `new_size` are released without being dropped.
    ///
    /// The pointer may change, so any raw pointers into the Array are invalidated.
    ///
    /// # Panics
    /// Panics if the new layout would have a size that exceeds [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            // Zero-sized types are never allocated, only the size changes.
            _ if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return,
            (0, _) => Self::make_ptr(Self::make_layout(new_size)),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with this exact layout, which
                // has a non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.size)) }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size);
                let new_layout = Self::make_layout(new_size);

                // SAFETY: The same layout and allocator are used as for the original allocation,
                // and the new size is > 0 and has been checked against isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized, the pointer is properly aligned and nothing can
        // observe them after this point.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator with this layout. Zero-sized
            // layouts are never allocated and are skipped.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The data uses Layout::array(size) so it is valid and properly aligned for size
        // values, all of which are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the &mut self receiver makes the access unique.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: An Array uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys the borrow checker and has no interior mutability.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
