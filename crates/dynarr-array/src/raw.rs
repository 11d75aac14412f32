//! Owned, uninitialized element storage.
//!
//! [`RawBuffer`] owns one allocation of `capacity` slots of `T` and frees
//! it on drop. It never tracks which slots are initialized and never drops
//! elements; the owner (a `DynamicArray` or an `IntoIter`) does that and
//! upholds the preconditions of the `unsafe fn`s below.
//!
//! Zero-capacity buffers and buffers of zero-sized `T` hold a dangling
//! pointer and release nothing.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use dynarr_core::ArrayError;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its allocation; sending it sends the
// elements it may hold.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// An empty buffer that owns no allocation.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Largest slot count a `Layout` can describe for `T`.
    pub(crate) fn max_slots() -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    fn layout(capacity: usize) -> Result<Layout, ArrayError> {
        Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow {
            requested: capacity,
        })
    }

    /// Allocate `capacity` uninitialized slots.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Ok(Self::dangling());
        }
        let layout = Self::layout(capacity)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocationFailed {
            requested: capacity,
        })?;
        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write `value` into slot `index` without reading or dropping what
    /// was there.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must not hold a live element.
    #[inline]
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);
        // SAFETY: caller guarantees the slot is in bounds and vacant.
        unsafe { self.ptr.as_ptr().add(index).write(value) }
    }

    /// Move the element out of slot `index`, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Slot `index` must hold a live element, which the caller must treat
    /// as moved-out afterwards.
    #[inline]
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.capacity);
        // SAFETY: caller guarantees the slot is initialized.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    /// Move slots `[index, len)` one position right, vacating `index`.
    ///
    /// # Safety
    ///
    /// `index <= len < capacity` and `[0, len)` must be live.
    #[inline]
    pub(crate) unsafe fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity);
        // SAFETY: source and destination lie within the allocation;
        // `ptr::copy` handles the overlap.
        unsafe {
            let base = self.ptr.as_ptr().add(index);
            ptr::copy(base, base.add(1), len - index);
        }
    }

    /// Move slots `[index + 1, len)` one position left, overwriting the
    /// vacated slot `index`.
    ///
    /// # Safety
    ///
    /// `index < len <= capacity`, slot `index` must already have been moved
    /// out, and `[index + 1, len)` must be live.
    #[inline]
    pub(crate) unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity);
        // SAFETY: source and destination lie within the allocation;
        // `ptr::copy` handles the overlap.
        unsafe {
            let base = self.ptr.as_ptr().add(index);
            ptr::copy(base.add(1), base, len - index - 1);
        }
    }

    /// Bitwise-move the live prefix `[0, len)` into `dst`.
    ///
    /// Afterwards the slots in `self` are logically vacant; dropping `self`
    /// only releases the allocation.
    ///
    /// # Safety
    ///
    /// `[0, len)` must be live in `self`, and `len <= dst.capacity` with
    /// `[0, len)` vacant in `dst`.
    #[inline]
    pub(crate) unsafe fn relocate_into(&self, dst: &mut RawBuffer<T>, len: usize) {
        debug_assert!(len <= self.capacity && len <= dst.capacity);
        // SAFETY: distinct allocations never overlap; bounds per caller.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), dst.ptr.as_ptr(), len) }
    }

    /// Drop the elements in `[start, end)` in place.
    ///
    /// # Safety
    ///
    /// `[start, end)` must be live and is vacant afterwards.
    pub(crate) unsafe fn drop_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.capacity);
        // SAFETY: caller guarantees the range is initialized.
        unsafe {
            let first = self.ptr.as_ptr().add(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
        }
    }

    /// View the live prefix `[0, len)`.
    ///
    /// # Safety
    ///
    /// `[0, len)` must be live.
    #[inline]
    pub(crate) unsafe fn as_slice(&self, len: usize) -> &[T] {
        // SAFETY: the pointer is non-null and aligned even when dangling;
        // the prefix is initialized per caller.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Mutable view of the live prefix `[0, len)`.
    ///
    /// # Safety
    ///
    /// `[0, len)` must be live.
    #[inline]
    pub(crate) unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` gives exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        // The layout was valid when allocated and capacity never changes.
        if let Ok(layout) = Self::layout(self.capacity) {
            // SAFETY: ptr came from `alloc::alloc` with this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

/// Diverge on an allocation error from an infallible entry point
/// (`new`, `Clone`, `FromIterator`, ...).
#[cold]
#[inline(never)]
pub(crate) fn allocation_failure<T>(err: ArrayError) -> ! {
    if let ArrayError::AllocationFailed { requested } = err {
        if let Ok(layout) = Layout::array::<T>(requested) {
            alloc::handle_alloc_error(layout);
        }
    }
    panic!("{err}");
}
