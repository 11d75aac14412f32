//! The growable array itself.
//!
//! [`DynamicArray`] keeps its live elements in the prefix `[0, len)` of a
//! `RawBuffer`. Insertions that find the buffer full grow it through the
//! array's [`GrowthPolicy`]; every failure path returns before anything is
//! moved, so a failed call leaves the array untouched.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use dynarr_core::{ArrayError, Doubling, GrowthPolicy, GrowthStats};

use crate::config::ArrayConfig;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::raw::{allocation_failure, RawBuffer};

/// A resizable, contiguous, random-access sequence of `T`.
///
/// `P` selects the growth policy used when an insertion finds the buffer
/// full; the default [`Doubling`] gives amortized O(1) appends.
///
/// ```
/// use dynarr_array::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// arr.push_back(1).unwrap();
/// arr.push_back(2).unwrap();
/// arr.push_front(0).unwrap();
/// arr.insert(1, 99).unwrap();
/// assert_eq!(arr.as_slice(), &[0, 99, 1, 2]);
/// assert!(arr.at(4).is_err());
/// ```
pub struct DynamicArray<T, P: GrowthPolicy = Doubling> {
    buf: RawBuffer<T>,
    len: usize,
    max_capacity: usize,
    stats: GrowthStats,
    _policy: PhantomData<fn() -> P>,
}

// ── Construction ───────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Create an empty array with capacity 1.
    ///
    /// # Panics
    ///
    /// Aborts through [`std::alloc::handle_alloc_error`] if the single-slot
    /// allocation fails. Use [`with_config`](Self::with_config) to get the
    /// error instead.
    pub fn new() -> Self {
        Self::with_policy(ArrayConfig::default())
            .unwrap_or_else(|err| allocation_failure::<T>(err))
    }

    /// Create an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Self::with_policy(ArrayConfig::new(capacity))
    }

    /// Create an empty array from a validated [`ArrayConfig`].
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        Self::with_policy(config)
    }

    /// Create an array holding clones of `items`, in order, with capacity
    /// equal to `items.len()`.
    pub fn from_slice(items: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::cloned_from(items, items.len(), RawBuffer::<T>::max_slots())
    }
}

impl<T, P: GrowthPolicy> DynamicArray<T, P> {
    /// Create an empty array with a non-default growth policy.
    ///
    /// ```
    /// use dynarr_array::{ArrayConfig, DynamicArray, Linear};
    ///
    /// let arr = DynamicArray::<u8, Linear<64>>::with_policy(ArrayConfig::new(0)).unwrap();
    /// assert_eq!(arr.capacity(), 0);
    /// ```
    pub fn with_policy(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let max_capacity = config.max_capacity.min(RawBuffer::<T>::max_slots());
        let buf = RawBuffer::allocate(config.initial_capacity)?;
        Ok(Self::from_buffer(buf, max_capacity))
    }

    fn from_buffer(buf: RawBuffer<T>, max_capacity: usize) -> Self {
        Self {
            buf,
            len: 0,
            max_capacity,
            stats: GrowthStats::default(),
            _policy: PhantomData,
        }
    }

    /// Build a fresh array of `capacity` slots holding clones of `items`.
    ///
    /// `len` is bumped after every write, so a panicking `clone` leaves a
    /// partially filled array that still drops correctly.
    fn cloned_from(items: &[T], capacity: usize, max_capacity: usize) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let capacity = capacity.max(items.len());
        if capacity > max_capacity {
            return Err(ArrayError::CapacityLimit {
                requested: capacity,
                limit: max_capacity,
            });
        }
        let mut out = Self::from_buffer(RawBuffer::allocate(capacity)?, max_capacity);
        for item in items {
            // SAFETY: out.len < items.len() <= capacity and the slot is vacant.
            unsafe { out.buf.write(out.len, item.clone()) };
            out.len += 1;
        }
        Ok(out)
    }

    /// Deep-copy this array into a freshly owned buffer.
    ///
    /// The copy's capacity is `max(len, 1)`; its growth counters start at
    /// zero.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::cloned_from(self.as_slice(), self.len.max(1), self.max_capacity)
    }
}

// ── Accessors ──────────────────────────────────────────────────────

impl<T, P: GrowthPolicy> DynamicArray<T, P> {
    /// Number of live elements, the logical size of the array.
    ///
    /// ```
    /// use dynarr_array::DynamicArray;
    ///
    /// let arr: DynamicArray<u8> = DynamicArray::from([1, 2, 3]);
    /// assert_eq!(arr.len(), 3);
    /// ```
    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Effective capacity ceiling: the configured maximum, bounded by the
    /// largest array of `T` the allocator can describe.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Growth counters accumulated since construction or the last
    /// [`reset_stats`](Self::reset_stats).
    #[inline]
    pub fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    /// Zero the growth counters.
    pub fn reset_stats(&mut self) {
        self.stats = GrowthStats::default();
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live.
        unsafe { self.buf.as_slice(self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is live.
        unsafe { self.buf.as_mut_slice(self.len) }
    }

    /// Bounds-checked shared access.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// The returned reference cannot outlive the next call that might
    /// reallocate, since every such call needs `&mut self`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Shared access, `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable access, `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Cursor over the live elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable cursor over the live elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

// ── Capacity ───────────────────────────────────────────────────────

impl<T, P: GrowthPolicy> DynamicArray<T, P> {
    /// Ensure capacity for at least `min_capacity` elements.
    ///
    /// Returns `Ok(false)` without touching the buffer when the capacity
    /// already suffices. Otherwise allocates exactly `min_capacity` slots,
    /// relocates the elements in order and returns `Ok(true)`.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<bool, ArrayError> {
        if min_capacity <= self.capacity() {
            return Ok(false);
        }
        if min_capacity > self.max_capacity {
            return Err(ArrayError::CapacityLimit {
                requested: min_capacity,
                limit: self.max_capacity,
            });
        }
        self.reallocate(min_capacity)?;
        Ok(true)
    }

    /// Reallocate down to `max(len, 1)` slots.
    ///
    /// Returns `Ok(false)` when the buffer is already that small.
    pub fn shrink_to_fit(&mut self) -> Result<bool, ArrayError> {
        let target = self.len.max(1);
        if target >= self.capacity() {
            return Ok(false);
        }
        self.reallocate(target)?;
        Ok(true)
    }

    /// Make room for one more element, growing through `P` if full.
    fn reserve_one(&mut self) -> Result<(), ArrayError> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let required = self
            .len
            .checked_add(1)
            .ok_or(ArrayError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        if required > self.max_capacity {
            return Err(ArrayError::CapacityLimit {
                requested: required,
                limit: self.max_capacity,
            });
        }
        let target = P::next_capacity(self.capacity(), required).min(self.max_capacity);
        self.reallocate(target)
    }

    /// Move the live elements into a new buffer of `new_capacity` slots.
    ///
    /// Allocation happens first; on failure nothing has moved.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = RawBuffer::allocate(new_capacity)?;
        // SAFETY: [0, len) is live in self.buf and len <= new_capacity.
        unsafe { self.buf.relocate_into(&mut fresh, self.len) };
        let old = mem::replace(&mut self.buf, fresh);
        self.stats.record_reallocation(self.len);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = old.capacity(),
            new_capacity,
            len = self.len,
            "dynamic array reallocated"
        );
        drop(old);
        Ok(())
    }
}

// ── Mutation ───────────────────────────────────────────────────────

impl<T, P: GrowthPolicy> DynamicArray<T, P> {
    /// Append `value`, growing first if the buffer is full.
    ///
    /// Amortized O(1) with [`Doubling`]. On error `value` is dropped and
    /// the array is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        self.reserve_one()?;
        // SAFETY: reserve_one guarantees len < capacity; slot len is vacant.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Prepend `value`, shifting every element one slot right.
    ///
    /// O(len) per call regardless of policy.
    pub fn push_front(&mut self, value: T) -> Result<(), ArrayError> {
        self.insert_at(0, value)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends and `index == 0` prepends. Fails with
    /// [`ArrayError::OutOfRange`] when `index > len`, before any growth.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.insert_at(index, value)
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        debug_assert!(index <= self.len);
        self.reserve_one()?;
        // SAFETY: index <= len < capacity and [0, len) is live; after the
        // shift slot `index` is vacant.
        unsafe {
            self.buf.shift_right(index, self.len);
            self.buf.write(index, value);
        }
        self.stats.record_shift(self.len - index);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot len was the last live element and is now outside
        // the live prefix.
        Some(unsafe { self.buf.read(self.len) })
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len; the read vacates slot `index`, which the
        // shift then overwrites with the live tail.
        let removed = unsafe {
            let value = self.buf.read(index);
            self.buf.shift_left(index, self.len);
            value
        };
        self.stats.record_shift(self.len - index - 1);
        self.len -= 1;
        Ok(removed)
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: [0, len) was live; len is already 0 so a panicking drop
        // cannot cause a double drop.
        unsafe { self.buf.drop_range(0, len) };
    }

    /// Replace the contents with clones of `other`'s elements.
    ///
    /// A new buffer of `max(other.len(), 1)` slots is built first; the old
    /// storage is released only once the copy has succeeded, so on error
    /// `self` is unchanged. The capacity ceiling of `self` is kept.
    pub fn assign_from<Q: GrowthPolicy>(&mut self, other: &DynamicArray<T, Q>) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        self.assign_from_slice(other.as_slice())
    }

    /// Replace the contents with clones of `items`.
    ///
    /// Same guarantees as [`assign_from`](Self::assign_from); the new
    /// capacity is `max(items.len(), 1)`. The growth counters carry over
    /// and record one reallocation that moved `items.len()` clones.
    pub fn assign_from_slice(&mut self, items: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let fresh = Self::cloned_from(items, items.len().max(1), self.max_capacity)?;
        let mut stats = self.stats;
        stats.record_reallocation(items.len());
        *self = fresh;
        self.stats = stats;
        Ok(())
    }
}

impl<T, P: GrowthPolicy> Drop for DynamicArray<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

// ── Trait impls ────────────────────────────────────────────────────

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: GrowthPolicy> Clone for DynamicArray<T, P> {
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| allocation_failure::<T>(err))
    }

    /// Reuses `assign_from`, so the copy keeps this array's ceiling when
    /// it fits. A source longer than that ceiling is copied as `clone()`
    /// would, taking the source's ceiling.
    fn clone_from(&mut self, source: &Self) {
        match self.assign_from(source) {
            Ok(()) => {}
            Err(ArrayError::CapacityLimit { .. }) => *self = source.clone(),
            Err(err) => allocation_failure::<T>(err),
        }
    }
}

impl<T: fmt::Debug, P: GrowthPolicy> fmt::Debug for DynamicArray<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, P, Q> PartialEq<DynamicArray<U, Q>> for DynamicArray<T, P>
where
    T: PartialEq<U>,
    P: GrowthPolicy,
    Q: GrowthPolicy,
{
    fn eq(&self, other: &DynamicArray<U, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P: GrowthPolicy> Eq for DynamicArray<T, P> {}

impl<T: PartialEq<U>, U, P: GrowthPolicy> PartialEq<[U]> for DynamicArray<T, P> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, P: GrowthPolicy, const N: usize> PartialEq<[U; N]> for DynamicArray<T, P> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, P: GrowthPolicy> Index<usize> for DynamicArray<T, P> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`ArrayError::OutOfRange`] message when
    /// `index >= len`. Use [`at`](DynamicArray::at) for a `Result`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, P: GrowthPolicy> IndexMut<usize> for DynamicArray<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, P: GrowthPolicy> AsRef<[T]> for DynamicArray<T, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P: GrowthPolicy> AsMut<[T]> for DynamicArray<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P: GrowthPolicy, const N: usize> From<[T; N]> for DynamicArray<T, P> {
    fn from(items: [T; N]) -> Self {
        let buf = RawBuffer::allocate(N).unwrap_or_else(|err| allocation_failure::<T>(err));
        let mut out = Self::from_buffer(buf, RawBuffer::<T>::max_slots());
        for item in items {
            // SAFETY: at most N writes into an N-slot buffer, each vacant.
            unsafe { out.buf.write(out.len, item) };
            out.len += 1;
        }
        out
    }
}

impl<T, P: GrowthPolicy> FromIterator<T> for DynamicArray<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let config = ArrayConfig::new(lower.max(ArrayConfig::DEFAULT_INITIAL_CAPACITY));
        let mut out = Self::with_policy(config).unwrap_or_else(|err| allocation_failure::<T>(err));
        out.extend(iter);
        out
    }
}

impl<T, P: GrowthPolicy> Extend<T> for DynamicArray<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.push_back(item) {
                allocation_failure::<T>(err)
            }
        }
    }
}

impl<T, P: GrowthPolicy> IntoIterator for DynamicArray<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let buf = mem::replace(&mut self.buf, RawBuffer::dangling());
        let len = mem::replace(&mut self.len, 0);
        // `self` now owns nothing; its drop is a no-op.
        IntoIter::new(buf, len)
    }
}

impl<'a, T, P: GrowthPolicy> IntoIterator for &'a DynamicArray<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, P: GrowthPolicy> IntoIterator for &'a mut DynamicArray<T, P> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
