//! Iterators over a [`DynamicArray`](crate::DynamicArray).
//!
//! Borrowing iteration reuses the slice iterators: the live prefix is a
//! plain `[T]`, so [`Iter`] and [`IterMut`] are the half-open
//! `[begin, end)` cursor pairs over it. [`IntoIter`] takes the buffer over
//! and yields elements by value.

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;

use crate::raw::RawBuffer;

/// Shared cursor over the live elements.
pub type Iter<'a, T> = std::slice::Iter<'a, T>;

/// Mutable cursor over the live elements.
pub type IterMut<'a, T> = std::slice::IterMut<'a, T>;

/// Owning iterator returned by `DynamicArray::into_iter`.
///
/// Elements not consumed are dropped with the iterator, and the buffer is
/// released afterwards.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    /// Live elements occupy `[front, back)`.
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [front, back) is live; the full prefix view is only used
        // to sub-slice it.
        let live = unsafe { self.buf.as_slice(self.back) };
        &live[self.front..]
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back, so slot front is live; advancing front
        // marks it moved-out.
        let value = unsafe { self.buf.read(self.front) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot back was the last live element.
        Some(unsafe { self.buf.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: [front, back) was live and is now outside the range.
        unsafe { self.buf.drop_range(front, back) };
    }
}
