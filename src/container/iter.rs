use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::slice::{Iter, IterMut};

use super::StaticVector;

impl<T, const N: usize> IntoIterator for StaticVector<T, N> {
    type Item = T;

    type IntoIter = IntoIter<T, N>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Take ownership of the values, leaving self empty so that its drop is a no-op.
        let end = mem::take(&mut self.len);
        let buf = mem::replace(&mut self.buf, [const { MaybeUninit::uninit() }; N]);
        IntoIter { buf, start: 0, end }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVector<T, N> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVector<T, N> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`StaticVector`]. Values that are never yielded are dropped
/// along with the iterator.
pub struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    start: usize,
    end: usize,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: Every value in start..end is initialized, and start is moved past this one so
        // it is never read again.
        let value = unsafe { self.buf[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.start;
        (left, Some(left))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The value at the old end - 1 is initialized and now outside of start..end.
        Some(unsafe { self.buf[self.end].assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        for value in &mut self.buf[self.start..self.end] {
            // SAFETY: Values in start..end are initialized and haven't been yielded.
            unsafe { value.assume_init_drop() }
        }
    }
}
