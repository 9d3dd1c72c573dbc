use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection with a fixed capacity of `N`, stored inline without any
/// heap allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the StaticVector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct StaticVector<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVector<T, N> {
    /// Creates a new, empty StaticVector.
    ///
    /// # Examples
    /// ```
    /// # use gears::container::StaticVector;
    /// let vec: StaticVector<u8, 4> = StaticVector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub const fn new() -> StaticVector<T, N> {
        StaticVector {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Creates a StaticVector holding `count` clones of `value`.
    ///
    /// # Panics
    /// Panics if `count` exceeds the capacity `N`.
    pub fn repeat(value: T, count: usize) -> StaticVector<T, N>
    where
        T: Clone,
    {
        if count > N {
            Err(CapacityOverflow { cap: N }).throw()
        }

        let mut vec = StaticVector::new();
        if count > 0 {
            for _ in 1..count {
                // SAFETY: count <= N, so there is room for every value.
                unsafe { vec.push_unchecked(value.clone()) }
            }
            // SAFETY: As above, this is the last of count values.
            unsafe { vec.push_unchecked(value) }
        }
        vec
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity, which is always `N`.
    pub const fn cap(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Pushes the provided value onto the end of the StaticVector.
    ///
    /// # Panics
    /// Panics if the StaticVector is already full.
    ///
    /// # Examples
    /// ```
    /// # use gears::container::StaticVector;
    /// let mut vec = StaticVector::<u8, 6>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert!(vec.try_push(6).is_err());
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes the provided value onto the end of the StaticVector, or returns an error if it is
    /// full. The value is dropped in the error case.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.is_full() {
            return Err(CapacityOverflow { cap: N });
        }
        // SAFETY: The StaticVector has just been checked to not be full.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Pushes the provided value onto the end of the StaticVector, assuming there is room.
    ///
    /// # Safety
    /// The caller must ensure that `len < N`. Pushing onto a full StaticVector is undefined
    /// behavior.
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that len is in bounds of buf.
        unsafe {
            self.buf
                .as_mut_ptr()
                .add(self.len)
                .write(MaybeUninit::new(value));
        }
        self.len += 1;
    }

    /// Pops the last value off the end of the StaticVector, if there is one.
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The value at the old last index is initialized, and it is now past len so it
        // won't be read or dropped again.
        Some(unsafe { self.buf.as_ptr().add(self.len).read().assume_init() })
    }

    /// Inserts the provided value at `index`, moving all following values back by one. An index
    /// equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if `index > len` or the StaticVector is full.
    ///
    /// # Examples
    /// ```
    /// # use gears::container::StaticVector;
    /// let mut vec: StaticVector<_, 6> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Like [`insert`](StaticVector::insert), but returns an error instead of panicking.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })?
        }
        if self.is_full() {
            Err(CapacityOverflow { cap: N })?
        }

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.buf[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index`, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index).throw();

        let mut next = MaybeUninit::uninit();
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }

        self.len -= 1;
        // SAFETY: next holds the value that was at index, which is < len and so initialized.
        unsafe { next.assume_init() }
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index).throw();

        // SAFETY: index is < len and all values < len are initialized.
        unsafe { mem::replace(&mut self.buf[index], MaybeUninit::new(new_value)).assume_init() }
    }

    /// Drops every element, leaving the StaticVector empty.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so a panicking drop can't lead to a double drop.
        self.len = 0;
        for value in &mut self.buf[..len] {
            // SAFETY: All values < the old len are initialized and are no longer reachable.
            unsafe { value.assume_init_drop() }
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Collects an iterator into a StaticVector.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the iterator yields more than `N` items. The items
    /// collected so far are dropped.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, CapacityOverflow> {
        let mut vec = StaticVector::new();
        for item in iter {
            vec.try_push(item)?;
        }
        Ok(vec)
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T, const N: usize> Default for StaticVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for StaticVector<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Deref for StaticVector<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values of buf are initialized, and MaybeUninit<T> has the same
        // layout as T. The borrow of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }
}

impl<T, const N: usize> DerefMut for StaticVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the unique borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len) }
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for StaticVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Borrow<[T]> for StaticVector<T, N> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> BorrowMut<[T]> for StaticVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Extend<T> for StaticVector<T, N> {
    /// # Panics
    /// Panics if the StaticVector runs out of capacity.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for StaticVector<T, N> {
    /// # Panics
    /// Panics if the iterator yields more than `N` items, see
    /// [`try_from_iter`](StaticVector::try_from_iter) for a fallible version.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        StaticVector::try_from_iter(iter).throw()
    }
}

impl<T: Clone, const N: usize> Clone for StaticVector<T, N> {
    fn clone(&self) -> Self {
        let mut vec = StaticVector::new();
        for value in self.iter() {
            // SAFETY: self.len <= N, so the clone has room for every value.
            unsafe { vec.push_unchecked(value.clone()) }
        }
        vec
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, const N: usize> Eq for StaticVector<T, N> {}

impl<T: Hash, const N: usize> Hash for StaticVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, const N: usize> Debug for StaticVector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &N)
            .finish()
    }
}
