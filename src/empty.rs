use crate::error::MultisetError;
use crate::multiset::Multiset;
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// The empty multiset.
///
/// It is zero-sized, never allocates and has no way to be mutated.
///
/// # Examples
///
/// ```
/// use hash_multiset::{empty_multiset, Multiset};
///
/// let set = empty_multiset::<String>();
///
/// assert_eq!(set.len(), 0);
/// assert_eq!(set.total_count(), 0);
/// assert_eq!(set.count("anything"), 0);
/// assert_eq!(set.iter().next(), None);
/// ```
pub struct EmptyMultiset<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> EmptyMultiset<T> {
    /// Returns the empty multiset.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Multiset<T> for EmptyMultiset<T> {
    type Iter<'a> = EmptyIterator<&'a T> where Self: 'a, T: 'a;
    type ValueIter<'a> = EmptyIterator<(&'a T, usize)> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        0
    }

    fn total_count(&self) -> usize {
        0
    }

    fn count<Q>(&self, _value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        0
    }

    fn iter(&self) -> EmptyIterator<&'_ T> {
        EmptyIterator::new()
    }

    fn value_iter(&self) -> EmptyIterator<(&'_ T, usize)> {
        EmptyIterator::new()
    }
}

impl<T> Clone for EmptyMultiset<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyMultiset<T> {}

impl<T> Default for EmptyMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for EmptyMultiset<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for EmptyMultiset<T> {}

impl<T> Debug for EmptyMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{}")
    }
}

/// An iterator that never yields anything.
///
/// Its only state is the exhausted one: `next` and `next_back` always return `None`,
/// and the fallible [`try_next`](EmptyIterator::try_next) and
/// [`try_previous`](EmptyIterator::try_previous) always fail.
pub struct EmptyIterator<I> {
    marker: PhantomData<fn() -> I>,
}

impl<I> EmptyIterator<I> {
    /// Returns the empty iterator.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Always fails with [`MultisetError::NoSuchElement`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::{EmptyIterator, MultisetError};
    ///
    /// let mut iter = EmptyIterator::<u8>::new();
    ///
    /// assert_eq!(iter.try_next(), Err(MultisetError::NoSuchElement));
    /// ```
    pub fn try_next(&mut self) -> Result<I, MultisetError> {
        Err(MultisetError::NoSuchElement)
    }

    /// Always fails with [`MultisetError::NoSuchElement`].
    pub fn try_previous(&mut self) -> Result<I, MultisetError> {
        Err(MultisetError::NoSuchElement)
    }

    /// Index of the element a call to `next` would return.
    pub fn next_index(&self) -> usize {
        0
    }

    /// Index of the element a call to `next_back` would return, which never exists.
    pub fn previous_index(&self) -> Option<usize> {
        None
    }
}

impl<I> Iterator for EmptyIterator<I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<I> DoubleEndedIterator for EmptyIterator<I> {
    fn next_back(&mut self) -> Option<I> {
        None
    }
}

impl<I> ExactSizeIterator for EmptyIterator<I> {
    fn len(&self) -> usize {
        0
    }
}

impl<I> FusedIterator for EmptyIterator<I> {}

impl<I> Clone for EmptyIterator<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for EmptyIterator<I> {}

impl<I> Default for EmptyIterator<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Debug for EmptyIterator<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyIterator")
    }
}
