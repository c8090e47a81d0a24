use crate::empty::EmptyMultiset;
use crate::error::MultisetError;
use crate::multiset::Multiset;
use crate::set::{self, HashMultiset};
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::{Add, Index, Sub};

/// A read-only multiset.
///
/// An empty `FrozenMultiset` is backed by [`EmptyMultiset`] and holds no allocation.
/// Any other one owns a [`HashMultiset`] that can no longer be modified.
///
/// # Examples
///
/// ```
/// use hash_multiset::{multiset, FrozenMultiset, Multiset};
///
/// let set: FrozenMultiset<char> = multiset!['a', 'b', 'a'];
///
/// assert_eq!(set.count(&'a'), 2);
/// assert_eq!(set.total_count(), 3);
///
/// let mut copy = set.to_mutable();
/// copy.insert('c');
///
/// assert!(!set.contains(&'c'));
/// ```
#[derive(Clone)]
pub struct FrozenMultiset<T, S = RandomState> {
    inner: Inner<T, S>,
}

#[derive(Clone)]
enum Inner<T, S> {
    Empty(EmptyMultiset<T>),
    Hash(HashMultiset<T, S>),
}

impl<T, S> FrozenMultiset<T, S> {
    /// Returns the empty `FrozenMultiset`.
    pub const fn empty() -> Self {
        Self {
            inner: Inner::Empty(EmptyMultiset::new()),
        }
    }

    /// Returns the number of distinct elements.
    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Empty(_) => 0,
            Inner::Hash(set) => set.len(),
        }
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements, counting every occurrence.
    pub fn total_count(&self) -> usize {
        match &self.inner {
            Inner::Empty(_) => 0,
            Inner::Hash(set) => set.total_count(),
        }
    }

    /// Returns the number of distinct elements the backing store can hold, which is 0
    /// for the empty set.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            Inner::Empty(_) => 0,
            Inner::Hash(set) => set.capacity(),
        }
    }

    /// An iterator visiting every distinct element once, in arbitrary order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.as_hash().map(HashMultiset::iter),
        }
    }

    /// An iterator visiting every distinct element together with its frequency,
    /// in arbitrary order.
    pub fn value_iter(&self) -> ValueIter<'_, T> {
        ValueIter {
            iter: self.as_hash().map(HashMultiset::value_iter),
        }
    }

    fn as_hash(&self) -> Option<&HashMultiset<T, S>> {
        match &self.inner {
            Inner::Empty(_) => None,
            Inner::Hash(set) => Some(set),
        }
    }
}

impl<T, S> FrozenMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns how many times `value` occurs.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.as_hash().map_or(0, |set| set.count(value))
    }

    /// Returns `true` if `value` occurs at least once.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.as_hash().map_or(false, |set| set.contains(value))
    }
}

impl<T, S> FrozenMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Builds a set from `(element, frequency)` pairs. Zero frequencies are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if any frequency is negative, and
    /// [`MultisetError::CountOverflow`] if the frequencies sum past `usize::MAX`.
    pub fn try_from_counts<I>(counts: I) -> Result<Self, MultisetError>
    where
        I: IntoIterator<Item = (T, isize)>,
    {
        HashMultiset::<T, S>::try_from_counts(counts).map(Self::from)
    }
}

impl<T, S> Multiset<T> for FrozenMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;
    type ValueIter<'a> = ValueIter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        FrozenMultiset::len(self)
    }

    fn total_count(&self) -> usize {
        FrozenMultiset::total_count(self)
    }

    fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        FrozenMultiset::count(self, value)
    }

    fn iter(&self) -> Iter<'_, T> {
        FrozenMultiset::iter(self)
    }

    fn value_iter(&self) -> ValueIter<'_, T> {
        FrozenMultiset::value_iter(self)
    }
}

impl<T, S> From<HashMultiset<T, S>> for FrozenMultiset<T, S> {
    /// Freezes `set`. An empty `set` is dropped in favour of the unallocated empty set.
    fn from(set: HashMultiset<T, S>) -> Self {
        if set.is_empty() {
            Self::empty()
        } else {
            Self {
                inner: Inner::Hash(set),
            }
        }
    }
}

impl<T, S> From<EmptyMultiset<T>> for FrozenMultiset<T, S> {
    fn from(_: EmptyMultiset<T>) -> Self {
        Self::empty()
    }
}

impl<T, S> FromIterator<T> for FrozenMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(HashMultiset::<T, S>::from_iter(iter))
    }
}

impl<'a, T, S> IntoIterator for &'a FrozenMultiset<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> Default for FrozenMultiset<T, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, S> Debug for FrozenMultiset<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.value_iter()).finish()
    }
}

impl<T, S> PartialEq for FrozenMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.total_count() == other.total_count()
            && self
                .value_iter()
                .all(|(value, count)| other.count(value) == count)
    }
}

impl<T, S> Eq for FrozenMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, Q, S> Index<&Q> for FrozenMultiset<T, S>
where
    T: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = usize;

    fn index(&self, value: &Q) -> &usize {
        match &self.inner {
            Inner::Empty(_) => &0,
            Inner::Hash(set) => &set[value],
        }
    }
}

impl<T, S, M> Add<&M> for &FrozenMultiset<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
    M: Multiset<T>,
{
    type Output = HashMultiset<T>;

    fn add(self, other: &M) -> HashMultiset<T> {
        self.plus(other)
    }
}

impl<T, S, M> Sub<&M> for &FrozenMultiset<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
    M: Multiset<T>,
{
    type Output = HashMultiset<T>;

    fn sub(self, other: &M) -> HashMultiset<T> {
        self.minus(other)
    }
}

/// An iterator over the distinct elements of a `FrozenMultiset`.
pub struct Iter<'a, T> {
    iter: Option<set::Iter<'a, T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.iter.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the distinct elements of a `FrozenMultiset` and their frequencies.
pub struct ValueIter<'a, T> {
    iter: Option<set::ValueIter<'a, T>>,
}

impl<T> Clone for ValueIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for ValueIter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<(&'a T, usize)> {
        self.iter.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> ExactSizeIterator for ValueIter<'_, T> {}

impl<T> FusedIterator for ValueIter<'_, T> {}

impl<T: Debug> Debug for ValueIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::FrozenMultiset;
    use crate::multiset::Multiset;
    use crate::set::HashMultiset;

    #[test]
    fn freezing_an_empty_set_releases_its_allocation() {
        let set: HashMultiset<u32> = HashMultiset::with_capacity(64);
        let frozen = FrozenMultiset::from(set);

        assert_eq!(frozen.capacity(), 0);
        assert!(frozen.is_empty());
        assert_eq!(frozen.iter().len(), 0);
        assert_eq!(frozen, FrozenMultiset::default());
    }

    #[test]
    fn reads_through_to_the_backing_set() {
        let frozen: FrozenMultiset<_> = "hello".chars().collect();

        assert_eq!(frozen.len(), 4);
        assert_eq!(frozen.total_count(), 5);
        assert_eq!(frozen.count(&'l'), 2);
        assert_eq!(frozen[&'l'], 2);
        assert_eq!(frozen[&'z'], 0);
        assert_eq!(frozen.iter().len(), 4);
        assert_eq!(frozen.value_iter().map(|(_, count)| count).sum::<usize>(), 5);
    }

    #[test]
    fn copies_are_independent() {
        let frozen: FrozenMultiset<_> = [1, 1, 2].into_iter().collect();

        let mut copy = frozen.to_mutable();
        copy.add(1, -2);

        assert_eq!(frozen.count(&1), 2);
        assert_eq!(copy.count(&1), 0);
    }

    #[test]
    fn operators_produce_hash_multisets() {
        let a: FrozenMultiset<_> = [1, 1, 2].into_iter().collect();
        let b = HashMultiset::from([1, 2, 2]);

        let sum = &a + &b;
        let difference = &a - &b;

        assert_eq!(sum, HashMultiset::from([1, 1, 1, 2, 2, 2]));
        assert_eq!(difference, HashMultiset::from([1]));
    }
}
