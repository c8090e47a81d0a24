#[cfg(feature = "rayon")]
pub use crate::rayon::set as rayon;

use crate::error::{check_count, MultisetError};
use crate::multiset::{Multiset, MutableMultiset};
use hashbrown::hash_map::{self, Entry, HashMap};
use hashbrown::TryReserveError;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

/// Multiset implementation where each distinct element is stored once in a hash map,
/// next to the number of times it occurs.
///
/// # Examples
///
/// ```
/// use hash_multiset::HashMultiset;
///
/// let mut set = HashMultiset::new();
/// set.insert(1);
/// set.insert(1);
/// set.insert(2);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_count(), 3);
/// assert_eq!(set.count(&1), 2);
/// ```
#[derive(Clone)]
pub struct HashMultiset<T, S = RandomState> {
    pub(crate) map: HashMap<T, usize, S>,
    total: usize,
}

impl<T> HashMultiset<T, RandomState> {
    /// Creates an empty `HashMultiset` with a capacity of 0,
    /// so it will not allocate until it is first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    ///
    /// let set: HashMultiset<i32> = HashMultiset::new();
    ///
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty `HashMultiset` with room for at least `capacity` distinct elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> HashMultiset<T, S> {
    /// Creates an empty `HashMultiset` which will use the given hash builder to hash elements.
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
            total: 0,
        }
    }

    /// Creates an empty `HashMultiset` with room for at least `capacity` distinct elements,
    /// using the given hash builder to hash elements.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            total: 0,
        }
    }

    /// Returns the number of distinct elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns the number of distinct elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of elements in the set, counting every occurrence.
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Clears the set, returning every distinct element and its frequency as an iterator.
    pub fn drain(&mut self) -> Drain<'_, T> {
        self.total = 0;
        Drain {
            iter: self.map.drain(),
        }
    }

    /// Clears the set, removing all elements. Keeps the allocated memory for reuse.
    pub fn clear(&mut self) {
        self.map.clear();
        self.total = 0;
    }

    /// An iterator visiting every distinct element once, in arbitrary order.
    /// The iterator element type is `&'a T`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.map.keys(),
        }
    }

    /// An iterator visiting every distinct element together with its frequency,
    /// in arbitrary order. The iterator element type is `(&'a T, usize)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    ///
    /// let set: HashMultiset<_> = ['a', 'b', 'a'].into_iter().collect();
    ///
    /// let mut pairs: Vec<_> = set.value_iter().collect();
    /// pairs.sort_unstable(); // Sort since the elements are visited in arbitrary order.
    ///
    /// assert_eq!(pairs, [(&'a', 2), (&'b', 1)]);
    /// ```
    pub fn value_iter(&self) -> ValueIter<'_, T> {
        ValueIter {
            iter: self.map.iter(),
        }
    }
}

impl<T, S> HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Reserves capacity for at least `additional` more distinct elements.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` more distinct elements.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.map.try_reserve(additional)
    }

    /// Shrinks the capacity of the set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
    }

    /// Shrinks the capacity of the set with a lower limit.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.map.shrink_to(min_capacity);
    }

    /// Returns how many times `value` occurs in the set.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(value).copied().unwrap_or(0)
    }

    /// Returns `true` if the set contains `value` at least once.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(value)
    }

    /// Adds a single occurrence of `value`, returning its new frequency.
    pub fn insert(&mut self, value: T) -> usize {
        self.insert_many(value, 1)
    }

    /// Adds `n` occurrences of `value`, returning its new frequency.
    ///
    /// # Panics
    ///
    /// Panics if the total number of occurrences overflows `usize`.
    pub fn insert_many(&mut self, value: T, n: usize) -> usize {
        match self.try_insert_many(value, n) {
            Ok(count) => count,
            Err(err) => panic!("{err}"),
        }
    }

    /// Adds `n` occurrences of `value`, returning its new frequency.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::CountOverflow`] if the total number of occurrences would
    /// overflow `usize`. The set is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::{HashMultiset, MultisetError};
    ///
    /// let mut set = HashMultiset::new();
    ///
    /// assert_eq!(set.try_insert_many('x', usize::MAX), Ok(usize::MAX));
    /// assert_eq!(set.try_insert_many('y', 1), Err(MultisetError::CountOverflow));
    /// assert!(!set.contains(&'y'));
    /// ```
    pub fn try_insert_many(&mut self, value: T, n: usize) -> Result<usize, MultisetError> {
        if n == 0 {
            return Ok(self.count(&value));
        }

        // A frequency never exceeds the total.
        self.total = self
            .total
            .checked_add(n)
            .ok_or(MultisetError::CountOverflow)?;
        let count = self.map.entry(value).or_insert(0);
        *count += n;
        Ok(*count)
    }

    /// Removes a single occurrence of `value`. Returns whether it was present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    ///
    /// let mut set = HashMultiset::new();
    /// set.insert(1);
    /// set.insert(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(count) = self.map.get_mut(value) else {
            return false;
        };

        if *count > 1 {
            *count -= 1;
        } else {
            self.map.remove(value);
        }

        self.total -= 1;
        true
    }

    /// Removes up to `n` occurrences of `value`, returning its remaining frequency.
    pub fn remove_many<Q>(&mut self, value: &Q, n: usize) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(count) = self.map.get_mut(value) else {
            return 0;
        };

        if *count > n {
            *count -= n;
            self.total -= n;
            *count
        } else {
            self.total -= *count;
            self.map.remove(value);
            0
        }
    }

    /// Inserts `value` with `initial_count` occurrences, unless it is already present.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if `initial_count` is negative,
    /// even when `value` is already present, and [`MultisetError::CountOverflow`] if the
    /// total number of occurrences would overflow `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    ///
    /// let mut set = HashMultiset::new();
    /// set.put('x', 2).unwrap();
    /// set.put('x', 10).unwrap();
    ///
    /// assert_eq!(set.count(&'x'), 2);
    /// assert!(set.put('x', -1).is_err());
    /// ```
    pub fn put(&mut self, value: T, initial_count: isize) -> Result<(), MultisetError> {
        let initial_count = check_count(initial_count)?;

        if initial_count > 0 {
            if let Entry::Vacant(entry) = self.map.entry(value) {
                self.total = self
                    .total
                    .checked_add(initial_count)
                    .ok_or(MultisetError::CountOverflow)?;
                entry.insert(initial_count);
            }
        }

        Ok(())
    }

    /// Adds `amount` occurrences of `value`, removing occurrences when `amount` is negative.
    /// Returns the resulting frequency.
    ///
    /// With [`std::ops::Add`] in scope, method syntax picks the `&set + &other` operator
    /// instead, since it only needs a shared reference. Call it as a path then.
    ///
    /// # Panics
    ///
    /// Panics if the total number of occurrences overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    /// use std::ops::Add;
    ///
    /// let mut set = HashMultiset::from(['x']);
    ///
    /// assert_eq!(HashMultiset::add(&mut set, 'x', 2), 3);
    /// assert_eq!(HashMultiset::add(&mut set, 'x', -5), 0);
    /// assert!(set.is_empty());
    ///
    /// let doubled = (&set).add(&HashMultiset::from(['y']));
    /// assert_eq!(doubled.count(&'y'), 1);
    /// ```
    pub fn add(&mut self, value: T, amount: isize) -> usize {
        match usize::try_from(amount) {
            Ok(n) => self.insert_many(value, n),
            Err(_) => self.remove_many(&value, amount.unsigned_abs()),
        }
    }

    /// Sets the frequency of `value` to `count`, returning the previous frequency.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if `count` is negative, and
    /// [`MultisetError::CountOverflow`] if the total number of occurrences would overflow
    /// `usize`. The set is left unchanged on error.
    pub fn set_count(&mut self, value: T, count: isize) -> Result<usize, MultisetError> {
        let count = check_count(count)?;
        let total = (self.total - self.count(&value))
            .checked_add(count)
            .ok_or(MultisetError::CountOverflow)?;

        let previous = if count == 0 {
            self.map.remove(&value)
        } else {
            self.map.insert(value, count)
        }
        .unwrap_or(0);

        self.total = total;
        Ok(previous)
    }

    /// Removes every occurrence of `value`, returning the frequency it had.
    pub fn clear_element<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let previous = self.map.remove(value).unwrap_or(0);
        self.total -= previous;
        previous
    }

    /// Retains only the elements specified by the predicate, which receives each
    /// distinct element and its frequency.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T, usize) -> bool,
    {
        let total = &mut self.total;

        self.map.retain(|value, count| {
            let keep = f(value, *count);
            if !keep {
                *total -= *count;
            }
            keep
        });
    }
}

impl<T, S> HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Builds a set from `(element, frequency)` pairs. Zero frequencies are skipped and
    /// repeated elements have their frequencies summed.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if any frequency is negative, and
    /// [`MultisetError::CountOverflow`] if the frequencies sum past `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    ///
    /// let set: HashMultiset<_> = HashMultiset::try_from_counts([("a", 3), ("b", 0)]).unwrap();
    ///
    /// assert_eq!(set.count("a"), 3);
    /// assert!(!set.contains("b"));
    ///
    /// let negative: Result<HashMultiset<&str>, _> = HashMultiset::try_from_counts([("a", -1)]);
    /// assert!(negative.is_err());
    /// ```
    pub fn try_from_counts<I>(counts: I) -> Result<Self, MultisetError>
    where
        I: IntoIterator<Item = (T, isize)>,
    {
        let counts = counts.into_iter();
        let mut set = Self::with_capacity_and_hasher(counts.size_hint().0, S::default());

        for (value, count) in counts {
            set.try_insert_many(value, check_count(count)?)?;
        }

        log::trace!(
            "built multiset with {} distinct elements from counts",
            set.len()
        );
        Ok(set)
    }

    /// Builds a set from `(element, frequency)` pairs, such as the ones returned by
    /// [`drain`](Self::drain) or owned iteration. Zero frequencies are skipped and repeated
    /// elements have their frequencies summed.
    ///
    /// # Panics
    ///
    /// Panics if the frequencies sum past `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    ///
    /// let mut set = HashMultiset::from(['a', 'a', 'b']);
    /// let rebuilt: HashMultiset<_> = HashMultiset::from_counts(set.drain());
    ///
    /// assert_eq!(rebuilt.count(&'a'), 2);
    /// assert_eq!(rebuilt.total_count(), 3);
    /// ```
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (T, usize)>,
    {
        let counts = counts.into_iter();
        let mut set = Self::with_capacity_and_hasher(counts.size_hint().0, S::default());

        for (value, count) in counts {
            set.insert_many(value, count);
        }

        set
    }
}

impl<T, S> Multiset<T> for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;
    type ValueIter<'a> = ValueIter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn total_count(&self) -> usize {
        self.total
    }

    fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        HashMultiset::count(self, value)
    }

    fn iter(&self) -> Iter<'_, T> {
        HashMultiset::iter(self)
    }

    fn value_iter(&self) -> ValueIter<'_, T> {
        HashMultiset::value_iter(self)
    }
}

impl<T, S> MutableMultiset<T> for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn put(&mut self, value: T, initial_count: isize) -> Result<(), MultisetError> {
        HashMultiset::put(self, value, initial_count)
    }

    fn add(&mut self, value: T, amount: isize) -> usize {
        HashMultiset::add(self, value, amount)
    }

    fn set_count(&mut self, value: T, count: isize) -> Result<usize, MultisetError> {
        HashMultiset::set_count(self, value, count)
    }

    fn clear_element<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        HashMultiset::clear_element(self, value)
    }

    fn insert(&mut self, value: T) {
        HashMultiset::insert(self, value);
    }

    fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        HashMultiset::remove(self, value)
    }

    fn clear(&mut self) {
        HashMultiset::clear(self);
    }
}

impl<T, S> FromIterator<T> for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(Default::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for HashMultiset<T, S>
where
    T: 'a + Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, S> IntoIterator for &'a HashMultiset<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for HashMultiset<T, S> {
    type Item = (T, usize);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

impl<T, S> Default for HashMultiset<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Debug for HashMultiset<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.value_iter()).finish()
    }
}

impl<T, S> PartialEq for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.map == other.map
    }
}

impl<T, S> Eq for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T, const N: usize> From<[T; N]> for HashMultiset<T, RandomState>
where
    T: Eq + Hash,
{
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, S> From<HashMap<T, usize, S>> for HashMultiset<T, S> {
    /// Takes over an element-to-frequency map, keeping its table and hasher.
    /// Zero frequencies are dropped.
    ///
    /// # Panics
    ///
    /// Panics if the frequencies sum past `usize::MAX`.
    fn from(mut map: HashMap<T, usize, S>) -> Self {
        map.retain(|_, count| *count > 0);

        match map
            .values()
            .try_fold(0usize, |total, &count| total.checked_add(count))
        {
            Some(total) => Self { map, total },
            None => panic!("{}", MultisetError::CountOverflow),
        }
    }
}

impl<T, S> From<std::collections::HashMap<T, usize, S>> for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(counts: std::collections::HashMap<T, usize, S>) -> Self {
        Self::from_counts(counts)
    }
}

impl<T, Q, S> Index<&Q> for HashMultiset<T, S>
where
    T: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = usize;

    /// Returns the frequency of `value`, which is 0 when absent.
    fn index(&self, value: &Q) -> &usize {
        self.map.get(value).unwrap_or(&0)
    }
}

impl<T, S, M> Add<&M> for &HashMultiset<T, S>
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

impl<T, S, M> Sub<&M> for &HashMultiset<T, S>
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

impl<T, S, M> AddAssign<&M> for HashMultiset<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
    M: Multiset<T>,
{
    fn add_assign(&mut self, other: &M) {
        self.reserve(other.len());

        for (value, count) in other.value_iter() {
            self.insert_many(value.clone(), count);
        }
    }
}

impl<T, S, M> SubAssign<&M> for HashMultiset<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
    M: Multiset<T>,
{
    fn sub_assign(&mut self, other: &M) {
        for (value, count) in other.value_iter() {
            self.remove_many(value, count);
        }
    }
}

/// A draining iterator over the distinct elements of a `HashMultiset` and their frequencies.
pub struct Drain<'a, T> {
    iter: hash_map::Drain<'a, T, usize>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<(T, usize)> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T: Debug> Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter.fmt(f)
    }
}

/// An iterator over the distinct elements of a `HashMultiset`.
pub struct Iter<'a, T> {
    iter: hash_map::Keys<'a, T, usize>,
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
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the distinct elements of a `HashMultiset` and their frequencies.
pub struct ValueIter<'a, T> {
    iter: hash_map::Iter<'a, T, usize>,
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
        self.iter.next().map(|(value, &count)| (value, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for ValueIter<'_, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for ValueIter<'_, T> {}

impl<T: Debug> Debug for ValueIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.clone()).finish()
    }
}

/// An owning iterator over the distinct elements of a `HashMultiset` and their frequencies.
pub struct IntoIter<T> {
    iter: hash_map::IntoIter<T, usize>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<(T, usize)> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter.fmt(f)
    }
}
