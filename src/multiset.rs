use crate::error::MultisetError;
use crate::set::HashMultiset;
use std::borrow::Borrow;
use std::hash::Hash;

/// Read access to a multiset: an unordered collection that tracks how many times
/// each distinct element occurs.
///
/// Every element visible through this trait has a frequency of at least one.
/// Elements that do not occur have a frequency of zero and are never iterated.
///
/// # Examples
///
/// ```
/// use hash_multiset::{multiset, Multiset};
///
/// let a = multiset!['a', 'a', 'b'];
/// let b = multiset!['a', 'c'];
///
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.total_count(), 3);
/// assert_eq!(a.plus(&b).count(&'a'), 3);
/// assert_eq!(a.minus(&b).count(&'a'), 1);
/// assert_eq!(a.minus(&b).count(&'c'), 0);
/// ```
pub trait Multiset<T> {
    /// Iterator over the distinct elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Iterator over the distinct elements paired with their frequency.
    type ValueIter<'a>: Iterator<Item = (&'a T, usize)>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of distinct elements.
    fn len(&self) -> usize;

    /// Returns `true` if the multiset contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sum of all frequencies.
    ///
    /// This is never less than [`len`](Multiset::len), and equals it only when
    /// every element occurs exactly once.
    fn total_count(&self) -> usize;

    /// Returns how many times `value` occurs, or 0 if it is absent.
    fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Same as [`count`](Multiset::count).
    fn get<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.count(value)
    }

    /// Returns `true` if `value` occurs at least once.
    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.count(value) > 0
    }

    /// An iterator visiting each distinct element once, in arbitrary order.
    fn iter(&self) -> Self::Iter<'_>;

    /// An iterator visiting each distinct element once together with its frequency,
    /// in arbitrary order.
    fn value_iter(&self) -> Self::ValueIter<'_>;

    /// Returns a new multiset where every frequency is the sum of the frequencies in
    /// `self` and `other`.
    fn plus<M>(&self, other: &M) -> HashMultiset<T>
    where
        M: Multiset<T> + ?Sized,
        T: Eq + Hash + Clone,
    {
        let mut result = self.to_mutable();
        result.reserve(other.len());

        for (value, count) in other.value_iter() {
            result.insert_many(value.clone(), count);
        }

        result
    }

    /// Returns a new multiset where every frequency is the frequency in `self` minus
    /// the frequency in `other`, floored at zero.
    ///
    /// Elements whose frequency drops to zero are absent from the result.
    fn minus<M>(&self, other: &M) -> HashMultiset<T>
    where
        M: Multiset<T> + ?Sized,
        T: Eq + Hash + Clone,
    {
        let mut result = HashMultiset::with_capacity(self.len());

        for (value, count) in self.value_iter() {
            let rest = count.saturating_sub(other.count(value));
            if rest > 0 {
                result.insert_many(value.clone(), rest);
            }
        }

        result
    }

    /// Copies the multiset into a new, independent [`HashMultiset`].
    fn to_mutable(&self) -> HashMultiset<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut result = HashMultiset::with_capacity(self.len());

        for (value, count) in self.value_iter() {
            result.insert_many(value.clone(), count);
        }

        result
    }
}

/// Mutable access to a multiset.
///
/// Implementations never store an element with a frequency of zero: any operation
/// that brings a frequency to zero or below removes the element.
pub trait MutableMultiset<T>: Multiset<T> {
    /// Inserts `value` with `initial_count` occurrences if it is not present yet.
    ///
    /// Does nothing when `value` is already present. An `initial_count` of zero
    /// stores nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if `initial_count` is negative,
    /// whether or not `value` is present. Implementations that keep a total return
    /// [`MultisetError::CountOverflow`] when it would overflow.
    fn put(&mut self, value: T, initial_count: isize) -> Result<(), MultisetError>;

    /// Adds `amount` occurrences of `value`, which may be negative to remove
    /// occurrences, and returns the resulting frequency.
    ///
    /// Removing more occurrences than present removes the element.
    ///
    /// # Panics
    ///
    /// May panic if the total number of occurrences overflows `usize`.
    fn add(&mut self, value: T, amount: isize) -> usize;

    /// Sets the frequency of `value` to exactly `count`, returning the previous
    /// frequency. A `count` of zero removes the element.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if `count` is negative, and
    /// [`MultisetError::CountOverflow`] if the total would overflow.
    fn set_count(&mut self, value: T, count: isize) -> Result<usize, MultisetError>;

    /// Same as [`set_count`](MutableMultiset::set_count).
    fn set(&mut self, value: T, count: isize) -> Result<usize, MultisetError> {
        self.set_count(value, count)
    }

    /// Removes every occurrence of `value`, returning the frequency it had.
    fn clear_element<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Adds a single occurrence of `value`.
    fn insert(&mut self, value: T) {
        self.add(value, 1);
    }

    /// Removes a single occurrence of `value`. Returns whether an occurrence was
    /// present.
    fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Adds a single occurrence of every item.
    fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// Removes a single occurrence per item, returning how many occurrences were
    /// actually removed.
    fn remove_all<'q, I, Q>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = &'q Q>,
        T: Borrow<Q>,
        Q: 'q + ?Sized + Hash + Eq,
    {
        values
            .into_iter()
            .filter(|value| self.remove(*value))
            .count()
    }

    /// Removes every element.
    fn clear(&mut self);
}
