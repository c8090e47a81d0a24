//! Parallel iterators for [`HashMultiset`](crate::HashMultiset).

use super::collect;
use crate::HashMultiset;
use hashbrown::hash_map::rayon as map;
use rayon::iter::plumbing::UnindexedConsumer;
use rayon::iter::{
    FromParallelIterator, IntoParallelIterator, IntoParallelRefIterator, ParallelExtend,
    ParallelIterator,
};
use std::hash::{BuildHasher, Hash};

/// Parallel iterator over the distinct elements of a consumed set and their frequencies.
pub struct IntoParIter<T> {
    inner: map::IntoParIter<T, usize>,
}

impl<T: Send> ParallelIterator for IntoParIter<T> {
    type Item = (T, usize);

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        self.inner.drive_unindexed(consumer)
    }
}

/// Parallel iterator over shared references to the distinct elements of a set.
pub struct ParIter<'a, T> {
    inner: map::ParKeys<'a, T, usize>,
}

impl<'a, T: Sync> ParallelIterator for ParIter<'a, T> {
    type Item = &'a T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        self.inner.drive_unindexed(consumer)
    }
}

/// Parallel iterator over shared references to the distinct elements of a set,
/// paired with their frequencies.
pub struct ParValueIter<'a, T> {
    inner: map::ParIter<'a, T, usize>,
}

impl<'a, T: Sync> ParallelIterator for ParValueIter<'a, T> {
    type Item = (&'a T, usize);

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        self.inner
            .map(|(value, &count)| (value, count))
            .drive_unindexed(consumer)
    }
}

impl<T: Sync, S> HashMultiset<T, S> {
    /// Visits (potentially in parallel) every distinct element with its frequency,
    /// in an arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash_multiset::HashMultiset;
    /// use rayon::iter::ParallelIterator;
    ///
    /// let set = HashMultiset::from([1, 1, 2]);
    ///
    /// assert_eq!(set.par_value_iter().map(|(_, count)| count).sum::<usize>(), 3);
    /// ```
    pub fn par_value_iter(&self) -> ParValueIter<'_, T> {
        ParValueIter {
            inner: self.map.par_iter(),
        }
    }
}

impl<T: Send, S> IntoParallelIterator for HashMultiset<T, S> {
    type Item = (T, usize);
    type Iter = IntoParIter<T>;

    fn into_par_iter(self) -> Self::Iter {
        IntoParIter {
            inner: self.map.into_par_iter(),
        }
    }
}

impl<'a, T: Sync, S> IntoParallelIterator for &'a HashMultiset<T, S> {
    type Item = &'a T;
    type Iter = ParIter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        ParIter {
            inner: self.map.par_keys(),
        }
    }
}

impl<T, S> FromParallelIterator<T> for HashMultiset<T, S>
where
    T: Eq + Hash + Send,
    S: BuildHasher + Default,
{
    fn from_par_iter<P>(par_iter: P) -> Self
    where
        P: IntoParallelIterator<Item = T>,
    {
        let mut set = HashMultiset::default();
        set.par_extend(par_iter);
        set
    }
}

impl<T, S> ParallelExtend<T> for HashMultiset<T, S>
where
    T: Eq + Hash + Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        extend(self, par_iter);
    }
}

impl<'a, T, S> ParallelExtend<&'a T> for HashMultiset<T, S>
where
    T: 'a + Copy + Eq + Hash + Sync,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = &'a T>,
    {
        extend(self, par_iter);
    }
}

fn extend<T, S, I>(set: &mut HashMultiset<T, S>, par_iter: I)
where
    T: Eq + Hash,
    S: BuildHasher,
    I: IntoParallelIterator,
    HashMultiset<T, S>: Extend<I::Item>,
{
    let (list, len) = collect(par_iter);
    log::trace!("extending multiset with {len} elements collected in parallel");

    // `len` counts occurrences, so it only bounds the number of new distinct elements.
    set.reserve(len);

    for vec in list {
        set.extend(vec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_parallel() {
        let set: HashMultiset<u32> = (0..1_000u32).into_par_iter().map(|i| i % 10).collect();

        assert_eq!(set.len(), 10);
        assert_eq!(set.total_count(), 1_000);
        assert!(set.value_iter().all(|(_, count)| count == 100));
    }

    #[test]
    fn iterates_in_parallel() {
        let set = HashMultiset::from(['a', 'b', 'b']);

        assert_eq!((&set).into_par_iter().count(), 2);
        assert_eq!(set.par_value_iter().map(|(_, count)| count).sum::<usize>(), 3);

        let mut pairs: Vec<_> = set.into_par_iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, [('a', 1), ('b', 2)]);
    }

    #[test]
    fn iterator_types_are_exported_from_set() {
        let set = HashMultiset::from([1, 1]);

        let iter: crate::set::rayon::ParValueIter<'_, i32> = set.par_value_iter();

        assert_eq!(iter.map(|(_, count)| count).sum::<usize>(), 2);
    }

    #[test]
    fn extends_from_references() {
        let mut set = HashMultiset::from([1]);
        let more = vec![1, 2, 2];

        set.par_extend(more.par_iter());

        assert_eq!(set.count(&1), 2);
        assert_eq!(set.count(&2), 2);
    }
}
