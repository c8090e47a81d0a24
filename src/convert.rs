use crate::empty::EmptyMultiset;
use crate::error::MultisetError;
use crate::frozen::FrozenMultiset;
use crate::multiset::Multiset;
use crate::set::HashMultiset;
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Returns the empty multiset. Nothing is allocated.
pub const fn empty_multiset<T>() -> EmptyMultiset<T> {
    EmptyMultiset::new()
}

/// Builds a read-only multiset from the given elements, counting each occurrence.
///
/// An empty input yields the unallocated empty set. See also [`multiset!`](crate::multiset!).
///
/// # Examples
///
/// ```
/// use hash_multiset::multiset_of;
///
/// let set = multiset_of(["x", "x", "y"]);
///
/// assert_eq!(set.count("x"), 2);
/// assert_eq!(multiset_of(Vec::<u8>::new()).capacity(), 0);
/// ```
pub fn multiset_of<T, I>(values: I) -> FrozenMultiset<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Builds a new mutable multiset from the given elements, counting each occurrence.
///
/// See also [`mutable_multiset!`](crate::mutable_multiset!).
pub fn mutable_multiset_of<T, I>(values: I) -> HashMultiset<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Conversion of a collection into a multiset.
///
/// Sequences, arrays and text contribute one occurrence per item. Multisets keep
/// their frequencies, which are copied pair by pair instead of being recounted.
/// Maps from element to `usize` frequency are read as counts, skipping zeros.
///
/// # Examples
///
/// ```
/// use hash_multiset::ToMultiset;
///
/// let set = vec!['x', 'x', 'y'].to_multiset();
///
/// assert_eq!(set.count(&'x'), 2);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_count(), 3);
///
/// let letters = "banana".to_mutable_multiset();
///
/// assert_eq!(letters.count(&'a'), 3);
/// ```
pub trait ToMultiset {
    /// The element type of the resulting multiset.
    type Item;

    /// Converts `self` into a new, independent mutable multiset.
    fn to_mutable_multiset(self) -> HashMultiset<Self::Item>;

    /// Converts `self` into a read-only multiset.
    fn to_multiset(self) -> FrozenMultiset<Self::Item>
    where
        Self: Sized,
    {
        FrozenMultiset::from(self.to_mutable_multiset())
    }
}

impl<T> ToMultiset for Vec<T>
where
    T: Eq + Hash,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        self.into_iter().collect()
    }
}

impl<T> ToMultiset for &Vec<T>
where
    T: Eq + Hash + Clone,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        self.as_slice().to_mutable_multiset()
    }
}

impl<T> ToMultiset for &[T]
where
    T: Eq + Hash + Clone,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        self.iter().cloned().collect()
    }
}

impl<T, const N: usize> ToMultiset for [T; N]
where
    T: Eq + Hash,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        self.into_iter().collect()
    }
}

impl ToMultiset for &str {
    type Item = char;

    fn to_mutable_multiset(self) -> HashMultiset<char> {
        self.chars().collect()
    }
}

impl ToMultiset for &String {
    type Item = char;

    fn to_mutable_multiset(self) -> HashMultiset<char> {
        self.as_str().to_mutable_multiset()
    }
}

impl ToMultiset for String {
    type Item = char;

    fn to_mutable_multiset(self) -> HashMultiset<char> {
        self.as_str().to_mutable_multiset()
    }
}

impl<T, S> ToMultiset for HashMultiset<T, S>
where
    T: Eq + Hash,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        let mut set = HashMultiset::with_capacity(self.len());
        for (value, count) in self {
            set.insert_many(value, count);
        }
        set
    }
}

impl<T, S> ToMultiset for &HashMultiset<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        self.to_mutable()
    }
}

impl<T, S> ToMultiset for &FrozenMultiset<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        self.to_mutable()
    }
}

impl<T, S> ToMultiset for HashMap<T, usize, S>
where
    T: Eq + Hash,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        HashMultiset::from_counts(self)
    }
}

impl<T, S> ToMultiset for hashbrown::HashMap<T, usize, S>
where
    T: Eq + Hash,
{
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        HashMultiset::from_counts(self)
    }
}

impl<T> ToMultiset for &EmptyMultiset<T> {
    type Item = T;

    fn to_mutable_multiset(self) -> HashMultiset<T> {
        HashMultiset::new()
    }

    fn to_multiset(self) -> FrozenMultiset<T> {
        FrozenMultiset::empty()
    }
}

/// Conversion of floating point sequences into a multiset.
///
/// Floats are wrapped in [`OrderedFloat`] so that they can be hashed. All NaNs are
/// counted as the same element.
///
/// # Examples
///
/// ```
/// use hash_multiset::ToFloatMultiset;
/// use ordered_float::OrderedFloat;
///
/// let set = [0.5f64, 0.5, 2.0].to_float_multiset();
///
/// assert_eq!(set.count(&OrderedFloat(0.5)), 2);
/// ```
pub trait ToFloatMultiset {
    /// The float type of the source.
    type Float;

    /// Converts `self` into a new, independent mutable multiset.
    fn to_mutable_float_multiset(self) -> HashMultiset<OrderedFloat<Self::Float>>;

    /// Converts `self` into a read-only multiset.
    fn to_float_multiset(self) -> FrozenMultiset<OrderedFloat<Self::Float>>
    where
        Self: Sized,
    {
        FrozenMultiset::from(self.to_mutable_float_multiset())
    }
}

macro_rules! impl_to_float_multiset {
    ($($float:ty),*) => {$(
        impl ToFloatMultiset for &[$float] {
            type Float = $float;

            fn to_mutable_float_multiset(self) -> HashMultiset<OrderedFloat<$float>> {
                self.iter().copied().map(OrderedFloat).collect()
            }
        }

        impl<const N: usize> ToFloatMultiset for [$float; N] {
            type Float = $float;

            fn to_mutable_float_multiset(self) -> HashMultiset<OrderedFloat<$float>> {
                self.into_iter().map(OrderedFloat).collect()
            }
        }

        impl ToFloatMultiset for Vec<$float> {
            type Float = $float;

            fn to_mutable_float_multiset(self) -> HashMultiset<OrderedFloat<$float>> {
                self.into_iter().map(OrderedFloat).collect()
            }
        }
    )*};
}

impl_to_float_multiset!(f32, f64);

/// Fallible conversion of an element-to-frequency map into a multiset.
///
/// Entries with a frequency of zero are left out of the result.
///
/// # Examples
///
/// ```
/// use hash_multiset::{MultisetError, TryToMultiset};
/// use std::collections::HashMap;
///
/// let set = HashMap::from([("a", 3), ("b", 0)]).try_to_multiset().unwrap();
///
/// assert_eq!(set.count("a"), 3);
/// assert_eq!(set.len(), 1);
///
/// let negative = HashMap::from([("a", -1)]).try_to_multiset();
///
/// assert_eq!(negative, Err(MultisetError::NegativeCount(-1)));
/// ```
pub trait TryToMultiset {
    /// The element type of the resulting multiset.
    type Item;

    /// Converts `self` into a new mutable multiset.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if any frequency is negative, and
    /// [`MultisetError::CountOverflow`] if the frequencies sum past `usize::MAX`.
    fn try_to_mutable_multiset(self) -> Result<HashMultiset<Self::Item>, MultisetError>;

    /// Converts `self` into a read-only multiset.
    ///
    /// # Errors
    ///
    /// Returns [`MultisetError::NegativeCount`] if any frequency is negative, and
    /// [`MultisetError::CountOverflow`] if the frequencies sum past `usize::MAX`.
    fn try_to_multiset(self) -> Result<FrozenMultiset<Self::Item>, MultisetError>
    where
        Self: Sized,
    {
        self.try_to_mutable_multiset().map(FrozenMultiset::from)
    }
}

impl<T, S> TryToMultiset for HashMap<T, isize, S>
where
    T: Eq + Hash,
{
    type Item = T;

    fn try_to_mutable_multiset(self) -> Result<HashMultiset<T>, MultisetError> {
        HashMultiset::try_from_counts(self)
    }
}

impl<T, S> TryToMultiset for &HashMap<T, isize, S>
where
    T: Eq + Hash + Clone,
{
    type Item = T;

    fn try_to_mutable_multiset(self) -> Result<HashMultiset<T>, MultisetError> {
        HashMultiset::try_from_counts(self.iter().map(|(value, &count)| (value.clone(), count)))
    }
}

impl<T, S> TryToMultiset for hashbrown::HashMap<T, isize, S>
where
    T: Eq + Hash,
{
    type Item = T;

    fn try_to_mutable_multiset(self) -> Result<HashMultiset<T>, MultisetError> {
        HashMultiset::try_from_counts(self)
    }
}

impl<T> TryToMultiset for BTreeMap<T, isize>
where
    T: Eq + Hash,
{
    type Item = T;

    fn try_to_mutable_multiset(self) -> Result<HashMultiset<T>, MultisetError> {
        HashMultiset::try_from_counts(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiset::MutableMultiset;

    #[test]
    fn empty_sources_stay_unallocated() {
        assert_eq!(multiset_of(Vec::<char>::new()).capacity(), 0);
        assert_eq!(Vec::<char>::new().to_multiset().capacity(), 0);
        assert_eq!("".to_multiset().capacity(), 0);
        assert_eq!([0u8; 0].to_multiset().capacity(), 0);
        assert_eq!((&empty_multiset::<u8>()).to_multiset().capacity(), 0);
    }

    #[test]
    fn mutable_factories_always_allocate_fresh_sets() {
        let mut a = mutable_multiset_of(Vec::<i32>::new());
        let b = mutable_multiset_of([1, 1]);

        a.insert(1);

        assert_eq!(a.count(&1), 1);
        assert_eq!(b.count(&1), 2);
    }

    #[test]
    fn primitive_arrays_count_each_item() {
        let bytes = [1u8, 1, 2].to_multiset();
        let shorts = vec![-1i16, -1].to_multiset();
        let longs = (&[5i64, 6, 5][..]).to_mutable_multiset();
        let chars = ['a', 'b', 'a'].to_multiset();

        assert_eq!(bytes.count(&1), 2);
        assert_eq!(shorts.count(&-1), 2);
        assert_eq!(longs.count(&5), 2);
        assert_eq!(chars.count(&'a'), 2);
    }

    #[test]
    fn floats_are_counted_by_value() {
        let doubles = vec![1.5f64, 1.5, -0.25].to_float_multiset();
        let singles = (&[3.0f32][..]).to_mutable_float_multiset();

        assert_eq!(doubles.count(&OrderedFloat(1.5)), 2);
        assert_eq!(doubles.total_count(), 3);
        assert_eq!(singles.count(&OrderedFloat(3.0)), 1);
    }

    #[test]
    fn text_counts_characters() {
        let owned = String::from("mississippi");
        let set = (&owned).to_multiset();

        assert_eq!(set.count(&'s'), 4);
        assert_eq!(set.count(&'m'), 1);
        assert_eq!(set.len(), 4);
        assert_eq!(owned.to_mutable_multiset().total_count(), 11);
    }

    #[test]
    fn multiset_sources_keep_frequencies() {
        let mut source = HashMultiset::new();
        source.put("a", 1_000).unwrap();

        let copy = (&source).to_mutable_multiset();
        let frozen = (&source).to_multiset();
        let refrozen = (&frozen).to_multiset();

        assert_eq!(copy.count("a"), 1_000);
        assert_eq!(refrozen.count("a"), 1_000);
        assert_eq!(source.to_mutable_multiset(), copy);
    }

    #[test]
    fn copies_do_not_alias_their_source() {
        let source = HashMultiset::from(['q']);
        let mut copy = (&source).to_mutable_multiset();

        MutableMultiset::clear_element(&mut copy, &'q');

        assert_eq!(source.count(&'q'), 1);
        assert!(copy.is_empty());
    }

    #[test]
    fn count_maps_elide_zero_entries() {
        let map = HashMap::from([("a", 3), ("b", 0)]);

        let set = (&map).try_to_mutable_multiset().unwrap();
        assert_eq!(set.count("a"), 3);
        assert_eq!(set.count("b"), 0);
        assert!(set.iter().all(|value| *value != "b"));

        let ordered = BTreeMap::from([('x', 2), ('y', 0)]).try_to_multiset().unwrap();
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered.total_count(), 2);
    }

    #[test]
    fn count_maps_reject_negative_entries() {
        let mut map = hashbrown::HashMap::new();
        map.insert('a', 2);
        map.insert('b', -4);

        assert_eq!(
            map.try_to_multiset(),
            Err(MultisetError::NegativeCount(-4))
        );
    }

    #[test]
    fn count_maps_report_overflow() {
        let map = BTreeMap::from([('a', isize::MAX), ('b', isize::MAX), ('c', 2)]);

        assert_eq!(map.try_to_multiset(), Err(MultisetError::CountOverflow));
    }

    #[test]
    fn unsigned_count_maps_convert_directly() {
        let mut source = HashMultiset::from(["a", "a", "b"]);
        let counts: HashMap<_, _> = source.drain().chain([("c", 0)]).collect();

        let set = counts.to_multiset();

        assert_eq!(set.count("a"), 2);
        assert_eq!(set.count("b"), 1);
        assert!(!set.contains("c"));
        assert_eq!(set.total_count(), 3);
    }
}
