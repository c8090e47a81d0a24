//! A [multiset](https://en.wikipedia.org/wiki/Multiset) implementation backed by a hash map
//! from each distinct element to the number of times it occurs:
//!  - `a -> 2`
//!  - `b -> 1`
//!
//! ---
//!
//! [`Multiset`] is the read-only view: distinct-element count, total count, per-element
//! frequency, and two ways of iterating: over distinct elements, or over
//! `(element, frequency)` pairs. It also derives new multisets by adding
//! ([`plus`](Multiset::plus)) or subtracting ([`minus`](Multiset::minus)) frequencies.
//!
//! [`MutableMultiset`] adds the operations that change frequencies. Frequencies never
//! go below one: an element whose frequency would reach zero is removed.
//!
//! ---
//!
//! [`HashMultiset`] is the mutable implementation. [`FrozenMultiset`] is its read-only
//! counterpart, and [`EmptyMultiset`] is a zero-sized empty multiset that never allocates.
//!
//! ```
//! use hash_multiset::{multiset, mutable_multiset, Multiset};
//!
//! let fruit = multiset!["apple", "pear", "apple"];
//! let mut basket = mutable_multiset!["apple"];
//! basket.add("plum", 2);
//!
//! let all = fruit.plus(&basket);
//!
//! assert_eq!(all.count("apple"), 3);
//! assert_eq!(all.total_count(), 6);
//! assert_eq!(all.minus(&fruit).count("apple"), 1);
//! ```

/// Read-only and mutable multiset traits.
pub mod multiset;

/// Multiset implementation where each distinct element is stored once with its frequency.
pub mod set;

/// The allocation-free empty multiset.
pub mod empty;

/// Read-only multiset returned by the conversion functions.
pub mod frozen;

mod convert;
mod error;

#[cfg(feature = "rayon")]
mod rayon;

#[cfg(feature = "serde")]
mod serde;

pub use convert::{
    empty_multiset, multiset_of, mutable_multiset_of, ToFloatMultiset, ToMultiset, TryToMultiset,
};
pub use empty::{EmptyIterator, EmptyMultiset};
pub use error::MultisetError;
pub use frozen::FrozenMultiset;
pub use hashbrown::TryReserveError;
pub use multiset::{Multiset, MutableMultiset};
pub use set::HashMultiset;

/// Creates a [`FrozenMultiset`] containing the arguments.
///
/// Without arguments the result is the unallocated empty multiset.
///
/// ```
/// use hash_multiset::multiset;
///
/// let set = multiset![1, 2, 1];
///
/// assert_eq!(set.count(&1), 2);
/// assert!(multiset![0u8; 0].is_empty());
/// ```
#[macro_export]
macro_rules! multiset {
    ($value:expr; $n:expr) => {
        $crate::multiset_of(::std::iter::repeat($value).take($n))
    };
    ($($value:expr),* $(,)?) => {
        $crate::multiset_of([$($value),*])
    };
}

/// Creates a new [`HashMultiset`] containing the arguments.
///
/// ```
/// use hash_multiset::mutable_multiset;
///
/// let mut set = mutable_multiset!['a', 'b'];
/// set.insert('a');
///
/// assert_eq!(set.count(&'a'), 2);
/// ```
#[macro_export]
macro_rules! mutable_multiset {
    ($value:expr; $n:expr) => {
        $crate::mutable_multiset_of(::std::iter::repeat($value).take($n))
    };
    ($($value:expr),* $(,)?) => {
        $crate::mutable_multiset_of([$($value),*])
    };
}
