use crate::{EmptyMultiset, FrozenMultiset, HashMultiset};
use serde::de::{Error, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

impl<T, H> Serialize for HashMultiset<T, H>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.value_iter())
    }
}

impl<T, H> Serialize for FrozenMultiset<T, H>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.value_iter())
    }
}

impl<T> Serialize for EmptyMultiset<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_map(Some(0))?.end()
    }
}

/// Reads a map of element to frequency. Repeated keys have their frequencies summed
/// and zero frequencies are skipped. Fails if the frequencies sum past `usize::MAX`.
fn visit_counts<'de, A, T, S>(set: &mut HashMultiset<T, S>, mut map: A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de> + Eq + Hash,
    S: BuildHasher,
{
    set.reserve(map.size_hint().unwrap_or(0));

    while let Some((value, count)) = map.next_entry::<T, usize>()? {
        set.try_insert_many(value, count).map_err(A::Error::custom)?;
    }

    log::trace!("deserialized multiset with {} distinct elements", set.len());
    Ok(())
}

impl<'de, T, S> Deserialize<'de> for HashMultiset<T, S>
where
    T: Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsVisitor<T, S> {
            marker: PhantomData<HashMultiset<T, S>>,
        }

        impl<'de, T, S> Visitor<'de> for CountsVisitor<T, S>
        where
            T: Deserialize<'de> + Eq + Hash,
            S: BuildHasher + Default,
        {
            type Value = HashMultiset<T, S>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of elements to their frequencies")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = HashMultiset::with_hasher(S::default());
                visit_counts(&mut values, map)?;
                Ok(values)
            }
        }

        let visitor = CountsVisitor {
            marker: PhantomData,
        };
        deserializer.deserialize_map(visitor)
    }

    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsInPlaceVisitor<'a, T, S>(&'a mut HashMultiset<T, S>);

        impl<'a, 'de, T, S> Visitor<'de> for CountsInPlaceVisitor<'a, T, S>
        where
            T: Deserialize<'de> + Eq + Hash,
            S: BuildHasher + Default,
        {
            type Value = ();

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of elements to their frequencies")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                self.0.clear();
                visit_counts(self.0, map)
            }
        }

        deserializer.deserialize_map(CountsInPlaceVisitor(place))
    }
}

impl<'de, T, S> Deserialize<'de> for FrozenMultiset<T, S>
where
    T: Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        HashMultiset::<T, S>::deserialize(deserializer).map(Self::from)
    }
}
