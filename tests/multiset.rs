use hash_multiset::{
    empty_multiset, multiset, mutable_multiset, EmptyMultiset, FrozenMultiset, HashMultiset,
    Multiset, MultisetError, MutableMultiset, ToMultiset, TryToMultiset,
};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashMap;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sets() -> impl Strategy<Value = HashMultiset<u8>> {
    vec(0u8..16, 0..64).prop_map(|values| values.into_iter().collect())
}

fn assert_consistent<M: Multiset<u8>>(set: &M) {
    let frequencies: usize = set.value_iter().map(|(_, count)| count).sum();

    assert_eq!(set.total_count(), frequencies);
    assert_eq!(set.len(), set.iter().count());
    assert_eq!(set.len(), set.value_iter().count());
    assert!(set.total_count() >= set.len());
    assert!(set.value_iter().all(|(value, count)| count > 0 && set.count(value) == count));
}

proptest! {
    #[test]
    fn counts_agree_with_iteration(set in sets()) {
        assert_consistent(&set);
        assert_consistent(&set.to_multiset());
    }

    #[test]
    fn plus_adds_frequencies(a in sets(), b in sets(), c in sets()) {
        let sum = a.plus(&b);

        for value in 0u8..16 {
            prop_assert_eq!(sum.count(&value), a.count(&value) + b.count(&value));
        }
        prop_assert_eq!(&sum, &b.plus(&a));
        prop_assert_eq!(sum.plus(&c), a.plus(&b.plus(&c)));
        assert_consistent(&sum);
    }

    #[test]
    fn minus_floors_at_zero(a in sets(), b in sets()) {
        let difference = a.minus(&b);

        for value in 0u8..16 {
            prop_assert_eq!(
                difference.count(&value),
                a.count(&value).saturating_sub(b.count(&value))
            );
        }
        prop_assert!(difference.iter().all(|value| a.count(value) > b.count(value)));
        assert_consistent(&difference);
    }

    #[test]
    fn conversion_counts_every_occurrence(values in vec(0u8..16, 0..64)) {
        let set = (&values).to_multiset();

        for value in 0u8..16 {
            let occurrences = values.iter().filter(|&&other| other == value).count();
            prop_assert_eq!(set.count(&value), occurrences);
        }
        prop_assert_eq!(set.total_count(), values.len());
    }

    #[test]
    fn add_matches_a_clamped_model(ops in vec((0u8..4, -5isize..6), 0..64)) {
        let mut set = HashMultiset::new();
        let mut model: HashMap<u8, isize> = HashMap::new();

        for (value, amount) in ops {
            let expected = (model.get(&value).copied().unwrap_or(0) + amount).max(0);
            model.insert(value, expected);

            prop_assert_eq!(set.add(value, amount), expected as usize);
        }

        prop_assert_eq!(&set, &model.try_to_mutable_multiset().unwrap());
        assert_consistent(&set);
    }
}

#[test]
fn empty_multiset_has_nothing() {
    init_logger();
    let set: EmptyMultiset<u8> = empty_multiset();

    assert_eq!(set.len(), 0);
    assert_eq!(set.total_count(), 0);
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.value_iter().next(), None);
    assert_consistent(&set);

    let frozen: FrozenMultiset<u8> = multiset![];
    assert!(frozen.is_empty());
    assert_eq!(frozen.capacity(), 0);
}

#[test]
fn round_trips_a_list() {
    let set = vec!["x", "x", "y"].to_multiset();

    assert_eq!(set.count("x"), 2);
    assert_eq!(set.count("y"), 1);
    assert_eq!(set.len(), 2);
    assert_eq!(set.total_count(), 3);
}

#[test]
fn put_leaves_existing_elements_alone() {
    init_logger();
    let mut set = mutable_multiset!["x", "x"];

    set.put("x", 10).unwrap();
    assert_eq!(set.count("x"), 2);

    assert_eq!(set.put("x", -1), Err(MultisetError::NegativeCount(-1)));
    assert_eq!(set.put("y", -1), Err(MultisetError::NegativeCount(-1)));
    assert_eq!(set.count("x"), 2);
    assert_eq!(set.count("y"), 0);
}

#[test]
fn over_removal_clears_the_element() {
    let mut set = HashMultiset::new();
    set.put('x', 3).unwrap();

    set.add('x', -5);

    assert_eq!(set.count(&'x'), 0);
    assert!(set.iter().all(|&value| value != 'x'));
}

#[test]
fn set_count_through_the_trait() {
    init_logger();
    fn reset<M: MutableMultiset<char>>(set: &mut M) -> Result<usize, MultisetError> {
        set.set('x', 0)
    }

    let mut set = mutable_multiset!['x', 'x'];

    assert_eq!(reset(&mut set), Ok(2));
    assert!(!set.contains(&'x'));
    assert_eq!(
        MutableMultiset::set_count(&mut set, 'x', -1),
        Err(MultisetError::NegativeCount(-1))
    );
}

#[test]
fn clear_element_returns_previous_frequency() {
    let mut set = mutable_multiset![4; 4];

    assert_eq!(set.clear_element(&5), 0);
    assert_eq!(set.clear_element(&4), 4);
    assert_eq!(set.count(&4), 0);
}

#[test]
fn bulk_operations_compose_on_single_occurrences() {
    let mut set: HashMultiset<&str> = HashMultiset::new();

    MutableMultiset::insert_all(&mut set, ["a", "a", "b"]);
    let removed = set.remove_all(["a", "c"]);

    assert_eq!(removed, 1);
    assert_eq!(set.count("a"), 1);
    assert_eq!(set.count("b"), 1);

    MutableMultiset::clear(&mut set);
    assert!(set.is_empty());
    assert_eq!(set.total_count(), 0);
}

#[test]
fn count_map_with_zero_entry() {
    init_logger();
    let set = HashMap::from([('a', 3), ('b', 0)]).try_to_multiset().unwrap();

    assert_eq!(set.count(&'a'), 3);
    assert_eq!(set.count(&'b'), 0);
    assert_eq!(set.len(), 1);
    assert!(set.iter().all(|&value| value != 'b'));
}

#[test]
fn get_and_index_are_aliases_for_count() {
    let set = multiset!['a', 'a'];

    assert_eq!(Multiset::get(&set, &'a'), 2);
    assert_eq!(set[&'a'], 2);
    assert_eq!(set[&'b'], 0);
}
