//! Merging pair sequences with a strategy.

use std::collections::hash_map;
use std::hash::Hash;

use super::{MergeStrategy, ValueGroup};
use crate::hashing::DictionaryMap;

/// Merges two pair sequences into a map.
///
/// The result contains every key present in `first` or `second`. For each
/// key, the values are gathered in encounter order, all of `first`'s before
/// any of `second`'s, and resolved by `strategy`. Overlapping keys never
/// cause an error.
///
/// Both sources may be maps, dictionaries, or any iterator of pairs; a source
/// that repeats a key contributes every occurrence to the group.
///
/// # Complexity
///
/// O(n + m) for sources of length n and m.
///
/// # Examples
///
/// ```rust
/// use dualmap::extensions::strategy;
/// use dualmap::merge;
/// use std::collections::HashMap;
///
/// let a = HashMap::from([("a", 1), ("b", 2)]);
/// let b = HashMap::from([("b", 3), ("c", 4)]);
///
/// let first = merge(a.clone(), b.clone(), strategy::first());
/// assert_eq!(first, [("a", 1), ("b", 2), ("c", 4)].into_iter().collect());
///
/// let last = merge(a, b, strategy::last());
/// assert_eq!(last, [("a", 1), ("b", 3), ("c", 4)].into_iter().collect());
/// ```
pub fn merge<K, V, A, B, M>(first: A, second: B, strategy: M) -> DictionaryMap<K, V>
where
    K: Eq + Hash,
    A: IntoIterator<Item = (K, V)>,
    B: IntoIterator<Item = (K, V)>,
    M: MergeStrategy<K, V>,
{
    let mut groups: DictionaryMap<K, ValueGroup<V>> = DictionaryMap::default();
    for (key, value) in first.into_iter().chain(second) {
        match groups.entry(key) {
            hash_map::Entry::Occupied(mut occupied) => occupied.get_mut().push(value),
            hash_map::Entry::Vacant(vacant) => {
                vacant.insert(ValueGroup::new(value));
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, values)| {
            let value = strategy.resolve(&key, values);
            (key, value)
        })
        .collect()
}
