//! Duplicate-key detection over the ordered-record form.
//!
//! Duplicate keys are an expected, transient state of the record list (an
//! external editor cannot enforce uniqueness while a user types), so they are
//! reported as a queryable set rather than as an error.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use super::Entry;
use crate::hashing::DefaultHashBuilder;

/// Returns `true` if any key appears more than once in `records`.
///
/// Stops at the first repeated key.
pub(crate) fn has_duplicate_keys<K: Eq + Hash, V>(records: &[Entry<K, V>]) -> bool {
    let mut seen: HashSet<&K, DefaultHashBuilder> =
        HashSet::with_capacity_and_hasher(records.len(), DefaultHashBuilder::default());
    records.iter().any(|entry| !seen.insert(&entry.key))
}

/// The set of keys that appear more than once in a record list.
///
/// Membership is a property of the key, so every occurrence of a duplicated
/// key is reported identically.
///
/// # Examples
///
/// ```rust
/// use dualmap::{DuplicateKeys, Entry};
///
/// let records = vec![Entry::new("a", 1), Entry::new("b", 2), Entry::new("a", 3)];
/// let duplicates = DuplicateKeys::find(&records);
///
/// assert_eq!(duplicates.len(), 1);
/// assert!(duplicates.contains(&"a"));
/// assert!(!duplicates.contains(&"b"));
/// ```
pub struct DuplicateKeys<'a, K> {
    keys: HashSet<&'a K, DefaultHashBuilder>,
}

impl<'a, K: Eq + Hash> DuplicateKeys<'a, K> {
    /// Groups `records` by key and collects every key whose group has more
    /// than one record.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn find<V>(records: &'a [Entry<K, V>]) -> Self {
        let mut counts: HashMap<&'a K, usize, DefaultHashBuilder> =
            HashMap::with_capacity_and_hasher(records.len(), DefaultHashBuilder::default());
        for entry in records {
            *counts.entry(&entry.key).or_insert(0) += 1;
        }

        let keys = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key)
            .collect();
        Self { keys }
    }

    /// Returns `true` if `key` appears more than once.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Returns the number of distinct duplicated keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no key is duplicated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the duplicated keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &'a K> + '_ {
        self.keys.iter().copied()
    }

    /// Clones the duplicated keys into a set that no longer borrows the records.
    ///
    /// Useful for editors that keep the warning set across edits of the
    /// record list.
    #[must_use]
    pub fn into_owned(self) -> HashSet<K, DefaultHashBuilder>
    where
        K: Clone,
    {
        self.keys.into_iter().cloned().collect()
    }
}

impl<'a, K> IntoIterator for DuplicateKeys<'a, K> {
    type Item = &'a K;
    type IntoIter = std::collections::hash_set::IntoIter<&'a K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<K: Eq + Hash> PartialEq for DuplicateKeys<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq + Hash> Eq for DuplicateKeys<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for DuplicateKeys<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.keys.iter()).finish()
    }
}
