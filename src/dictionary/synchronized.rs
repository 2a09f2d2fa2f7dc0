//! The synchronized record-list / hash-map dictionary.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::duplicates::{DuplicateKeys, has_duplicate_keys};
use super::Entry;
use crate::error::DictionaryError;
use crate::extensions::{MergeStrategy, merge};
use crate::hashing::DefaultHashBuilder;

// =============================================================================
// SyncOutcome
// =============================================================================

/// The result of a [`flatten`](SynchronizedDictionary::flatten) or
/// [`reload`](SynchronizedDictionary::reload) pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOutcome {
    /// The target form was replaced from the source form.
    Synchronized {
        /// Number of associations written.
        entries: usize,
    },
    /// The record list contains duplicate keys; nothing was changed.
    SkippedDuplicateKeys {
        /// Number of distinct keys that appear more than once.
        duplicate_keys: usize,
    },
}

impl SyncOutcome {
    /// Returns `true` if the pass replaced its target form.
    #[inline]
    pub const fn is_synchronized(&self) -> bool {
        matches!(self, Self::Synchronized { .. })
    }

    /// Returns `true` if the pass was skipped because of duplicate keys.
    #[inline]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedDuplicateKeys { .. })
    }
}

// =============================================================================
// SynchronizedDictionary
// =============================================================================

/// A dictionary that keeps an ordered record list and a hash map in sync.
///
/// The hash map (the *map form*) is authoritative for every lookup and
/// mutation. The record list (the *ordered-record form*) is what a host
/// serialization framework or an external editor sees. The two are
/// synchronized explicitly:
///
/// - [`flatten`](Self::flatten) before persisting rewrites the records from
///   the map.
/// - [`reload`](Self::reload) after loading rebuilds the map from the records.
///
/// Both passes are skipped while the records contain a duplicate key, so that
/// an in-progress edit is never collapsed and the map is never rebuilt from
/// an ambiguous record set. [`duplicate_keys`](Self::duplicate_keys) reports
/// the offending keys.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Eq` and `Hash`.
/// * `V` - The value type.
/// * `S` - The hasher builder, [`DefaultHashBuilder`] unless given.
///
/// # Examples
///
/// ```rust
/// use dualmap::{Entry, SynchronizedDictionary};
///
/// let mut dictionary = SynchronizedDictionary::new();
/// dictionary.set("a", 1);
/// dictionary.flatten();
///
/// // An editor introduces a duplicate row.
/// dictionary.records_mut().push(Entry::new("a", 2));
/// assert!(dictionary.duplicate_keys().contains(&"a"));
///
/// // Reloading keeps the last synchronized map instead of guessing.
/// assert!(dictionary.reload().unwrap().is_skipped());
/// assert_eq!(dictionary.get(&"a"), Ok(&1));
/// ```
#[derive(Clone)]
pub struct SynchronizedDictionary<K, V, S = DefaultHashBuilder> {
    /// Ordered-record form, as persisted and edited externally
    records: Vec<Entry<K, V>>,
    /// Map form, authoritative at runtime
    map: HashMap<K, V, S>,
}

/// An iterator over the associations of a [`SynchronizedDictionary`].
pub type Iter<'a, K, V> = hash_map::Iter<'a, K, V>;

/// An iterator over the keys of a [`SynchronizedDictionary`].
pub type Keys<'a, K, V> = hash_map::Keys<'a, K, V>;

/// An iterator over the values of a [`SynchronizedDictionary`].
pub type Values<'a, K, V> = hash_map::Values<'a, K, V>;

/// A mutable iterator over the values of a [`SynchronizedDictionary`].
pub type ValuesMut<'a, K, V> = hash_map::ValuesMut<'a, K, V>;

/// An owning iterator over the associations of a [`SynchronizedDictionary`].
pub type IntoIter<K, V> = hash_map::IntoIter<K, V>;

impl<K, V> SynchronizedDictionary<K, V, DefaultHashBuilder> {
    /// Creates an empty dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dualmap::SynchronizedDictionary;
    ///
    /// let dictionary: SynchronizedDictionary<String, i32> = SynchronizedDictionary::new();
    /// assert!(dictionary.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty dictionary with room for `capacity` associations.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> SynchronizedDictionary<K, V, S> {
    /// Creates an empty dictionary using `hasher` for the map form.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            records: Vec::new(),
            map: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty dictionary with room for `capacity` associations,
    /// using `hasher` for the map form.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            map: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Creates a dictionary whose map form is `map`.
    ///
    /// The record list stays empty until the next [`flatten`](Self::flatten).
    #[inline]
    #[must_use]
    pub const fn from_map(map: HashMap<K, V, S>) -> Self {
        Self {
            records: Vec::new(),
            map,
        }
    }

    /// Returns the number of associations in the map form.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map form holds no associations.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the associations of the map form in arbitrary order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.map.iter()
    }

    /// Iterates over the keys of the map form in arbitrary order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.map.keys()
    }

    /// Iterates over the values of the map form in arbitrary order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        self.map.values()
    }

    /// Iterates mutably over the values of the map form in arbitrary order.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.map.values_mut()
    }

    /// Removes every association from the map form.
    ///
    /// The record list is untouched until the next [`flatten`](Self::flatten).
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the map form.
    #[inline]
    pub const fn as_map(&self) -> &HashMap<K, V, S> {
        &self.map
    }

    /// Consumes the dictionary, returning its map form.
    #[inline]
    pub fn into_map(self) -> HashMap<K, V, S> {
        self.map
    }

    /// Returns the ordered-record form.
    ///
    /// This is the view a host framework persists after calling
    /// [`flatten`](Self::flatten).
    #[inline]
    pub fn records(&self) -> &[Entry<K, V>] {
        &self.records
    }

    /// Returns the ordered-record form for external editing.
    ///
    /// Rows may be inserted, removed, reordered and edited freely, including
    /// into a state with duplicate keys. Call [`reload`](Self::reload) to make
    /// the edits visible through the map form.
    #[inline]
    pub const fn records_mut(&mut self) -> &mut Vec<Entry<K, V>> {
        &mut self.records
    }
}

impl<K, V, S> SynchronizedDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dualmap::{DictionaryError, SynchronizedDictionary};
    ///
    /// let mut dictionary = SynchronizedDictionary::new();
    /// dictionary.set("hello".to_string(), 42);
    ///
    /// assert_eq!(dictionary.get("hello"), Ok(&42));
    /// assert_eq!(dictionary.get("world"), Err(DictionaryError::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, DictionaryError<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).ok_or(DictionaryError::KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, DictionaryError<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key).ok_or(DictionaryError::KeyNotFound)
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    #[inline]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    /// Returns `true` if the map form contains `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns `true` if `key` is associated with exactly `value`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.map.get(key).is_some_and(|stored| stored == value)
    }

    /// Associates `value` with `key`, overwriting any previous value.
    ///
    /// Returns the previous value, if any.
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Associates `value` with `key` only if `key` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::DuplicateKey`] carrying `key` if it is
    /// already present. The dictionary is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dualmap::{DictionaryError, SynchronizedDictionary};
    ///
    /// let mut dictionary = SynchronizedDictionary::new();
    /// assert_eq!(dictionary.add('a', 1), Ok(()));
    /// assert_eq!(dictionary.add('a', 2), Err(DictionaryError::DuplicateKey('a')));
    /// assert_eq!(dictionary.get(&'a'), Ok(&1));
    /// ```
    pub fn add(&mut self, key: K, value: V) -> Result<(), DictionaryError<K>> {
        if self.map.contains_key(&key) {
            return Err(DictionaryError::DuplicateKey(key));
        }
        self.map.insert(key, value);
        Ok(())
    }

    /// Removes `key` from the map form.
    ///
    /// Returns `true` if an association was removed.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key).is_some()
    }

    /// Removes `key` only if it is associated with exactly `value`.
    ///
    /// Returns `true` if an association was removed.
    pub fn remove_entry<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        if self.contains_entry(key, value) {
            self.map.remove(key).is_some()
        } else {
            false
        }
    }

    /// Returns the set of keys that appear more than once in the record list.
    ///
    /// An editor uses this to mark conflicting rows. While the set is
    /// non-empty, [`flatten`](Self::flatten) and [`reload`](Self::reload) are
    /// skipped.
    #[inline]
    pub fn duplicate_keys(&self) -> DuplicateKeys<'_, K> {
        DuplicateKeys::find(&self.records)
    }

    /// Returns `true` if any key appears more than once in the record list.
    #[inline]
    pub fn has_duplicate_keys(&self) -> bool {
        has_duplicate_keys(&self.records)
    }

    /// Returns `true` if the record at `index` shares its key with another
    /// record. Out-of-range indices return `false`.
    pub fn is_duplicate_record(&self, index: usize) -> bool {
        self.records.get(index).is_some_and(|record| {
            self.records
                .iter()
                .filter(|other| other.key == record.key)
                .nth(1)
                .is_some()
        })
    }

    /// Rewrites the record list from the map form.
    ///
    /// If the current record list has no duplicate keys it is replaced by a
    /// fresh enumeration of the map form, in map iteration order. Otherwise it
    /// is left untouched. Never fails.
    ///
    /// Call this before a host framework persists [`records`](Self::records).
    pub fn flatten(&mut self) -> SyncOutcome
    where
        K: Clone,
        V: Clone,
    {
        if let Some(skipped) = self.skip_if_duplicated("flatten") {
            return skipped;
        }

        self.records.clear();
        self.records.extend(
            self.map
                .iter()
                .map(|(key, value)| Entry::new(key.clone(), value.clone())),
        );

        let entries = self.records.len();
        tracing::debug!(entries, "flattened dictionary into records");
        SyncOutcome::Synchronized { entries }
    }

    /// Rebuilds the map form from the record list.
    ///
    /// If the record list has no duplicate keys, the map form is replaced by
    /// one built from every record in order. Otherwise the map form keeps its
    /// last synchronized value; a dictionary that was never synchronized stays
    /// empty rather than partially populated.
    ///
    /// Call this after a host framework has populated
    /// [`records_mut`](Self::records_mut).
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvariantViolation`] if the rebuild meets a
    /// repeated key that the duplicate check missed. The map form is left
    /// unchanged in that case.
    pub fn reload(&mut self) -> Result<SyncOutcome, DictionaryError<K>>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        if let Some(skipped) = self.skip_if_duplicated("reload") {
            return Ok(skipped);
        }

        let mut rebuilt =
            HashMap::with_capacity_and_hasher(self.records.len(), self.map.hasher().clone());
        for record in &self.records {
            if rebuilt.contains_key(&record.key) {
                tracing::error!(
                    records = self.records.len(),
                    "duplicate key reached the rebuild after the duplicate check passed"
                );
                return Err(DictionaryError::InvariantViolation(record.key.clone()));
            }
            rebuilt.insert(record.key.clone(), record.value.clone());
        }
        self.map = rebuilt;

        let entries = self.map.len();
        tracing::debug!(entries, "reloaded dictionary from records");
        Ok(SyncOutcome::Synchronized { entries })
    }

    fn skip_if_duplicated(&self, pass: &'static str) -> Option<SyncOutcome> {
        if !self.has_duplicate_keys() {
            return None;
        }

        let duplicate_keys = self.duplicate_keys().len();
        tracing::warn!(
            pass,
            duplicate_keys,
            "records contain duplicate keys; skipping sync"
        );
        Some(SyncOutcome::SkippedDuplicateKeys { duplicate_keys })
    }

    /// Merges this dictionary with `other`, resolving shared keys with
    /// `strategy`.
    ///
    /// Values of `self` precede values of `other` in every group. The result
    /// has an empty record list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dualmap::SynchronizedDictionary;
    /// use dualmap::extensions::strategy;
    ///
    /// let left: SynchronizedDictionary<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let right: SynchronizedDictionary<_, _> = [("b", 3), ("c", 4)].into_iter().collect();
    ///
    /// let merged = left.merge(&right, strategy::last());
    /// assert_eq!(merged.get(&"b"), Ok(&3));
    /// assert_eq!(merged.len(), 3);
    /// ```
    #[must_use]
    pub fn merge<M>(&self, other: &Self, strategy: M) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
        M: MergeStrategy<K, V>,
    {
        let cloned = |(key, value): (&K, &V)| (key.clone(), value.clone());
        let merged = merge(self.iter().map(cloned), other.iter().map(cloned), strategy);

        let mut map = HashMap::with_capacity_and_hasher(merged.len(), self.map.hasher().clone());
        map.extend(merged);
        Self::from_map(map)
    }
}

impl<K, V, S> SynchronizedDictionary<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone + Default,
{
    /// Creates a dictionary from a persisted record list and reloads it.
    ///
    /// If `records` contains duplicate keys, the dictionary keeps them and its
    /// map form stays empty.
    ///
    /// # Errors
    ///
    /// Propagates [`DictionaryError::InvariantViolation`] from
    /// [`reload`](Self::reload).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dualmap::{Entry, SynchronizedDictionary};
    ///
    /// let records = vec![Entry::new("a", 1), Entry::new("b", 2)];
    /// let dictionary: SynchronizedDictionary<_, _> =
    ///     SynchronizedDictionary::from_records(records).unwrap();
    /// assert_eq!(dictionary.get(&"b"), Ok(&2));
    /// ```
    pub fn from_records(records: Vec<Entry<K, V>>) -> Result<Self, DictionaryError<K>> {
        let mut dictionary = Self {
            records,
            map: HashMap::default(),
        };
        dictionary.reload()?;
        Ok(dictionary)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for SynchronizedDictionary<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self {
            records: Vec::new(),
            map: HashMap::default(),
        }
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for SynchronizedDictionary<K, V, S> {
    #[inline]
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::from_map(map)
    }
}

impl<K, V, S> FromIterator<(K, V)> for SynchronizedDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K, V, S> Extend<(K, V)> for SynchronizedDictionary<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl<K, V, S> IntoIterator for SynchronizedDictionary<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a SynchronizedDictionary<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K, V, S> PartialEq for SynchronizedDictionary<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    /// Compares map forms; record lists are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V, S> Eq for SynchronizedDictionary<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for SynchronizedDictionary<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SynchronizedDictionary")
            .field("map", &self.map)
            .field("records", &self.records)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn populated() -> SynchronizedDictionary<String, i32> {
        let mut dictionary = SynchronizedDictionary::new();
        dictionary.set("a".to_string(), 1);
        dictionary.set("b".to_string(), 2);
        dictionary
    }

    fn sorted_records(dictionary: &SynchronizedDictionary<String, i32>) -> Vec<(String, i32)> {
        let mut pairs: Vec<(String, i32)> = dictionary
            .records()
            .iter()
            .map(|entry| (entry.key.clone(), entry.value))
            .collect();
        pairs.sort();
        pairs
    }

    #[rstest]
    fn test_new_creates_empty() {
        let dictionary: SynchronizedDictionary<String, i32> = SynchronizedDictionary::new();
        assert!(dictionary.is_empty());
        assert!(dictionary.records().is_empty());
    }

    #[rstest]
    fn test_set_overwrites_and_returns_previous(mut populated: SynchronizedDictionary<String, i32>) {
        assert_eq!(populated.set("a".to_string(), 10), Some(1));
        assert_eq!(populated.get("a"), Ok(&10));
        assert_eq!(populated.len(), 2);
    }

    #[rstest]
    fn test_add_leaves_map_unchanged_on_duplicate(
        mut populated: SynchronizedDictionary<String, i32>,
    ) {
        let before = populated.clone();
        let result = populated.add("a".to_string(), 99);

        assert_eq!(result, Err(DictionaryError::DuplicateKey("a".to_string())));
        assert_eq!(populated, before);
    }

    #[rstest]
    fn test_get_mut_modifies_in_place(mut populated: SynchronizedDictionary<String, i32>) {
        *populated.get_mut("b").unwrap() += 40;
        assert_eq!(populated.get("b"), Ok(&42));
        assert_eq!(
            populated.get_mut("z"),
            Err(DictionaryError::KeyNotFound)
        );
    }

    #[rstest]
    fn test_remove_reports_whether_removed(mut populated: SynchronizedDictionary<String, i32>) {
        assert!(populated.remove("a"));
        assert!(!populated.remove("a"));
        assert_eq!(populated.len(), 1);
    }

    #[rstest]
    fn test_remove_entry_requires_matching_value(
        mut populated: SynchronizedDictionary<String, i32>,
    ) {
        assert!(!populated.remove_entry("a", &2));
        assert!(populated.contains_key("a"));
        assert!(populated.remove_entry("a", &1));
        assert!(!populated.contains_key("a"));
    }

    #[rstest]
    fn test_flatten_replaces_records(mut populated: SynchronizedDictionary<String, i32>) {
        populated.records_mut().push(Entry::new("stale".to_string(), 0));

        let outcome = populated.flatten();

        assert_eq!(outcome, SyncOutcome::Synchronized { entries: 2 });
        assert_eq!(
            sorted_records(&populated),
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );
    }

    #[rstest]
    fn test_flatten_skips_when_records_have_duplicates(
        mut populated: SynchronizedDictionary<String, i32>,
    ) {
        populated.flatten();
        populated.records_mut().push(Entry::new("a".to_string(), 7));
        let before = populated.records().to_vec();

        let outcome = populated.flatten();

        assert_eq!(outcome, SyncOutcome::SkippedDuplicateKeys { duplicate_keys: 1 });
        assert_eq!(populated.records(), before.as_slice());
    }

    #[rstest]
    fn test_reload_rebuilds_map(mut populated: SynchronizedDictionary<String, i32>) {
        populated.flatten();
        populated.records_mut().push(Entry::new("c".to_string(), 3));
        populated.records_mut().retain(|entry| entry.key != "a");

        let outcome = populated.reload();

        assert_eq!(outcome, Ok(SyncOutcome::Synchronized { entries: 2 }));
        assert!(!populated.contains_key("a"));
        assert_eq!(populated.get("c"), Ok(&3));
    }

    #[rstest]
    fn test_reload_keeps_stale_map_when_records_have_duplicates(
        mut populated: SynchronizedDictionary<String, i32>,
    ) {
        populated.flatten();
        populated.records_mut().push(Entry::new("b".to_string(), 20));
        let before = populated.as_map().clone();

        let outcome = populated.reload();

        assert_eq!(
            outcome,
            Ok(SyncOutcome::SkippedDuplicateKeys { duplicate_keys: 1 })
        );
        assert_eq!(populated.as_map(), &before);
    }

    #[rstest]
    fn test_from_records_with_duplicates_stays_empty() {
        let records = vec![
            Entry::new("a".to_string(), 1),
            Entry::new("b".to_string(), 2),
            Entry::new("a".to_string(), 3),
        ];
        let dictionary: SynchronizedDictionary<String, i32> =
            SynchronizedDictionary::from_records(records).unwrap();

        assert!(dictionary.is_empty());
        assert_eq!(dictionary.records().len(), 3);
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(3, false)]
    fn test_is_duplicate_record(#[case] index: usize, #[case] expected: bool) {
        let mut dictionary: SynchronizedDictionary<&str, i32> = SynchronizedDictionary::new();
        dictionary.records_mut().extend([
            Entry::new("a", 1),
            Entry::new("b", 2),
            Entry::new("a", 3),
        ]);

        assert_eq!(dictionary.is_duplicate_record(index), expected);
    }

    #[rstest]
    fn test_merge_first_keeps_self(populated: SynchronizedDictionary<String, i32>) {
        let other: SynchronizedDictionary<String, i32> =
            [("b".to_string(), 20), ("c".to_string(), 30)]
                .into_iter()
                .collect();

        let merged = populated.merge(&other, crate::extensions::strategy::first());

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("b"), Ok(&2));
        assert_eq!(merged.get("c"), Ok(&30));
        assert!(merged.records().is_empty());
    }

    #[rstest]
    fn test_equality_ignores_records(populated: SynchronizedDictionary<String, i32>) {
        let mut flattened = populated.clone();
        flattened.flatten();
        assert_eq!(populated, flattened);
    }
}
