//! Projection and collection helpers for iterators of key-value pairs.

use std::hash::Hash;
use std::iter::FusedIterator;

use super::MergeStrategy;
use crate::error::DictionaryError;
use crate::hashing::{DefaultHashBuilder, DictionaryMap};

/// Collects `pairs` into a map, failing on the first repeated key.
pub(crate) fn collect_unique<K, V, I>(pairs: I) -> Result<DictionaryMap<K, V>, DictionaryError<K>>
where
    K: Eq + Hash,
    I: Iterator<Item = (K, V)>,
{
    let (lower_bound, _) = pairs.size_hint();
    let mut map = DictionaryMap::with_capacity_and_hasher(lower_bound, DefaultHashBuilder::default());
    for (key, value) in pairs {
        if map.contains_key(&key) {
            return Err(DictionaryError::DuplicateKey(key));
        }
        map.insert(key, value);
    }
    Ok(map)
}

// =============================================================================
// PairIteratorExt
// =============================================================================

/// Extension methods for any iterator of `(key, value)` pairs.
///
/// Strict collection (`map_on_key`, `map_on_value`, `to_map`) never resolves
/// a repeated key silently; use [`merge_with`](Self::merge_with) to resolve
/// overlap explicitly.
///
/// # Examples
///
/// ```rust
/// use dualmap::{DictionaryError, PairIteratorExt};
///
/// let pairs = vec![(1, "x"), (2, "y")];
///
/// let keys: Vec<i32> = pairs.iter().copied().select_keys().collect();
/// assert_eq!(keys, vec![1, 2]);
///
/// let collision = pairs.into_iter().map_on_key(|key| key % 1);
/// assert_eq!(collision, Err(DictionaryError::DuplicateKey(0)));
/// ```
pub trait PairIteratorExt<K, V>: Iterator<Item = (K, V)> + Sized {
    /// Projects every pair to its key, lazily.
    #[inline]
    fn select_keys(self) -> SelectKeys<Self> {
        SelectKeys { inner: self }
    }

    /// Projects every pair to its value, lazily.
    #[inline]
    fn select_values(self) -> SelectValues<Self> {
        SelectValues { inner: self }
    }

    /// Collects into a map after applying `function` to every key.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::DuplicateKey`] with the first transformed
    /// key that collides with an earlier one.
    fn map_on_key<K2, F>(self, mut function: F) -> Result<DictionaryMap<K2, V>, DictionaryError<K2>>
    where
        K2: Eq + Hash,
        F: FnMut(K) -> K2,
    {
        collect_unique(self.map(|(key, value)| (function(key), value)))
    }

    /// Collects into a map after applying `function` to every value.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::DuplicateKey`] if the source repeats a key.
    fn map_on_value<V2, F>(self, mut function: F) -> Result<DictionaryMap<K, V2>, DictionaryError<K>>
    where
        K: Eq + Hash,
        F: FnMut(V) -> V2,
    {
        collect_unique(self.map(|(key, value)| (key, function(value))))
    }

    /// Collects into a map.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::DuplicateKey`] if the source repeats a key.
    fn to_map(self) -> Result<DictionaryMap<K, V>, DictionaryError<K>>
    where
        K: Eq + Hash,
    {
        collect_unique(self)
    }

    /// Merges with `other`, resolving shared keys with `strategy`.
    ///
    /// Equivalent to [`merge(self, other, strategy)`](crate::merge).
    fn merge_with<I, M>(self, other: I, strategy: M) -> DictionaryMap<K, V>
    where
        K: Eq + Hash,
        I: IntoIterator<Item = (K, V)>,
        M: MergeStrategy<K, V>,
    {
        super::merge(self, other, strategy)
    }
}

impl<K, V, I> PairIteratorExt<K, V> for I where I: Iterator<Item = (K, V)> {}

// =============================================================================
// Projection Iterators
// =============================================================================

/// A lazy projection of a pair iterator onto its keys.
///
/// Created by [`PairIteratorExt::select_keys`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectKeys<I> {
    inner: I,
}

impl<K, V, I> Iterator for SelectKeys<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, I> DoubleEndedIterator for SelectKeys<I>
where
    I: DoubleEndedIterator<Item = (K, V)>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V, I> ExactSizeIterator for SelectKeys<I> where I: ExactSizeIterator<Item = (K, V)> {}

impl<K, V, I> FusedIterator for SelectKeys<I> where I: FusedIterator<Item = (K, V)> {}

/// A lazy projection of a pair iterator onto its values.
///
/// Created by [`PairIteratorExt::select_values`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectValues<I> {
    inner: I,
}

impl<K, V, I> Iterator for SelectValues<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, I> DoubleEndedIterator for SelectValues<I>
where
    I: DoubleEndedIterator<Item = (K, V)>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V, I> ExactSizeIterator for SelectValues<I> where I: ExactSizeIterator<Item = (K, V)> {}

impl<K, V, I> FusedIterator for SelectValues<I> where I: FusedIterator<Item = (K, V)> {}
