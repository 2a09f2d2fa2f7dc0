//! Merge strategies.
//!
//! A [`MergeStrategy`] resolves every value that shares one key into a single
//! value. [`merge`](crate::merge) hands it the values as a [`ValueGroup`], in
//! encounter order: the first source's values before the second source's.
//!
//! # Built-in Strategies
//!
//! | Strategy        | Result                                     |
//! |-----------------|--------------------------------------------|
//! | [`first()`]     | The earliest encountered value             |
//! | [`last()`]      | The latest encountered value               |
//! | [`reduce(f)`]   | Left fold of the group with `f`            |
//! | [`from_fn(f)`]  | Whatever `f(&key, group)` returns          |
//!
//! Any `Fn(&K, ValueGroup<V>) -> V` is a strategy as well; [`from_fn`] only
//! helps closure type inference.
//!
//! # Examples
//!
//! ```rust
//! use dualmap::extensions::strategy;
//! use dualmap::merge;
//!
//! let stock = [("apple", 3), ("pear", 1)];
//! let delivery = [("apple", 5), ("plum", 2)];
//!
//! let totals = merge(stock, delivery, strategy::reduce(|left: i32, right: i32| left + right));
//! assert_eq!(totals["apple"], 8);
//! assert_eq!(totals["plum"], 2);
//! ```

use smallvec::SmallVec;
use std::iter;

// =============================================================================
// ValueGroup
// =============================================================================

/// The non-empty, ordered group of values that share one key.
///
/// Non-emptiness is structural, so [`first`](Self::first) and
/// [`last`](Self::last) never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup<V> {
    head: V,
    tail: SmallVec<[V; 1]>,
}

impl<V> ValueGroup<V> {
    /// Creates a group holding a single value.
    #[inline]
    pub fn new(first: V) -> Self {
        Self {
            head: first,
            tail: SmallVec::new(),
        }
    }

    /// Appends a later-encountered value.
    #[inline]
    pub fn push(&mut self, value: V) {
        self.tail.push(value);
    }

    /// Returns the number of values, always at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Returns `true` if more than one value shares the key.
    #[inline]
    pub fn is_conflict(&self) -> bool {
        !self.tail.is_empty()
    }

    /// Returns the earliest value.
    #[inline]
    pub const fn first(&self) -> &V {
        &self.head
    }

    /// Returns the latest value.
    #[inline]
    pub fn last(&self) -> &V {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Iterates over the values in encounter order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &V> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    /// Consumes the group, returning the earliest value.
    #[inline]
    pub fn into_first(self) -> V {
        self.head
    }

    /// Consumes the group, returning the latest value.
    #[inline]
    pub fn into_last(self) -> V {
        let Self { head, mut tail } = self;
        tail.pop().unwrap_or(head)
    }

    /// Consumes the group, folding its values left-to-right with `function`.
    pub fn reduce<F>(self, function: F) -> V
    where
        F: FnMut(V, V) -> V,
    {
        self.tail.into_iter().fold(self.head, function)
    }

    /// Consumes the group, returning its values in encounter order.
    pub fn into_vec(self) -> Vec<V> {
        self.into_iter().collect()
    }
}

impl<V> IntoIterator for ValueGroup<V> {
    type Item = V;
    type IntoIter = iter::Chain<iter::Once<V>, smallvec::IntoIter<[V; 1]>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

// =============================================================================
// MergeStrategy
// =============================================================================

/// Resolves the values that share a key into one value.
///
/// Implementations should be pure: the result depends only on the key and
/// the group.
pub trait MergeStrategy<K, V> {
    /// Resolves `values`, all associated with `key`, into a single value.
    fn resolve(&self, key: &K, values: ValueGroup<V>) -> V;
}

impl<K, V, F> MergeStrategy<K, V> for F
where
    F: Fn(&K, ValueGroup<V>) -> V,
{
    #[inline]
    fn resolve(&self, key: &K, values: ValueGroup<V>) -> V {
        self(key, values)
    }
}

/// Keeps the earliest encountered value. See [`first`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct First;

impl<K, V> MergeStrategy<K, V> for First {
    #[inline]
    fn resolve(&self, _key: &K, values: ValueGroup<V>) -> V {
        values.into_first()
    }
}

/// Keeps the latest encountered value. See [`last`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Last;

impl<K, V> MergeStrategy<K, V> for Last {
    #[inline]
    fn resolve(&self, _key: &K, values: ValueGroup<V>) -> V {
        values.into_last()
    }
}

/// Folds the group with a binary function. See [`reduce`].
#[derive(Debug, Clone, Copy)]
pub struct Reduce<F>(F);

impl<K, V, F> MergeStrategy<K, V> for Reduce<F>
where
    F: Fn(V, V) -> V,
{
    fn resolve(&self, _key: &K, values: ValueGroup<V>) -> V {
        values.reduce(&self.0)
    }
}

/// Returns a strategy that keeps the earliest encountered value.
///
/// When merging `a` with `b`, this is `a`'s value if `a` has the key, else
/// `b`'s.
#[inline]
pub const fn first() -> First {
    First
}

/// Returns a strategy that keeps the latest encountered value.
///
/// When merging `a` with `b`, this is `b`'s value if `b` has the key, else
/// `a`'s.
#[inline]
pub const fn last() -> Last {
    Last
}

/// Returns a strategy that folds each group left-to-right with `function`.
#[inline]
pub const fn reduce<V, F>(function: F) -> Reduce<F>
where
    F: Fn(V, V) -> V,
{
    Reduce(function)
}

/// Returns `function` as a strategy, fixing its signature for inference.
///
/// # Examples
///
/// ```rust
/// use dualmap::extensions::strategy;
/// use dualmap::{ValueGroup, merge};
///
/// let longest = strategy::from_fn(|_, group: ValueGroup<String>| {
///     group.into_iter().max_by_key(String::len).unwrap_or_default()
/// });
///
/// let merged = merge(
///     [("id", "ab".to_string())],
///     [("id", "abcd".to_string())],
///     longest,
/// );
/// assert_eq!(merged["id"], "abcd");
/// ```
#[inline]
pub const fn from_fn<K, V, F>(function: F) -> F
where
    F: Fn(&K, ValueGroup<V>) -> V,
{
    function
}
