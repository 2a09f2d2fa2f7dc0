//! A single key-value record.

use std::fmt;

/// One association in the ordered-record form of a
/// [`SynchronizedDictionary`](crate::SynchronizedDictionary).
///
/// An `Entry` has no identity beyond its position in the record list. With the
/// `serde` feature it serializes as a record with exactly the fields `key` and
/// `value`.
///
/// # Examples
///
/// ```rust
/// use dualmap::Entry;
///
/// let entry = Entry::new("speed", 3.5);
/// assert_eq!(entry.key, "speed");
///
/// let (key, value) = entry.into_pair();
/// assert_eq!((key, value), ("speed", 3.5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    /// The key of the record.
    pub key: K,
    /// The value of the record.
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new record.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Converts the record into a `(key, value)` tuple.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Borrows the record as a `(&key, &value)` tuple.
    #[inline]
    pub const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_pair()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}: {:?}", self.key, self.value)
    }
}
